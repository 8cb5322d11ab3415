//! Chrome-backed session lifecycle
//!
//! Launch, stealth setup, navigation and teardown of the single browser
//! process a request owns.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chromiumoxide::browser::Browser;
use chromiumoxide::cdp::browser_protocol::network::EventRequestWillBeSent;
use chromiumoxide::page::Page;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::navigation::{NavigationResult, wait_for_network_idle, with_navigation_timeout};
use super::{PageSession, SessionLauncher};
use crate::browser_setup::launch_browser;
use crate::config::ScoutConfig;
use crate::error::{ScoutError, ScoutResult};
use crate::kromekover;
use crate::utils::PROFILE_DIR_PREFIX;

/// Budget for stealth setup on the blank page
const STEALTH_SETUP_TIMEOUT: Duration = Duration::from_secs(5);

/// One browser process, one page, one request
///
/// The handler task MUST be aborted after the browser closes, otherwise it
/// keeps polling a dead connection.
pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    page: Option<Page>,
    user_data_dir: Option<PathBuf>,
    network_idle: Duration,
    closed: bool,
}

impl BrowserSession {
    /// Launch a browser and prepare a stealth-configured blank page
    ///
    /// # Errors
    ///
    /// `ScoutError::BrowserLaunch` if Chrome cannot be found, downloaded,
    /// started, or cannot open a page. A partially started browser is closed
    /// before the error is returned.
    pub async fn open(config: &ScoutConfig) -> ScoutResult<Self> {
        let user_data_dir =
            std::env::temp_dir().join(format!("{PROFILE_DIR_PREFIX}{}", uuid::Uuid::new_v4()));

        let (browser, handler) = match launch_browser(config, &user_data_dir).await {
            Ok(launched) => launched,
            Err(e) => {
                // No session owns the profile yet
                remove_profile_dir(&user_data_dir);
                return Err(ScoutError::BrowserLaunch(format!("{e:#}")));
            }
        };

        let mut session = Self {
            browser,
            handler,
            page: None,
            user_data_dir: Some(user_data_dir),
            network_idle: config.network_idle(),
            closed: false,
        };

        match session.prepare_page(config).await {
            Ok(page) => {
                session.page = Some(page);
                Ok(session)
            }
            Err(e) => {
                session.shutdown().await;
                Err(ScoutError::BrowserLaunch(format!("{e:#}")))
            }
        }
    }

    /// Blank page first, stealth second, so init scripts run on the first real document
    async fn prepare_page(&self, config: &ScoutConfig) -> anyhow::Result<Page> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .context("Failed to create blank page")?;

        let profile = kromekover::Config::from_scout_config(config);
        match tokio::time::timeout(STEALTH_SETUP_TIMEOUT, kromekover::inject(&page, &profile)).await
        {
            Ok(Ok(())) => info!("Stealth injection complete"),
            Ok(Err(e)) => warn!("Stealth injection failed: {}", e),
            Err(_) => warn!("Stealth injection timeout"),
        }

        Ok(page)
    }

    async fn goto_and_settle(&self, url: &str) -> anyhow::Result<NavigationResult> {
        let page = self
            .page
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Session has no open page"))?;

        // Subscribe before navigating so no request escapes the idle tracking
        let mut requests = Box::pin(
            page.event_listener::<EventRequestWillBeSent>()
                .await
                .context("Failed to subscribe to network events")?,
        );

        page.goto(url).await.context("Failed to navigate")?;
        wait_for_network_idle(&mut requests, self.network_idle).await;

        let final_url = page
            .url()
            .await
            .context("Failed to read page URL")?
            .unwrap_or_else(|| url.to_string());
        let html = page.content().await.context("Failed to read page content")?;

        debug!("Settled at {} ({} bytes)", final_url, html.len());
        Ok(NavigationResult { final_url, html })
    }

    /// Close the browser, wait for the process, stop the handler, remove the profile
    async fn shutdown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        if let Some(page) = self.page.take()
            && let Err(e) = page.close().await
        {
            debug!("Failed to close page: {}", e);
        }

        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {}", e);
        }

        self.handler.abort();
        self.cleanup_temp_dir();
        info!("Browser session closed");
    }

    /// Blocking removal; Chrome must have exited so no file handles remain
    fn cleanup_temp_dir(&mut self) {
        if let Some(path) = self.user_data_dir.take() {
            remove_profile_dir(&path);
        }
    }
}

fn remove_profile_dir(path: &Path) {
    match std::fs::remove_dir_all(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(
            "Failed to clean up temp directory {}: {}. Manual cleanup may be required.",
            path.display(),
            e
        ),
    }
}

impl PageSession for BrowserSession {
    async fn navigate(&mut self, url: &str, timeout: Duration) -> ScoutResult<NavigationResult> {
        info!("Navigating to {}", url);
        with_navigation_timeout(
            async {
                self.goto_and_settle(url)
                    .await
                    .map_err(|e| ScoutError::Navigation {
                        url: url.to_string(),
                        message: format!("{e:#}"),
                    })
            },
            url,
            timeout,
        )
        .await
    }

    async fn close(mut self) {
        self.shutdown().await;
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        warn!("BrowserSession dropped without close - aborting handler and removing profile");
        // Browser::drop kills the Chrome process
        self.handler.abort();
        self.cleanup_temp_dir();
    }
}

/// Launches a fresh Chrome per request
#[derive(Clone)]
pub struct ChromeLauncher {
    config: Arc<ScoutConfig>,
}

impl ChromeLauncher {
    #[must_use]
    pub fn new(config: Arc<ScoutConfig>) -> Self {
        Self { config }
    }
}

impl SessionLauncher for ChromeLauncher {
    type Session = BrowserSession;

    async fn launch(&self) -> ScoutResult<BrowserSession> {
        BrowserSession::open(&self.config).await
    }
}

//! Test doubles and fixtures shared by the integration tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use article_scout::{
    NavigationResult, PageSession, ScoutConfig, ScoutError, ScoutResult, SessionLauncher,
    Summarize,
};

/// Scripted response for one URL
#[derive(Clone)]
pub enum Scripted {
    Page(NavigationResult),
    Error(fn(&str) -> ScoutError),
}

/// Shared counters a test inspects after the pipeline returns
#[derive(Default)]
pub struct SessionLog {
    pub launches: AtomicUsize,
    pub closes: AtomicUsize,
    pub navigations: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl SessionLog {
    pub fn launches(&self) -> usize {
        self.launches.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }
}

/// Launcher that hands out `FakeSession`s answering from a script
#[derive(Clone, Default)]
pub struct FakeLauncher {
    script: Arc<HashMap<String, Scripted>>,
    /// Used for any URL not in the script
    fallback: Option<Scripted>,
    fail_launch: bool,
    pub log: Arc<SessionLog>,
}

#[allow(dead_code)]
impl FakeLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_launch: true,
            ..Self::default()
        }
    }

    pub fn page(mut self, url: &str, final_url: &str, html: &str) -> Self {
        Arc::make_mut(&mut self.script).insert(
            url.to_string(),
            Scripted::Page(NavigationResult {
                final_url: final_url.to_string(),
                html: html.to_string(),
            }),
        );
        self
    }

    pub fn error(mut self, url: &str, make: fn(&str) -> ScoutError) -> Self {
        Arc::make_mut(&mut self.script).insert(url.to_string(), Scripted::Error(make));
        self
    }

    /// Answer every unscripted URL with this page, final URL unchanged
    pub fn any_page(mut self, html: &str) -> Self {
        self.fallback = Some(Scripted::Page(NavigationResult {
            final_url: String::new(),
            html: html.to_string(),
        }));
        self
    }
}

impl SessionLauncher for FakeLauncher {
    type Session = FakeSession;

    async fn launch(&self) -> ScoutResult<FakeSession> {
        self.log.launches.fetch_add(1, Ordering::SeqCst);
        if self.fail_launch {
            return Err(ScoutError::BrowserLaunch("no chrome in test".to_string()));
        }
        Ok(FakeSession {
            launcher: self.clone(),
        })
    }
}

pub struct FakeSession {
    launcher: FakeLauncher,
}

impl PageSession for FakeSession {
    async fn navigate(&mut self, url: &str, _timeout: Duration) -> ScoutResult<NavigationResult> {
        self.launcher
            .log
            .navigations
            .lock()
            .unwrap()
            .push(url.to_string());

        let scripted = self
            .launcher
            .script
            .get(url)
            .cloned()
            .or_else(|| self.launcher.fallback.clone());

        match scripted {
            Some(Scripted::Page(mut result)) => {
                if result.final_url.is_empty() {
                    result.final_url = url.to_string();
                }
                Ok(result)
            }
            Some(Scripted::Error(make)) => Err(make(url)),
            None => Err(ScoutError::Navigation {
                url: url.to_string(),
                message: "unscripted URL".to_string(),
            }),
        }
    }

    async fn close(self) {
        self.launcher.log.closes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Summarizer that returns a fixed string and records its input
#[derive(Clone, Default)]
pub struct FakeSummarizer {
    pub inputs: Arc<Mutex<Vec<String>>>,
}

impl Summarize for FakeSummarizer {
    async fn summarize(&self, text: &str) -> String {
        self.inputs.lock().unwrap().push(text.to_string());
        "A short summary.".to_string()
    }
}

#[allow(dead_code)]
impl FakeSummarizer {
    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

/// Fast defaults for pipeline tests
#[allow(dead_code)]
pub fn test_config() -> ScoutConfig {
    ScoutConfig::builder()
        .navigation_timeout_secs(1)
        .network_idle_ms(10)
        .build()
        .unwrap()
}

pub const ARTICLE_URL: &str = "https://finance.yahoo.com/news/acme-beats-estimates-120000123.html";

/// Search results page with one target-domain article link
#[allow(dead_code)]
pub fn results_page() -> String {
    format!(
        r#"<html><body><div id="search">
            <a href="https://www.reuters.com/markets/acme">Reuters</a>
            <a href="{ARTICLE_URL}"><h3>Acme Corp beats Q3 earnings estimates</h3></a>
        </div></body></html>"#
    )
}

#[allow(dead_code)]
pub const EMPTY_RESULTS_PAGE: &str =
    r#"<html><body><div id="search"><p>Your search did not match any documents.</p></div></body></html>"#;

#[allow(dead_code)]
pub const ARTICLE_PAGE: &str = r#"<!DOCTYPE html><html><body>
    <h1 class="cover-title">Acme Corp beats Q3 earnings estimates</h1>
    <time datetime="2024-10-24T13:05:00.000Z">Thu, Oct 24, 2024, 9:05 AM</time>
    <div class="caas-body">
        <p>Acme Corp reported revenue of $1.2B.</p>
        <p>Shares rose 4% in premarket trading.</p>
    </div>
</body></html>"#;

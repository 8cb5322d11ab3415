//! Per-page stealth configuration
//!
//! Registers evasion scripts to run before any page script, overrides the
//! user agent over CDP and pins a desktop viewport. Must be applied to a blank
//! page before the first navigation.

use anyhow::Result;
use chromiumoxide::{Page, cdp};
use tracing::{debug, warn};

mod config;
pub use config::Config;

/// Hides the automation flag from page scripts
const NAVIGATOR_WEBDRIVER: &str = r"
    Object.defineProperty(Navigator.prototype, 'webdriver', {
        get: () => undefined,
        configurable: true
    });
";

/// Headless Chrome ships without `window.chrome`
const CHROME_RUNTIME: &str = r"
    if (!window.chrome) {
        window.chrome = {};
    }
    if (!window.chrome.runtime) {
        window.chrome.runtime = {
            connect: () => ({
                onMessage: { addListener: () => {}, removeListener: () => {} },
                postMessage: () => {}
            })
        };
    }
";

fn languages_script(config: &Config) -> String {
    format!(
        r"
        Object.defineProperty(Navigator.prototype, 'languages', {{
            get: () => {},
            configurable: true
        }});
        ",
        serde_json::to_string(&config.languages).unwrap_or_else(|_| "['en-US']".to_string())
    )
}

async fn add_init_script(page: &Page, name: &str, source: String) -> bool {
    let result = page
        .execute(
            cdp::browser_protocol::page::AddScriptToEvaluateOnNewDocumentParams {
                source,
                include_command_line_api: None,
                world_name: None,
                run_immediately: None,
            },
        )
        .await;

    match result {
        Ok(_) => {
            debug!("Injected: {}", name);
            true
        }
        Err(e) => {
            warn!("Failed to inject {}: {}", name, e);
            false
        }
    }
}

/// Apply stealth settings to a blank page
///
/// Script injection is best-effort; the user agent and viewport overrides
/// are required and propagate their errors.
pub async fn inject(page: &Page, config: &Config) -> Result<()> {
    debug!("Injecting stealth scripts");

    let scripts = [
        ("navigator_webdriver", NAVIGATOR_WEBDRIVER.to_string()),
        ("chrome_runtime", CHROME_RUNTIME.to_string()),
        ("navigator_languages", languages_script(config)),
    ];

    let total = scripts.len();
    let mut injected = 0;
    for (name, source) in scripts {
        if add_init_script(page, name, source).await {
            injected += 1;
        }
    }

    if injected == 0 {
        return Err(anyhow::anyhow!("Failed to inject any stealth scripts"));
    }

    debug!("Configuring user agent");
    page.execute(cdp::browser_protocol::network::SetUserAgentOverrideParams {
        user_agent: config.user_agent.clone(),
        accept_language: Some(config.accept_language.clone()),
        platform: Some(config.platform.clone()),
        user_agent_metadata: None,
    })
    .await?;

    page.execute(
        cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams::builder()
            .width(config.screen_width)
            .height(config.screen_height)
            .device_scale_factor(1.0)
            .mobile(false)
            .build()
            .map_err(anyhow::Error::msg)?,
    )
    .await?;

    debug!("Stealth injection complete: {}/{} scripts active", injected, total);
    Ok(())
}

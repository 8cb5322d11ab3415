//! Profile directory cleanup when Chrome fails to start
//!
//! Kept in its own test binary because it sets `CHROMIUM_PATH`.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use article_scout::utils::PROFILE_DIR_PREFIX;
use article_scout::{ChromeLauncher, ScoutConfig, ScoutError, SessionLauncher};

fn profile_dirs() -> HashSet<String> {
    std::fs::read_dir(std::env::temp_dir())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with(PROFILE_DIR_PREFIX))
        .collect()
}

#[tokio::test]
async fn test_failed_launch_removes_profile_dir() {
    let not_chrome = Path::new("/bin/false");
    if !not_chrome.exists() {
        return;
    }
    // SAFETY: the only test in this binary; nothing else reads the environment concurrently
    unsafe { std::env::set_var("CHROMIUM_PATH", not_chrome) };

    let before = profile_dirs();
    let config = Arc::new(ScoutConfig::builder().build().unwrap());
    let result = ChromeLauncher::new(config).launch().await;
    let after = profile_dirs();

    assert!(matches!(result, Err(ScoutError::BrowserLaunch(_))));
    let leaked: Vec<_> = after.difference(&before).collect();
    assert!(leaked.is_empty(), "leaked profile dirs: {leaked:?}");
}

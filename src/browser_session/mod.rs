//! Per-request browser sessions
//!
//! One request owns exactly one browser process and one page. Sessions are
//! never pooled or shared, and `PageSession::close` is the single release
//! point the pipeline calls on every exit path. `BrowserSession` also cleans
//! up in `Drop` should a request future be dropped mid-flight.

mod navigation;
mod session;

pub use navigation::{NavigationResult, with_navigation_timeout};
pub use session::{BrowserSession, ChromeLauncher};

use std::future::Future;
use std::time::Duration;

use crate::error::ScoutResult;

/// A live page that can be navigated and then released
pub trait PageSession: Send {
    /// Navigate and wait for the network to settle, bounded by `timeout`
    fn navigate(
        &mut self,
        url: &str,
        timeout: Duration,
    ) -> impl Future<Output = ScoutResult<NavigationResult>> + Send;

    /// Release the page and its browser process. Never fails.
    fn close(self) -> impl Future<Output = ()> + Send;
}

/// Acquires a fresh, stealth-configured session for one request
pub trait SessionLauncher: Send + Sync {
    type Session: PageSession;

    fn launch(&self) -> impl Future<Output = ScoutResult<Self::Session>> + Send;
}

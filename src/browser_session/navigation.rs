//! Navigation with a network-idle settle and a hard time budget

use std::future::Future;
use std::time::Duration;

use futures::{Stream, StreamExt};
use tracing::debug;

use crate::error::{ScoutError, ScoutResult};

/// Snapshot of a page once navigation has settled. Used immediately, never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationResult {
    pub final_url: String,
    pub html: String,
}

/// Bound a navigation future by `timeout`.
///
/// Distinguishes a timeout (`ScoutError::Timeout`) from the operation's own
/// failure, which is passed through unchanged.
pub async fn with_navigation_timeout<F, T>(
    operation: F,
    url: &str,
    timeout: Duration,
) -> ScoutResult<T>
where
    F: Future<Output = ScoutResult<T>>,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(result) => result,
        Err(_) => Err(ScoutError::Timeout {
            url: url.to_string(),
            timeout_secs: timeout.as_secs(),
        }),
    }
}

/// Wait until no new request has started for `idle`.
///
/// `requests` yields one item per request the page starts. Pages that never
/// quiesce keep this waiting; the caller's timeout bounds it.
pub(crate) async fn wait_for_network_idle<S>(requests: &mut S, idle: Duration) -> usize
where
    S: Stream + Unpin,
{
    let mut seen = 0;
    loop {
        match tokio::time::timeout(idle, requests.next()).await {
            Ok(Some(_)) => seen += 1,
            Ok(None) | Err(_) => break,
        }
    }
    debug!("Network idle after {} further requests", seen);
    seen
}

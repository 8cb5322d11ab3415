//! Bot-challenge detection for search-engine navigations
//!
//! The engine redirects suspected automation to a challenge page whose URL
//! carries a fixed path marker. The marker is configuration: it is specific
//! to one engine and does not generalize to other providers.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Outcome of inspecting the settled search-page URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockStatus {
    Ok,
    Blocked,
}

impl BlockStatus {
    #[must_use]
    pub fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }
}

#[derive(Debug, Clone)]
pub struct BlockDetector {
    marker: String,
}

impl BlockDetector {
    #[must_use]
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// `Blocked` iff the final URL contains the challenge marker
    #[must_use]
    pub fn detect(&self, final_url: &str) -> BlockStatus {
        if final_url.contains(&self.marker) {
            warn!("Challenge page detected at {}", final_url);
            BlockStatus::Blocked
        } else {
            BlockStatus::Ok
        }
    }
}

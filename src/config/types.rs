//! Core configuration type for the article pipeline
//!
//! `ScoutConfig` is resolved once at startup and shared read-only by every
//! request. Nothing in here is mutated after `build()`.

use serde::{Deserialize, Serialize};

/// Main configuration struct for article discovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutConfig {
    /// Publishing domain the search is scoped to (no scheme, no path)
    pub(crate) target_domain: String,

    /// Article path prefix under `target_domain`, e.g. `/news`
    pub(crate) article_path: String,

    /// Search endpoint template containing a `{query}` placeholder
    pub(crate) search_endpoint: String,

    /// Substring of the final URL that identifies the challenge page.
    ///
    /// Engine-specific. Only meaningful for the engine in `search_endpoint`.
    pub(crate) block_marker: String,

    /// Timeout in seconds for each navigation (goto plus network settle)
    pub(crate) navigation_timeout_secs: u64,

    /// Quiet window in milliseconds that counts as "network idle"
    pub(crate) network_idle_ms: u64,

    pub(crate) headless: bool,
    pub(crate) viewport_width: u32,
    pub(crate) viewport_height: u32,
    pub(crate) user_agent: String,

    /// Maximum characters submitted to the completion endpoint
    pub(crate) summary_char_budget: usize,
    pub(crate) summary_instruction: String,

    pub(crate) llm_base_url: String,
    pub(crate) llm_model: String,

    /// Completion endpoint credential. Never serialized.
    #[serde(skip)]
    pub(crate) llm_api_key: Option<String>,
    pub(crate) llm_timeout_secs: u64,

    /// Run the content extraction stage after a link resolves
    pub(crate) extract_content: bool,

    /// Run the summarization stage after extraction
    pub(crate) summarize: bool,

    /// Attach the raw article markup to successful responses
    pub(crate) include_html: bool,

    /// Listen address for the HTTP API
    pub(crate) bind_addr: String,
}

impl ScoutConfig {
    /// Start a builder populated with defaults
    #[must_use]
    pub fn builder() -> super::builder::ScoutConfigBuilder {
        super::builder::ScoutConfigBuilder::default()
    }
}

impl Default for ScoutConfig {
    fn default() -> Self {
        super::builder::ScoutConfigBuilder::default().into_config()
    }
}

//! Shared configuration constants for article_scout
//!
//! Default values used by `ScoutConfig` and the pipeline stages, collected here
//! to keep magic numbers out of the hot paths.

/// Publisher whose news articles the search is biased toward
pub const DEFAULT_TARGET_DOMAIN: &str = "finance.yahoo.com";

/// Path prefix under the target domain that holds articles
pub const DEFAULT_ARTICLE_PATH: &str = "/news";

/// Search-engine endpoint template; `{query}` is replaced by the encoded query
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.google.com/search?q={query}";

/// Placeholder substituted inside the search endpoint template
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Path marker of the search engine's bot-challenge page
pub const DEFAULT_BLOCK_MARKER: &str = "/sorry/";

/// Per-navigation time budget: 30 seconds
///
/// Enforced per navigation call, never cumulatively across a request.
pub const DEFAULT_NAVIGATION_TIMEOUT_SECS: u64 = 30;

/// Network settle window: 500ms without a new request counts as loaded
pub const DEFAULT_NETWORK_IDLE_MS: u64 = 500;

/// Character budget for text submitted to the completion endpoint
pub const DEFAULT_SUMMARY_CHAR_BUDGET: usize = 4000;

/// Fixed instruction sent alongside the article text
pub const DEFAULT_SUMMARY_INSTRUCTION: &str = "Summarize the following news article in concise heavy points.";

/// Completion endpoint base URL (OpenAI-compatible)
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com";

/// Completion model identifier
pub const DEFAULT_LLM_MODEL: &str = "gpt-3.5-turbo";

/// Completion request timeout: 60 seconds
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;

/// Default listen address for the HTTP API
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Viewport width used for stealth sessions
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1920;

/// Viewport height used for stealth sessions
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 1080;

/// Chrome user agent string for stealth mode
///
/// Desktop Chrome on Windows. Bump alongside Chrome stable releases so the
/// version stays inside a plausible window.
///
/// Reference: https://chromiumdash.appspot.com/schedule
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

/// Summary returned when the completion request fails for any reason
pub const SUMMARY_FAILED: &str = "Failed to generate summary";

/// Summary returned when the completion response carries no choices,
/// or when summarization is switched off
pub const SUMMARY_UNAVAILABLE: &str = "No summary available";

/// Prefix of the per-session Chrome profile directories under the temp dir
pub const PROFILE_DIR_PREFIX: &str = "article_scout_chrome_";

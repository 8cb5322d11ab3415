//! Fluent builder for `ScoutConfig`
//!
//! Every field has a default, so `ScoutConfig::builder().build()` is valid.
//! `build()` rejects combinations the pipeline cannot run with.

use std::env;

use crate::error::{ScoutError, ScoutResult};
use crate::utils::{
    CHROME_USER_AGENT, DEFAULT_ARTICLE_PATH, DEFAULT_BIND_ADDR, DEFAULT_BLOCK_MARKER,
    DEFAULT_LLM_BASE_URL, DEFAULT_LLM_MODEL, DEFAULT_LLM_TIMEOUT_SECS,
    DEFAULT_NAVIGATION_TIMEOUT_SECS, DEFAULT_NETWORK_IDLE_MS, DEFAULT_SEARCH_ENDPOINT,
    DEFAULT_SUMMARY_CHAR_BUDGET, DEFAULT_SUMMARY_INSTRUCTION, DEFAULT_TARGET_DOMAIN,
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, QUERY_PLACEHOLDER,
};

use super::types::ScoutConfig;

pub struct ScoutConfigBuilder {
    target_domain: String,
    article_path: String,
    search_endpoint: String,
    block_marker: String,
    navigation_timeout_secs: u64,
    network_idle_ms: u64,
    headless: bool,
    viewport_width: u32,
    viewport_height: u32,
    user_agent: String,
    summary_char_budget: usize,
    summary_instruction: String,
    llm_base_url: String,
    llm_model: String,
    llm_api_key: Option<String>,
    llm_timeout_secs: u64,
    extract_content: bool,
    summarize: bool,
    include_html: bool,
    bind_addr: String,
}

impl Default for ScoutConfigBuilder {
    fn default() -> Self {
        Self {
            target_domain: DEFAULT_TARGET_DOMAIN.to_string(),
            article_path: DEFAULT_ARTICLE_PATH.to_string(),
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            block_marker: DEFAULT_BLOCK_MARKER.to_string(),
            navigation_timeout_secs: DEFAULT_NAVIGATION_TIMEOUT_SECS,
            network_idle_ms: DEFAULT_NETWORK_IDLE_MS,
            headless: true,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            user_agent: CHROME_USER_AGENT.to_string(),
            summary_char_budget: DEFAULT_SUMMARY_CHAR_BUDGET,
            summary_instruction: DEFAULT_SUMMARY_INSTRUCTION.to_string(),
            llm_base_url: DEFAULT_LLM_BASE_URL.to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_api_key: None,
            llm_timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
            extract_content: true,
            summarize: true,
            include_html: false,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str) -> ScoutResult<Option<T>> {
    match env_var(key) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| ScoutError::Config(format!("{key} has an invalid value: '{raw}'"))),
        None => Ok(None),
    }
}

impl ScoutConfigBuilder {
    /// Overlay `ARTICLE_SCOUT_*` environment variables (and `OPENAI_API_KEY`)
    /// on top of the current builder values.
    pub fn with_env(mut self) -> ScoutResult<Self> {
        if let Some(v) = env_var("ARTICLE_SCOUT_TARGET_DOMAIN") {
            self.target_domain = v;
        }
        if let Some(v) = env_var("ARTICLE_SCOUT_ARTICLE_PATH") {
            self.article_path = v;
        }
        if let Some(v) = env_var("ARTICLE_SCOUT_SEARCH_ENDPOINT") {
            self.search_endpoint = v;
        }
        if let Some(v) = env_var("ARTICLE_SCOUT_BLOCK_MARKER") {
            self.block_marker = v;
        }
        if let Some(v) = env_parse("ARTICLE_SCOUT_NAVIGATION_TIMEOUT_SECS")? {
            self.navigation_timeout_secs = v;
        }
        if let Some(v) = env_parse("ARTICLE_SCOUT_NETWORK_IDLE_MS")? {
            self.network_idle_ms = v;
        }
        if let Some(v) = env_parse("ARTICLE_SCOUT_HEADLESS")? {
            self.headless = v;
        }
        if let Some(v) = env_parse("ARTICLE_SCOUT_SUMMARY_CHAR_BUDGET")? {
            self.summary_char_budget = v;
        }
        if let Some(v) = env_var("ARTICLE_SCOUT_LLM_BASE_URL") {
            self.llm_base_url = v;
        }
        if let Some(v) = env_var("ARTICLE_SCOUT_LLM_MODEL") {
            self.llm_model = v;
        }
        if let Some(v) = env_var("ARTICLE_SCOUT_LLM_API_KEY").or_else(|| env_var("OPENAI_API_KEY")) {
            self.llm_api_key = Some(v);
        }
        if let Some(v) = env_parse("ARTICLE_SCOUT_LLM_TIMEOUT_SECS")? {
            self.llm_timeout_secs = v;
        }
        if let Some(v) = env_parse("ARTICLE_SCOUT_EXTRACT_CONTENT")? {
            self.extract_content = v;
        }
        if let Some(v) = env_parse("ARTICLE_SCOUT_SUMMARIZE")? {
            self.summarize = v;
        }
        if let Some(v) = env_parse("ARTICLE_SCOUT_INCLUDE_HTML")? {
            self.include_html = v;
        }
        if let Some(v) = env_var("ARTICLE_SCOUT_BIND_ADDR") {
            self.bind_addr = v;
        }
        Ok(self)
    }

    #[must_use]
    pub fn target_domain(mut self, domain: impl Into<String>) -> Self {
        self.target_domain = domain.into();
        self
    }

    #[must_use]
    pub fn article_path(mut self, path: impl Into<String>) -> Self {
        self.article_path = path.into();
        self
    }

    #[must_use]
    pub fn search_endpoint(mut self, template: impl Into<String>) -> Self {
        self.search_endpoint = template.into();
        self
    }

    #[must_use]
    pub fn block_marker(mut self, marker: impl Into<String>) -> Self {
        self.block_marker = marker.into();
        self
    }

    #[must_use]
    pub fn navigation_timeout_secs(mut self, secs: u64) -> Self {
        self.navigation_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn network_idle_ms(mut self, ms: u64) -> Self {
        self.network_idle_ms = ms;
        self
    }

    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    #[must_use]
    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn summary_char_budget(mut self, budget: usize) -> Self {
        self.summary_char_budget = budget;
        self
    }

    #[must_use]
    pub fn summary_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.summary_instruction = instruction.into();
        self
    }

    #[must_use]
    pub fn llm_base_url(mut self, url: impl Into<String>) -> Self {
        self.llm_base_url = url.into();
        self
    }

    #[must_use]
    pub fn llm_model(mut self, model: impl Into<String>) -> Self {
        self.llm_model = model.into();
        self
    }

    #[must_use]
    pub fn llm_api_key(mut self, key: impl Into<String>) -> Self {
        self.llm_api_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn llm_timeout_secs(mut self, secs: u64) -> Self {
        self.llm_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn extract_content(mut self, enabled: bool) -> Self {
        self.extract_content = enabled;
        self
    }

    #[must_use]
    pub fn summarize(mut self, enabled: bool) -> Self {
        self.summarize = enabled;
        self
    }

    #[must_use]
    pub fn include_html(mut self, enabled: bool) -> Self {
        self.include_html = enabled;
        self
    }

    #[must_use]
    pub fn bind_addr(mut self, addr: impl Into<String>) -> Self {
        self.bind_addr = addr.into();
        self
    }

    /// Validate and produce the final configuration
    ///
    /// # Errors
    ///
    /// Returns `ScoutError::Config` when the domain or block marker is empty,
    /// the search template lacks `{query}`, or a timeout/budget is zero.
    pub fn build(self) -> ScoutResult<ScoutConfig> {
        let domain = self.target_domain.trim();
        if domain.is_empty() || domain.contains("://") || domain.contains('/') {
            return Err(ScoutError::Config(format!(
                "target_domain must be a bare host name, got '{}'",
                self.target_domain
            )));
        }
        if !self.article_path.starts_with('/') {
            return Err(ScoutError::Config(format!(
                "article_path must start with '/', got '{}'",
                self.article_path
            )));
        }
        if !self.search_endpoint.contains(QUERY_PLACEHOLDER) {
            return Err(ScoutError::Config(format!(
                "search_endpoint must contain the {QUERY_PLACEHOLDER} placeholder"
            )));
        }
        if self.block_marker.trim().is_empty() {
            return Err(ScoutError::Config("block_marker cannot be empty".to_string()));
        }
        if self.navigation_timeout_secs == 0 || self.llm_timeout_secs == 0 {
            return Err(ScoutError::Config("timeouts must be greater than zero".to_string()));
        }
        if self.summary_char_budget == 0 {
            return Err(ScoutError::Config(
                "summary_char_budget must be greater than zero".to_string(),
            ));
        }

        let mut config = self.into_config();
        config.target_domain = config.target_domain.trim().to_string();
        Ok(config)
    }

    pub(crate) fn into_config(self) -> ScoutConfig {
        ScoutConfig {
            target_domain: self.target_domain,
            article_path: self.article_path,
            search_endpoint: self.search_endpoint,
            block_marker: self.block_marker,
            navigation_timeout_secs: self.navigation_timeout_secs,
            network_idle_ms: self.network_idle_ms,
            headless: self.headless,
            viewport_width: self.viewport_width,
            viewport_height: self.viewport_height,
            user_agent: self.user_agent,
            summary_char_budget: self.summary_char_budget,
            summary_instruction: self.summary_instruction,
            llm_base_url: self.llm_base_url,
            llm_model: self.llm_model,
            llm_api_key: self.llm_api_key,
            llm_timeout_secs: self.llm_timeout_secs,
            extract_content: self.extract_content,
            summarize: self.summarize,
            include_html: self.include_html,
            bind_addr: self.bind_addr,
        }
    }
}

impl ScoutConfig {
    /// Resolve configuration from the process environment
    ///
    /// # Errors
    ///
    /// Fails when an environment variable cannot be parsed or the resulting
    /// configuration does not validate.
    pub fn from_env() -> ScoutResult<Self> {
        ScoutConfig::builder().with_env()?.build()
    }
}

//! Read-only accessors for `ScoutConfig`

use std::time::Duration;

use super::types::ScoutConfig;

impl ScoutConfig {
    #[must_use]
    pub fn target_domain(&self) -> &str {
        &self.target_domain
    }

    #[must_use]
    pub fn article_path(&self) -> &str {
        &self.article_path
    }

    #[must_use]
    pub fn search_endpoint(&self) -> &str {
        &self.search_endpoint
    }

    #[must_use]
    pub fn block_marker(&self) -> &str {
        &self.block_marker
    }

    #[must_use]
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    #[must_use]
    pub fn network_idle(&self) -> Duration {
        Duration::from_millis(self.network_idle_ms)
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        (self.viewport_width, self.viewport_height)
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn summary_char_budget(&self) -> usize {
        self.summary_char_budget
    }

    #[must_use]
    pub fn summary_instruction(&self) -> &str {
        &self.summary_instruction
    }

    #[must_use]
    pub fn llm_base_url(&self) -> &str {
        &self.llm_base_url
    }

    #[must_use]
    pub fn llm_model(&self) -> &str {
        &self.llm_model
    }

    #[must_use]
    pub fn llm_api_key(&self) -> Option<&str> {
        self.llm_api_key.as_deref()
    }

    #[must_use]
    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    #[must_use]
    pub fn extract_content(&self) -> bool {
        self.extract_content
    }

    #[must_use]
    pub fn summarize(&self) -> bool {
        self.summarize
    }

    #[must_use]
    pub fn include_html(&self) -> bool {
        self.include_html
    }

    #[must_use]
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
}

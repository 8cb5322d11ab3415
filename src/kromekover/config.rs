use crate::config::ScoutConfig;

/// Browser identity presented to page scripts
#[derive(Debug, Clone)]
pub struct Config {
    pub user_agent: String,
    pub accept_language: String,
    pub platform: String,
    pub languages: Vec<String>,
    pub screen_width: u32,
    pub screen_height: u32,
}

impl Config {
    #[must_use]
    pub fn from_scout_config(config: &ScoutConfig) -> Self {
        let (screen_width, screen_height) = config.viewport();
        Self {
            user_agent: config.user_agent().to_string(),
            screen_width,
            screen_height,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: crate::utils::CHROME_USER_AGENT.to_string(),
            accept_language: "en-US,en;q=0.9".to_string(),
            platform: "Win32".to_string(),
            languages: vec!["en-US".to_string(), "en".to_string()],
            screen_width: crate::utils::DEFAULT_VIEWPORT_WIDTH,
            screen_height: crate::utils::DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

//! Tests for the configuration builder and its validation

use std::time::Duration;

use article_scout::{ScoutConfig, ScoutError};

#[test]
fn test_builder_defaults() {
    let config = ScoutConfig::builder().build().unwrap();

    assert_eq!(config.target_domain(), "finance.yahoo.com");
    assert_eq!(config.article_path(), "/news");
    assert_eq!(config.block_marker(), "/sorry/");
    assert_eq!(config.navigation_timeout(), Duration::from_secs(30));
    assert_eq!(config.network_idle(), Duration::from_millis(500));
    assert_eq!(config.summary_char_budget(), 4000);
    assert_eq!(config.viewport(), (1920, 1080));
    assert!(config.headless());
    assert!(config.extract_content());
    assert!(config.summarize());
    assert!(!config.include_html());
    assert!(config.llm_api_key().is_none());
}

#[test]
fn test_builder_overrides() {
    let config = ScoutConfig::builder()
        .target_domain("www.reuters.com")
        .article_path("/markets")
        .block_marker("/captcha")
        .navigation_timeout_secs(5)
        .include_html(true)
        .build()
        .unwrap();

    assert_eq!(config.target_domain(), "www.reuters.com");
    assert_eq!(config.article_path(), "/markets");
    assert_eq!(config.block_marker(), "/captcha");
    assert_eq!(config.navigation_timeout(), Duration::from_secs(5));
    assert!(config.include_html());
}

#[test]
fn test_rejects_domain_with_scheme_or_path() {
    for domain in ["", "https://finance.yahoo.com", "finance.yahoo.com/news"] {
        let err = ScoutConfig::builder().target_domain(domain).build();
        assert!(matches!(err, Err(ScoutError::Config(_))), "domain: {domain:?}");
    }
}

#[test]
fn test_rejects_template_without_placeholder() {
    let err = ScoutConfig::builder()
        .search_endpoint("https://www.google.com/search?q=")
        .build();
    assert!(matches!(err, Err(ScoutError::Config(_))));
}

#[test]
fn test_rejects_zero_limits_and_empty_marker() {
    assert!(ScoutConfig::builder().navigation_timeout_secs(0).build().is_err());
    assert!(ScoutConfig::builder().llm_timeout_secs(0).build().is_err());
    assert!(ScoutConfig::builder().summary_char_budget(0).build().is_err());
    assert!(ScoutConfig::builder().block_marker("  ").build().is_err());
    assert!(ScoutConfig::builder().article_path("news").build().is_err());
}

#[test]
fn test_api_key_is_never_serialized() {
    let config = ScoutConfig::builder().llm_api_key("sk-secret").build().unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert!(!json.contains("sk-secret"));
    assert!(!json.contains("llm_api_key"));
}

//! End-to-end pipeline runs against scripted sessions

mod common;

use std::sync::Arc;

use article_scout::utils::{SUMMARY_FAILED, SUMMARY_UNAVAILABLE};
use article_scout::{
    ArticlePipeline, OpenAiSummarizer, PipelineOutcome, ScoutConfig, ScoutError, SearchRequest,
    build_search_url,
};
use common::{
    ARTICLE_PAGE, ARTICLE_URL, EMPTY_RESULTS_PAGE, FakeLauncher, FakeSummarizer, results_page,
    test_config,
};

const QUERY: &str = "Acme Corp earnings";

fn search_url(config: &ScoutConfig) -> String {
    build_search_url(QUERY, config).unwrap().into_string()
}

fn request() -> SearchRequest {
    SearchRequest::new(Some(QUERY)).unwrap()
}

fn pipeline(
    config: ScoutConfig,
    launcher: FakeLauncher,
) -> ArticlePipeline<FakeLauncher, FakeSummarizer> {
    ArticlePipeline::new(Arc::new(config), launcher, FakeSummarizer::default()).unwrap()
}

#[tokio::test]
async fn test_found_article_is_extracted_and_summarized() {
    let config = test_config();
    let search = search_url(&config);
    let launcher = FakeLauncher::new()
        .page(&search, &search, &results_page())
        .page(ARTICLE_URL, ARTICLE_URL, ARTICLE_PAGE);
    let log = Arc::clone(&launcher.log);
    let pipeline = pipeline(config, launcher);

    let outcome = pipeline.run(&request()).await;

    let (search_url, article_url, article, article_html) = match outcome {
        PipelineOutcome::Success {
            search_url,
            article_url,
            article,
            article_html,
        } => (search_url, article_url, article, article_html),
        other => panic!("expected success, got {other:?}"),
    };
    assert_eq!(search_url.as_str(), search);
    assert_eq!(article_url, ARTICLE_URL);
    assert_eq!(article.title, "Acme Corp beats Q3 earnings estimates");
    assert_eq!(article.date, "Thu, Oct 24, 2024, 9:05 AM");
    assert_eq!(
        article.content,
        "Acme Corp reported revenue of $1.2B.\n\nShares rose 4% in premarket trading."
    );
    assert_eq!(article.summary, "A short summary.");
    assert!(article_html.is_none());

    assert_eq!(log.navigations(), vec![search, ARTICLE_URL.to_string()]);
    assert_eq!(log.launches(), 1);
    assert_eq!(log.closes(), 1);
}

#[tokio::test]
async fn test_challenge_page_stops_before_link_resolution() {
    let config = test_config();
    let search = search_url(&config);
    let launcher = FakeLauncher::new().page(
        &search,
        "https://www.google.com/sorry/index?continue=https://www.google.com/search",
        &results_page(),
    );
    let log = Arc::clone(&launcher.log);

    let outcome = pipeline(config, launcher).run(&request()).await;

    assert_eq!(outcome, PipelineOutcome::Blocked);
    assert_eq!(log.navigations().len(), 1);
    assert_eq!(log.closes(), 1);
}

#[tokio::test]
async fn test_no_matching_link_reports_not_found_with_search_url() {
    let config = test_config();
    let search = search_url(&config);
    let launcher = FakeLauncher::new().page(&search, &search, EMPTY_RESULTS_PAGE);
    let log = Arc::clone(&launcher.log);

    let outcome = pipeline(config, launcher).run(&request()).await;

    match outcome {
        PipelineOutcome::NotFound { search_url } => assert_eq!(search_url.as_str(), search),
        other => panic!("expected not found, got {other:?}"),
    }
    assert_eq!(log.navigations().len(), 1);
    assert_eq!(log.closes(), 1);
}

#[tokio::test]
async fn test_relaxed_match_finds_link_outside_href() {
    let config = test_config();
    let search = search_url(&config);
    let html = r#"<div data-target='https://finance.yahoo.com/news/acme-q3.html'>Acme</div>"#;
    let launcher = FakeLauncher::new()
        .page(&search, &search, html)
        .any_page(ARTICLE_PAGE);

    let outcome = pipeline(config, launcher).run(&request()).await;

    match outcome {
        PipelineOutcome::Success { article_url, .. } => {
            assert_eq!(article_url, "https://finance.yahoo.com/news/acme-q3.html");
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[tokio::test]
async fn test_summarizer_failure_becomes_sentinel() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let config = ScoutConfig::builder()
        .navigation_timeout_secs(1)
        .network_idle_ms(10)
        .llm_base_url(server.url())
        .llm_api_key("test-key")
        .build()
        .unwrap();
    let search = search_url(&config);
    let launcher = FakeLauncher::new()
        .page(&search, &search, &results_page())
        .page(ARTICLE_URL, ARTICLE_URL, ARTICLE_PAGE);
    let log = Arc::clone(&launcher.log);
    let summarizer = OpenAiSummarizer::from_config(reqwest::Client::new(), &config);
    let pipeline = ArticlePipeline::new(Arc::new(config), launcher, summarizer).unwrap();

    let outcome = pipeline.run(&request()).await;

    match outcome {
        PipelineOutcome::Success { article, .. } => {
            assert_eq!(article.summary, SUMMARY_FAILED);
            assert_eq!(article.title, "Acme Corp beats Q3 earnings estimates");
        }
        other => panic!("expected success, got {other:?}"),
    }
    mock.assert_async().await;
    assert_eq!(log.closes(), 1);
}

#[tokio::test]
async fn test_navigation_timeout_is_a_failure_and_still_closes() {
    let config = test_config();
    let search = search_url(&config);
    let launcher = FakeLauncher::new()
        .page(&search, &search, &results_page())
        .error(ARTICLE_URL, |url| ScoutError::Timeout {
            url: url.to_string(),
            timeout_secs: 1,
        });
    let log = Arc::clone(&launcher.log);

    let outcome = pipeline(config, launcher).run(&request()).await;

    match outcome {
        PipelineOutcome::Failure { message } => assert!(message.contains("timed out")),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(log.closes(), 1);
}

#[tokio::test]
async fn test_search_navigation_error_is_a_failure_and_still_closes() {
    let config = test_config();
    let search = search_url(&config);
    let launcher = FakeLauncher::new().error(&search, |url| ScoutError::Navigation {
        url: url.to_string(),
        message: "net::ERR_NAME_NOT_RESOLVED".to_string(),
    });
    let log = Arc::clone(&launcher.log);

    let outcome = pipeline(config, launcher).run(&request()).await;

    assert!(matches!(outcome, PipelineOutcome::Failure { .. }));
    assert_eq!(log.closes(), 1);
}

#[tokio::test]
async fn test_launch_failure_is_a_failure_without_session() {
    let launcher = FakeLauncher::failing();
    let log = Arc::clone(&launcher.log);

    let outcome = pipeline(test_config(), launcher).run(&request()).await;

    match outcome {
        PipelineOutcome::Failure { message } => assert!(message.contains("launch")),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(log.launches(), 1);
    assert_eq!(log.closes(), 0);
    assert!(log.navigations().is_empty());
}

#[tokio::test]
async fn test_include_html_attaches_article_markup() {
    let config = ScoutConfig::builder()
        .network_idle_ms(10)
        .include_html(true)
        .build()
        .unwrap();
    let search = search_url(&config);
    let launcher = FakeLauncher::new()
        .page(&search, &search, &results_page())
        .page(ARTICLE_URL, ARTICLE_URL, ARTICLE_PAGE);

    let outcome = pipeline(config, launcher).run(&request()).await;

    match outcome {
        PipelineOutcome::Success { article_html, .. } => {
            assert_eq!(article_html.as_deref(), Some(ARTICLE_PAGE));
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[tokio::test]
async fn test_disabled_summarize_stage_skips_the_summarizer() {
    let config = ScoutConfig::builder()
        .network_idle_ms(10)
        .summarize(false)
        .build()
        .unwrap();
    let search = search_url(&config);
    let launcher = FakeLauncher::new()
        .page(&search, &search, &results_page())
        .page(ARTICLE_URL, ARTICLE_URL, ARTICLE_PAGE);
    let pipeline = pipeline(config, launcher);

    let outcome = pipeline.run(&request()).await;

    match outcome {
        PipelineOutcome::Success { article, .. } => {
            assert_eq!(article.summary, SUMMARY_UNAVAILABLE);
            assert!(!article.content.is_empty());
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[tokio::test]
async fn test_disabled_extraction_returns_link_only() {
    let config = ScoutConfig::builder()
        .network_idle_ms(10)
        .extract_content(false)
        .build()
        .unwrap();
    let search = search_url(&config);
    let launcher = FakeLauncher::new()
        .page(&search, &search, &results_page())
        .page(ARTICLE_URL, ARTICLE_URL, ARTICLE_PAGE);

    let outcome = pipeline(config, launcher).run(&request()).await;

    match outcome {
        PipelineOutcome::Success {
            article_url,
            article,
            ..
        } => {
            assert_eq!(article_url, ARTICLE_URL);
            assert!(article.title.is_empty());
            assert!(article.content.is_empty());
            assert_eq!(article.summary, SUMMARY_UNAVAILABLE);
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[tokio::test]
async fn test_summarizer_receives_extracted_content() {
    let config = test_config();
    let search = search_url(&config);
    let launcher = FakeLauncher::new()
        .page(&search, &search, &results_page())
        .page(ARTICLE_URL, ARTICLE_URL, ARTICLE_PAGE);
    let summarizer = FakeSummarizer::default();
    let pipeline =
        ArticlePipeline::new(Arc::new(config), launcher, summarizer.clone()).unwrap();

    pipeline.run(&request()).await;

    assert_eq!(
        summarizer.inputs(),
        vec!["Acme Corp reported revenue of $1.2B.\n\nShares rose 4% in premarket trading."]
    );
}

#[tokio::test]
async fn test_empty_article_still_reaches_summarizer() {
    let config = test_config();
    let search = search_url(&config);
    let launcher = FakeLauncher::new()
        .page(&search, &search, &results_page())
        .page(ARTICLE_URL, ARTICLE_URL, "<html><body><div>paywall</div></body></html>");
    let summarizer = FakeSummarizer::default();
    let pipeline =
        ArticlePipeline::new(Arc::new(config), launcher, summarizer.clone()).unwrap();

    let outcome = pipeline.run(&request()).await;

    assert!(matches!(outcome, PipelineOutcome::Success { .. }));
    assert_eq!(summarizer.inputs(), vec![String::new()]);
}

#[tokio::test]
async fn test_concurrent_requests_get_independent_sessions() {
    let config = test_config();
    let search = search_url(&config);
    let launcher = FakeLauncher::new()
        .page(&search, &search, &results_page())
        .page(ARTICLE_URL, ARTICLE_URL, ARTICLE_PAGE);
    let log = Arc::clone(&launcher.log);
    let pipeline = Arc::new(pipeline(config, launcher));

    let req = request();
    let (a, b) = tokio::join!(pipeline.run(&req), pipeline.run(&req));

    assert!(matches!(a, PipelineOutcome::Success { .. }));
    assert!(matches!(b, PipelineOutcome::Success { .. }));
    assert_eq!(log.launches(), 2);
    assert_eq!(log.closes(), 2);
}

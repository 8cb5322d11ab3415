//! Headless-browser news article discovery
//!
//! A search query is scoped to one publishing domain, run through a search
//! engine in a stealth-configured Chrome, and the first matching article is
//! fetched, extracted and summarized.

pub mod api;
pub mod browser_session;
pub mod browser_setup;
pub mod config;
pub mod error;
pub mod kromekover;
pub mod page_extractor;
pub mod pipeline;
pub mod summarizer;
pub mod utils;
pub mod web_search;

pub use browser_session::{
    BrowserSession, ChromeLauncher, NavigationResult, PageSession, SessionLauncher,
};
pub use browser_setup::{download_managed_browser, find_browser_executable, launch_browser};
pub use config::{ScoutConfig, ScoutConfigBuilder};
pub use error::{ScoutError, ScoutResult};
pub use page_extractor::{ContentExtractor, ExtractedArticle, SelectorSet};
pub use pipeline::{
    ArticleData, ArticlePipeline, PipelineOutcome, PipelineState, SearchRequest, SearchResponse,
};
pub use summarizer::{OpenAiSummarizer, Summarize, truncate_for_summary};
pub use web_search::{BlockDetector, BlockStatus, LinkResolver, SearchUrl, build_search_url};

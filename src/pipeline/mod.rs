//! Request orchestration
//!
//! Drives one request through search, block detection, link resolution,
//! article fetch, extraction and summarization. The session acquired for a
//! request is released exactly once, whatever the exit path.

mod outcome;
mod response;

pub use outcome::{ArticleData, PipelineOutcome, PipelineState, SearchRequest};
pub use response::{
    ERROR_BLOCKED, ERROR_FAILED, ERROR_MISSING_INPUT, MESSAGE_NOT_FOUND, SearchResponse,
};

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::browser_session::{PageSession, SessionLauncher};
use crate::config::ScoutConfig;
use crate::error::{ScoutError, ScoutResult};
use crate::page_extractor::{ContentExtractor, ExtractedArticle, SelectorSet};
use crate::summarizer::Summarize;
use crate::utils::SUMMARY_UNAVAILABLE;
use crate::web_search::{BlockDetector, LinkResolver, SearchUrl, build_search_url};

/// Stateless between requests; share it behind an `Arc`
pub struct ArticlePipeline<L, S> {
    config: Arc<ScoutConfig>,
    launcher: L,
    summarizer: S,
    detector: BlockDetector,
    resolver: LinkResolver,
    extractor: ContentExtractor,
}

impl<L, S> ArticlePipeline<L, S>
where
    L: SessionLauncher,
    S: Summarize,
{
    /// Compile link patterns and the default selectors for `config`
    ///
    /// # Errors
    ///
    /// `ScoutError::Config` if a link pattern cannot be compiled.
    pub fn new(config: Arc<ScoutConfig>, launcher: L, summarizer: S) -> ScoutResult<Self> {
        Self::with_selectors(config, launcher, summarizer, &SelectorSet::default())
    }

    /// Same as [`ArticlePipeline::new`] with a custom selector set
    ///
    /// # Errors
    ///
    /// `ScoutError::Config` if a link pattern or selector cannot be compiled.
    pub fn with_selectors(
        config: Arc<ScoutConfig>,
        launcher: L,
        summarizer: S,
        selectors: &SelectorSet,
    ) -> ScoutResult<Self> {
        Ok(Self {
            detector: BlockDetector::new(config.block_marker()),
            resolver: LinkResolver::from_config(&config)?,
            extractor: ContentExtractor::new(selectors)?,
            config,
            launcher,
            summarizer,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    /// Run one validated request to a terminal outcome
    pub async fn run(&self, request: &SearchRequest) -> PipelineOutcome {
        transition(PipelineState::Start);

        let search_url = match build_search_url(request.query(), &self.config) {
            Ok(url) => url,
            Err(e) => return fail(&e),
        };

        let mut session = match self.launcher.launch().await {
            Ok(session) => session,
            Err(e) => return fail(&e),
        };

        let result = self.drive(&mut session, search_url).await;
        session.close().await;

        match result {
            Ok(outcome) => outcome,
            Err(e) => fail(&e),
        }
    }

    /// Everything that needs the session. Returning early is always safe here
    /// because `run` owns the release.
    async fn drive(
        &self,
        session: &mut L::Session,
        search_url: SearchUrl,
    ) -> ScoutResult<PipelineOutcome> {
        let timeout = self.config.navigation_timeout();

        transition(PipelineState::Searching);
        let results = session.navigate(search_url.as_str(), timeout).await?;

        if self.detector.detect(&results.final_url).is_blocked() {
            transition(PipelineState::Blocked);
            warn!("Search engine challenge page at {}", results.final_url);
            return Ok(PipelineOutcome::Blocked);
        }

        transition(PipelineState::LinkResolving);
        let Some(article_url) = self.resolver.resolve(&results.html) else {
            transition(PipelineState::NotFound);
            info!("No article link for {}", search_url);
            return Ok(PipelineOutcome::NotFound { search_url });
        };
        info!("Resolved article link: {}", article_url);

        transition(PipelineState::ArticleFetching);
        let page = session.navigate(&article_url, timeout).await?;

        let extracted = if self.config.extract_content() {
            transition(PipelineState::Extracting);
            self.extractor.extract(&page.html)
        } else {
            ExtractedArticle::default()
        };

        let summary = if self.config.extract_content() && self.config.summarize() {
            transition(PipelineState::Summarizing);
            self.summarizer.summarize(&extracted.summary_source()).await
        } else {
            SUMMARY_UNAVAILABLE.to_string()
        };

        transition(PipelineState::Done);
        Ok(PipelineOutcome::Success {
            search_url,
            article_url,
            article: ArticleData::new(extracted, summary),
            article_html: self.config.include_html().then_some(page.html),
        })
    }
}

fn transition(state: PipelineState) {
    debug!(%state, "pipeline transition");
}

fn fail(e: &ScoutError) -> PipelineOutcome {
    transition(PipelineState::Failure);
    error!("Article search failed: {}", e);
    PipelineOutcome::failure(e)
}

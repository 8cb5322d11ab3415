//! Article content extraction
//!
//! Runs a primary and a secondary selector strategy over the settled article
//! markup and merges them field by field. Neither strategy alone survives
//! publisher redesigns, so an empty field is a degraded result, not an error.

// Sub-modules
pub mod extractors;
pub mod schema;

// Re-exports for public API
pub use extractors::{extract_primary, extract_secondary, merge};
pub use schema::{ExtractedArticle, PrimaryFields, SecondaryFields, SelectorSet};

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::debug;

use crate::error::{ScoutError, ScoutResult};
use extractors::CompiledSelectors;

/// Separator placed between body paragraphs
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

fn compile(kind: &str, raw: &str) -> ScoutResult<Selector> {
    Selector::parse(raw)
        .map_err(|e| ScoutError::Config(format!("invalid {kind} selector '{raw}': {e}")))
}

/// Compiled once; the default selector strings are constants
static DEFAULT_SELECTORS: LazyLock<CompiledSelectors> = LazyLock::new(|| {
    compile_set(&SelectorSet::default()).expect("default selectors are valid")
});

fn compile_set(set: &SelectorSet) -> ScoutResult<CompiledSelectors> {
    Ok(CompiledSelectors {
        primary_title: compile("primary title", &set.primary_title)?,
        primary_date: compile("primary date", &set.primary_date)?,
        primary_paragraphs: compile("primary paragraph", &set.primary_paragraphs)?,
        secondary_heading: compile("secondary heading", &set.secondary_heading)?,
        secondary_content: compile("secondary content", &set.secondary_content)?,
    })
}

#[derive(Debug, Clone)]
pub struct ContentExtractor {
    selectors: CompiledSelectors,
}

impl ContentExtractor {
    /// Compile a selector set
    ///
    /// # Errors
    ///
    /// Returns `ScoutError::Config` naming the first selector that fails to parse.
    pub fn new(set: &SelectorSet) -> ScoutResult<Self> {
        Ok(Self {
            selectors: compile_set(set)?,
        })
    }

    /// Extract title, date, body and supplementary text from article markup
    #[must_use]
    pub fn extract(&self, html: &str) -> ExtractedArticle {
        let document = Html::parse_document(html);
        let primary = extract_primary(&document, &self.selectors);
        let secondary = extract_secondary(&document, &self.selectors);

        debug!(
            "Extraction: primary title={} date={} paragraphs={}, secondary heading={} items={}",
            !primary.title.is_empty(),
            !primary.date.is_empty(),
            primary.paragraphs.len(),
            !secondary.heading.is_empty(),
            secondary.content.len()
        );

        merge(primary, secondary)
    }
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self {
            selectors: DEFAULT_SELECTORS.clone(),
        }
    }
}

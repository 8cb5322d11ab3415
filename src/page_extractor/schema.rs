use serde::{Deserialize, Serialize};

/// CSS selectors for both extraction strategies
///
/// Publisher markup changes across A/B layouts and redesigns, so the primary
/// and secondary sets target different generations of the article template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorSet {
    /// Cover/headline element
    pub primary_title: String,
    /// Machine-readable time element
    pub primary_date: String,
    /// Paragraphs inside the article body container
    pub primary_paragraphs: String,
    /// Generic top-level heading
    pub secondary_heading: String,
    /// Elements carrying the site-specific content class
    pub secondary_content: String,
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self {
            primary_title: ".cover-title, [data-test-locator='headline']".to_string(),
            primary_date: "time".to_string(),
            primary_paragraphs: ".caas-body p".to_string(),
            secondary_heading: "h1".to_string(),
            secondary_content: ".yf-1pe5jgt".to_string(),
        }
    }
}

/// Fields recovered by the primary strategy. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimaryFields {
    pub title: String,
    pub date: String,
    pub paragraphs: Vec<String>,
}

/// Fields recovered by the secondary strategy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecondaryFields {
    pub heading: String,
    pub content: Vec<String>,
}

/// Merged extraction result for one article page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedArticle {
    pub title: String,
    pub date: String,
    /// Body paragraphs joined by blank lines
    pub content: String,
    /// Secondary class-tagged text, in document order
    pub supplementary: Vec<String>,
}

impl ExtractedArticle {
    /// Text handed to the summarizer: `content`, or the supplementary text when
    /// no body paragraphs were recovered
    #[must_use]
    pub fn summary_source(&self) -> String {
        if self.content.trim().is_empty() {
            self.supplementary.join(super::PARAGRAPH_SEPARATOR)
        } else {
            self.content.clone()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.date.is_empty()
            && self.content.is_empty()
            && self.supplementary.is_empty()
    }
}

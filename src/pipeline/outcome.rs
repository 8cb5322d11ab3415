//! Pipeline inputs and terminal outcomes

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ScoutError, ScoutResult};
use crate::page_extractor::ExtractedArticle;
use crate::web_search::SearchUrl;

/// Validated user query. Never empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
}

impl SearchRequest {
    /// Validate a raw prompt before any browser work starts
    ///
    /// # Errors
    ///
    /// `ScoutError::MissingInput` when the prompt is absent or whitespace-only.
    pub fn new(prompt: Option<&str>) -> ScoutResult<Self> {
        match prompt.map(str::trim) {
            Some(query) if !query.is_empty() => Ok(Self {
                query: query.to_string(),
            }),
            _ => Err(ScoutError::MissingInput),
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Article fields returned to the client. `summary` is never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleData {
    pub title: String,
    pub date: String,
    pub content: String,
    pub summary: String,
    #[serde(default)]
    pub supplementary: Vec<String>,
}

impl ArticleData {
    #[must_use]
    pub fn new(extracted: ExtractedArticle, summary: String) -> Self {
        Self {
            title: extracted.title,
            date: extracted.date,
            content: extracted.content,
            summary,
            supplementary: extracted.supplementary,
        }
    }
}

/// Exactly one of these ends every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    Success {
        search_url: SearchUrl,
        article_url: String,
        article: ArticleData,
        /// Raw article markup, only when HTML capture is enabled
        article_html: Option<String>,
    },
    NotFound {
        search_url: SearchUrl,
    },
    Blocked,
    Failure {
        message: String,
    },
}

impl PipelineOutcome {
    #[must_use]
    pub fn failure(error: &ScoutError) -> Self {
        Self::Failure {
            message: error.to_string(),
        }
    }
}

/// States of one request's walk through the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Start,
    Searching,
    Blocked,
    LinkResolving,
    NotFound,
    ArticleFetching,
    Extracting,
    Summarizing,
    Done,
    Failure,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Searching => "searching",
            Self::Blocked => "blocked",
            Self::LinkResolving => "link_resolving",
            Self::NotFound => "not_found",
            Self::ArticleFetching => "article_fetching",
            Self::Extracting => "extracting",
            Self::Summarizing => "summarizing",
            Self::Done => "done",
            Self::Failure => "failure",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_prompts_are_rejected() {
        for prompt in [None, Some(""), Some("   "), Some("\t\n")] {
            assert!(matches!(SearchRequest::new(prompt), Err(ScoutError::MissingInput)));
        }
    }

    #[test]
    fn prompt_is_trimmed() {
        let request = SearchRequest::new(Some("  Acme Corp earnings \n")).expect("valid");
        assert_eq!(request.query(), "Acme Corp earnings");
    }

    #[test]
    fn article_data_always_carries_supplementary() {
        let data = ArticleData {
            title: "t".into(),
            summary: "s".into(),
            ..ArticleData::default()
        };
        let json = serde_json::to_value(&data).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "title": "t",
                "date": "",
                "content": "",
                "summary": "s",
                "supplementary": []
            })
        );
    }
}

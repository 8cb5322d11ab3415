//! Client-facing response shapes
//!
//! The four client states (error, blocked, not found, success) are
//! distinguishable from the `error` and `success` keys alone.

use axum::http::StatusCode;
use serde::Serialize;

use super::outcome::{ArticleData, PipelineOutcome};
use crate::error::ScoutError;
use crate::web_search::SearchUrl;

pub const ERROR_MISSING_INPUT: &str = "missing input";
pub const ERROR_BLOCKED: &str = "blocked";
pub const ERROR_FAILED: &str = "search failed";
pub const MESSAGE_NOT_FOUND: &str = "no article URL found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Error {
        error: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    NotFound {
        success: bool,
        message: &'static str,
        search_url: SearchUrl,
    },
    #[serde(rename_all = "camelCase")]
    Success {
        success: bool,
        search_url: SearchUrl,
        article_url: String,
        article_data: ArticleData,
        #[serde(skip_serializing_if = "Option::is_none")]
        article_html: Option<String>,
    },
}

impl SearchResponse {
    /// Map a request-level error that happened before the pipeline ran
    #[must_use]
    pub fn from_error(error: &ScoutError) -> (StatusCode, Self) {
        let response = match error {
            ScoutError::MissingInput => Self::Error {
                error: ERROR_MISSING_INPUT,
                message: None,
            },
            other => Self::Error {
                error: ERROR_FAILED,
                message: Some(other.to_string()),
            },
        };
        (error.status_code(), response)
    }
}

impl From<PipelineOutcome> for SearchResponse {
    fn from(outcome: PipelineOutcome) -> Self {
        match outcome {
            PipelineOutcome::Success {
                search_url,
                article_url,
                article,
                article_html,
            } => Self::Success {
                success: true,
                search_url,
                article_url,
                article_data: article,
                article_html,
            },
            PipelineOutcome::NotFound { search_url } => Self::NotFound {
                success: false,
                message: MESSAGE_NOT_FOUND,
                search_url,
            },
            PipelineOutcome::Blocked => Self::Error {
                error: ERROR_BLOCKED,
                message: None,
            },
            PipelineOutcome::Failure { message } => Self::Error {
                error: ERROR_FAILED,
                message: Some(message),
            },
        }
    }
}

impl PipelineOutcome {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Success { .. } | Self::NotFound { .. } => StatusCode::OK,
            Self::Blocked => StatusCode::TOO_MANY_REQUESTS,
            Self::Failure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{Summarize, truncate_for_summary};
use crate::config::ScoutConfig;
use crate::error::{ScoutError, ScoutResult};
use crate::utils::{SUMMARY_FAILED, SUMMARY_UNAVAILABLE};

/// Chat-completions client for any OpenAI-compatible endpoint
///
/// One request per article: no streaming, no retry.
#[derive(Debug, Clone)]
pub struct OpenAiSummarizer {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    instruction: String,
    char_budget: usize,
    timeout: Duration,
}

impl OpenAiSummarizer {
    #[must_use]
    pub fn from_config(client: reqwest::Client, config: &ScoutConfig) -> Self {
        Self {
            client,
            base_url: config.llm_base_url().to_string(),
            api_key: config.llm_api_key().map(str::to_string),
            model: config.llm_model().to_string(),
            instruction: config.summary_instruction().to_string(),
            char_budget: config.summary_char_budget(),
            timeout: config.llm_timeout(),
        }
    }

    fn endpoint_chat_completions(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Issue the completion request. `Ok(None)` means the response had no choices.
    ///
    /// # Errors
    ///
    /// Returns `ScoutError::Summarization` for a missing credential, transport
    /// failure, non-success status or an undecodable body.
    pub async fn request_summary(&self, text: &str) -> ScoutResult<Option<String>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ScoutError::Summarization("no API key configured".to_string()))?;

        let input = truncate_for_summary(text, self.char_budget);
        if input.len() < text.len() {
            debug!(
                "Truncated summary input from {} to {} characters",
                text.chars().count(),
                self.char_budget
            );
        }

        let req = ChatCompletionsRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: self.instruction.clone(),
                },
                Message {
                    role: "user".to_string(),
                    content: input.to_string(),
                },
            ],
            stream: false,
        };

        let resp = self
            .client
            .post(self.endpoint_chat_completions())
            .timeout(self.timeout)
            .bearer_auth(api_key)
            .json(&req)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScoutError::Summarization(format!(
                "chat.completions HTTP {status}"
            )));
        }

        let parsed: ChatCompletionsResponse = resp.json().await?;
        Ok(parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default()))
    }
}

impl Summarize for OpenAiSummarizer {
    async fn summarize(&self, text: &str) -> String {
        match self.request_summary(text).await {
            Ok(Some(summary)) => {
                info!("Generated summary ({} chars)", summary.len());
                summary.trim().to_string()
            }
            Ok(None) => {
                warn!("Completion response contained no choices");
                SUMMARY_UNAVAILABLE.to_string()
            }
            Err(e) => {
                warn!("Error generating summary: {}", e);
                SUMMARY_FAILED.to_string()
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct ChatCompletionsRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatCompletionsResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

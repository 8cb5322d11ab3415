//! Best-effort article summarization
//!
//! The completion endpoint sits behind the narrow [`Summarize`] seam so it can
//! be swapped or mocked without touching the pipeline. Implementations never
//! return an error: every failure is folded into a sentinel string.

mod openai;

pub use openai::OpenAiSummarizer;

use std::future::Future;

/// Something that turns article text into prose summary text
pub trait Summarize: Send + Sync {
    /// Summarize `text`. Always yields a string; failures yield a sentinel.
    fn summarize(&self, text: &str) -> impl Future<Output = String> + Send;
}

/// Cut `text` down to at most `budget` characters, on a char boundary
#[must_use]
pub fn truncate_for_summary(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

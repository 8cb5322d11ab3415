//! Search-engine side of the pipeline
//!
//! Builds the scoped search URL, recognises the engine's bot-challenge page
//! and pulls the first target-domain article link out of the result markup.

pub mod block_detector;
pub mod link_resolver;
pub mod query;

pub use block_detector::{BlockDetector, BlockStatus};
pub use link_resolver::{ArticleLink, LinkResolver};
pub use query::{SearchUrl, build_search_url, scoping_clause};

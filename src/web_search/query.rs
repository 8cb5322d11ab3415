//! Scoped search query construction
//!
//! Appends a `site:` clause for the target domain's article path to the user
//! query, percent-encodes the combined string and substitutes it into the
//! configured search endpoint template.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ScoutConfig;
use crate::error::{ScoutError, ScoutResult};
use crate::utils::QUERY_PLACEHOLDER;

/// Fully built search-engine URL. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchUrl(String);

impl SearchUrl {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SearchUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SearchUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The `site:` operator restricting results to the target article path
#[must_use]
pub fn scoping_clause(config: &ScoutConfig) -> String {
    format!("site:{}{}", config.target_domain(), config.article_path())
}

/// Build the search URL for an already-validated query
///
/// Same input always yields the same URL.
///
/// # Errors
///
/// Returns `ScoutError::Config` if the endpoint template does not produce a
/// parseable URL.
pub fn build_search_url(query: &str, config: &ScoutConfig) -> ScoutResult<SearchUrl> {
    let scoped = format!("{} {}", query, scoping_clause(config));
    let encoded = urlencoding::encode(&scoped);
    let raw = config.search_endpoint().replace(QUERY_PLACEHOLDER, &encoded);

    Url::parse(&raw).map_err(|e| {
        ScoutError::Config(format!("search endpoint produced an invalid URL '{raw}': {e}"))
    })?;

    Ok(SearchUrl(raw))
}

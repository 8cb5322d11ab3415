//! Article link extraction from search-result markup
//!
//! Two passes over the raw HTML, first match wins:
//! 1. strict: a quoted `href` attribute whose value starts with the article prefix
//! 2. relaxed: the same prefix anywhere in the markup, ended by a quote,
//!    whitespace, angle bracket or closing parenthesis. Catches links that only
//!    appear in inline script data or redirect wrappers.

use regex::Regex;
use tracing::{debug, info};

use crate::config::ScoutConfig;
use crate::error::{ScoutError, ScoutResult};

/// Fully-qualified article URL on the target domain. `None` means "not found".
pub type ArticleLink = Option<String>;

#[derive(Debug, Clone)]
pub struct LinkResolver {
    strict: Regex,
    relaxed: Regex,
}

impl LinkResolver {
    /// Compile both patterns for a domain and article path
    ///
    /// # Errors
    ///
    /// Returns `ScoutError::Config` if the patterns cannot be compiled.
    pub fn new(domain: &str, article_path: &str) -> ScoutResult<Self> {
        let prefix = format!(
            r"https?://{}{}",
            regex::escape(domain),
            regex::escape(article_path)
        );

        let strict = Regex::new(&format!(r#"href="({prefix}[^"]*)""#))
            .map_err(|e| ScoutError::Config(format!("invalid strict link pattern: {e}")))?;
        let relaxed = Regex::new(&format!(r#"{prefix}[^"'\s<>)]+"#))
            .map_err(|e| ScoutError::Config(format!("invalid relaxed link pattern: {e}")))?;

        Ok(Self { strict, relaxed })
    }

    /// Build a resolver for the configured target domain
    ///
    /// # Errors
    ///
    /// See [`LinkResolver::new`].
    pub fn from_config(config: &ScoutConfig) -> ScoutResult<Self> {
        Self::new(config.target_domain(), config.article_path())
    }

    /// Anchor `href` match only
    #[must_use]
    pub fn strict_match(&self, html: &str) -> ArticleLink {
        self.strict
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| decode_href(m.as_str()))
    }

    /// Bare-URL match anywhere in the markup
    #[must_use]
    pub fn relaxed_match(&self, html: &str) -> ArticleLink {
        self.relaxed.find(html).map(|m| decode_href(m.as_str()))
    }

    /// Strict pass, then relaxed pass
    #[must_use]
    pub fn resolve(&self, html: &str) -> ArticleLink {
        if let Some(url) = self.strict_match(html) {
            info!("Found article URL: {}", url);
            return Some(url);
        }

        debug!("No article anchor in search results, trying relaxed pattern");
        let url = self.relaxed_match(html);
        match &url {
            Some(found) => info!("Found article URL (relaxed match): {}", found),
            None => info!("No article URL found in search results"),
        }
        url
    }
}

/// Markup serializers escape `&` inside attribute values
fn decode_href(raw: &str) -> String {
    html_escape::decode_html_entities(raw).into_owned()
}

//! Selector-based field extraction over a parsed article document
//!
//! Both strategies are pure functions of the markup, so running them twice
//! over the same HTML yields identical results.

use scraper::{ElementRef, Html, Selector};

use super::PARAGRAPH_SEPARATOR;
use super::schema::{ExtractedArticle, PrimaryFields, SecondaryFields};

/// Compiled form of a `SelectorSet`
#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    pub(crate) primary_title: Selector,
    pub(crate) primary_date: Selector,
    pub(crate) primary_paragraphs: Selector,
    pub(crate) secondary_heading: Selector,
    pub(crate) secondary_content: Selector,
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn first_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .map(element_text)
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

fn all_texts(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// Time element text, falling back to its `datetime` attribute
fn date_text(document: &Html, selector: &Selector) -> String {
    let Some(element) = document.select(selector).next() else {
        return String::new();
    };

    let text = element_text(element);
    if !text.is_empty() {
        return text;
    }

    element
        .value()
        .attr("datetime")
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// Headline, time element and body paragraphs
pub fn extract_primary(document: &Html, selectors: &CompiledSelectors) -> PrimaryFields {
    PrimaryFields {
        title: first_text(document, &selectors.primary_title),
        date: date_text(document, &selectors.primary_date),
        paragraphs: all_texts(document, &selectors.primary_paragraphs),
    }
}

/// Generic heading and site-specific class-tagged elements
pub fn extract_secondary(document: &Html, selectors: &CompiledSelectors) -> SecondaryFields {
    SecondaryFields {
        heading: first_text(document, &selectors.secondary_heading),
        content: all_texts(document, &selectors.secondary_content),
    }
}

/// Per-field merge: primary wins wherever it produced something
pub fn merge(primary: PrimaryFields, secondary: SecondaryFields) -> ExtractedArticle {
    let title = if primary.title.is_empty() {
        secondary.heading
    } else {
        primary.title
    };

    let content = if primary.paragraphs.is_empty() {
        secondary.content.join(PARAGRAPH_SEPARATOR)
    } else {
        primary.paragraphs.join(PARAGRAPH_SEPARATOR)
    };

    ExtractedArticle {
        title,
        date: primary.date,
        content,
        supplementary: secondary.content,
    }
}

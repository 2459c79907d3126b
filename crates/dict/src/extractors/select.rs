// ABOUTME: Selector-based text extraction helpers over a parsed scraper document.
// ABOUTME: First-match text with ordered fallbacks, and capped document-ordered multi-match text.

//! Selector-based text extraction.
//!
//! Key behaviors:
//! - Element text is the concatenation of all descendant text nodes with
//!   whitespace runs collapsed and the ends trimmed.
//! - `first_text` tries selectors in order; the first selector that matches
//!   any element decides the result, even if that element is blank.
//! - `capped_texts` examines at most `cap` candidates and drops blank ones
//!   without pulling replacements from beyond the window.

use scraper::{ElementRef, Html};

use crate::extractors::compiled::{compile_group, get_or_compile};

/// Collapses runs of whitespace into single spaces and trims the ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized text content of an element.
pub fn element_text(el: ElementRef<'_>) -> String {
    normalize_whitespace(&el.text().collect::<String>())
}

/// Text of the first element matched by the first selector that matches anything.
///
/// Returns `None` when nothing matches or the winning element is blank.
pub fn first_text<S: AsRef<str>>(doc: &Html, selectors: &[S]) -> Option<String> {
    for css in selectors {
        let Some(sel) = get_or_compile(css.as_ref()) else {
            continue;
        };
        if let Some(el) = doc.select(&sel).next() {
            let text = element_text(el);
            return if text.is_empty() { None } else { Some(text) };
        }
    }
    None
}

/// Non-blank texts among the first `cap` elements matched by any of `patterns`.
///
/// Patterns are combined into one selector group, so candidates keep
/// document order across patterns.
pub fn capped_texts<S: AsRef<str>>(doc: &Html, patterns: &[S], cap: usize) -> Vec<String> {
    let Some(sel) = compile_group(patterns) else {
        return Vec::new();
    };
    doc.select(&sel)
        .take(cap)
        .map(element_text)
        .filter(|t| !t.is_empty())
        .collect()
}

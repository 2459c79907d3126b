// ABOUTME: Pre-compiled CSS selector cache shared by every extraction.
// ABOUTME: Invalid selectors are cached as None so they are parsed and reported only once.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use scraper::Selector;
use tracing::warn;

static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Selector>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Gets or compiles a CSS selector, caching the result.
///
/// Returns `None` for selectors that fail to parse.
pub fn get_or_compile(css: &str) -> Option<Selector> {
    {
        let cache = SELECTOR_CACHE.read().unwrap();
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            warn!(selector = css, error = %e, "ignoring invalid selector");
            None
        }
    };
    let mut cache = SELECTOR_CACHE.write().unwrap();
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

/// Compiles alternative patterns into one selector group.
///
/// Invalid patterns are dropped; the remaining ones are joined with `,` so
/// matches come back in document order across all of them.
pub fn compile_group<S: AsRef<str>>(patterns: &[S]) -> Option<Selector> {
    let valid: Vec<&str> = patterns
        .iter()
        .map(|p| p.as_ref())
        .filter(|p| !p.trim().is_empty() && get_or_compile(p).is_some())
        .collect();
    if valid.is_empty() {
        return None;
    }
    get_or_compile(&valid.join(", "))
}

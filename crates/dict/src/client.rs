// ABOUTME: The lookup Client: builds entry URLs, fetches pages through a PageSource, and extracts records.
// ABOUTME: Every lookup is independent; the client carries only configuration.

use scraper::Html;
use tracing::debug;
use url::Url;

use crate::error::{LookupError, RulesError};
use crate::extractors::entry::extract;
use crate::extractors::rules::DictionaryRules;
use crate::options::ClientBuilder;
use crate::record::WordRecord;
use crate::source::{HttpSource, PageSource};

/// URL path segment for a word: lowercased, trimmed, spaces replaced by `-`.
pub fn word_slug(word: &str) -> String {
    word.trim().to_lowercase().replace(' ', "-")
}

/// Looks words up in one dictionary.
#[derive(Debug, Clone)]
pub struct Client<S = HttpSource> {
    rules: DictionaryRules,
    base: Url,
    source: S,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl<S: PageSource> Client<S> {
    /// Create a client over an arbitrary page source.
    pub fn with_source(rules: DictionaryRules, source: S) -> Result<Self, RulesError> {
        rules.validate()?;
        let base = rules.base()?;
        Ok(Self {
            rules,
            base,
            source,
        })
    }

    pub fn rules(&self) -> &DictionaryRules {
        &self.rules
    }

    /// The entry page URL for `word`.
    pub fn entry_url(&self, word: &str) -> Result<Url, LookupError> {
        let slug = word_slug(word);
        if slug.is_empty() {
            return Err(LookupError::invalid_word(
                word,
                "EntryUrl",
                Some(anyhow::anyhow!("word is empty")),
            ));
        }
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                LookupError::invalid_word(
                    word,
                    "EntryUrl",
                    Some(anyhow::anyhow!("base URL cannot take path segments")),
                )
            })?
            .pop_if_empty()
            .push(&slug);
        Ok(url)
    }

    /// Fetch and extract the entry for `word`.
    ///
    /// `Ok(None)` means the page was fetched but held no definitions.
    pub async fn lookup(&self, word: &str) -> Result<Option<WordRecord>, LookupError> {
        let url = self.entry_url(word)?;
        debug!(word, %url, "looking up");
        let html = self
            .source
            .fetch_page(&url)
            .await
            .map_err(|e| e.for_word(word))?;
        Ok(self.lookup_html(&html, word))
    }

    /// Extract the entry for `word` from already-fetched markup.
    pub fn lookup_html(&self, html: &str, word: &str) -> Option<WordRecord> {
        let doc = Html::parse_document(html);
        extract(&doc, word, &self.rules)
    }
}

// ABOUTME: Builds a WordRecord from one parsed dictionary entry page using a rule set.
// ABOUTME: Returns None when the page yields no definitions.

use scraper::Html;
use tracing::debug;

use crate::extractors::rules::DictionaryRules;
use crate::extractors::select::{capped_texts, first_text};
use crate::record::WordRecord;

/// Extract a record for `word` from a parsed entry page.
///
/// Optional fields are filled when present. The result is `None` when the
/// word is blank or no definition survives, regardless of what else the
/// page contains.
pub fn extract(doc: &Html, word: &str, rules: &DictionaryRules) -> Option<WordRecord> {
    if word.trim().is_empty() {
        debug!(dictionary = %rules.name, "blank word, nothing to extract");
        return None;
    }

    let definitions = capped_texts(doc, &rules.definitions, rules.max_definitions);
    if definitions.is_empty() {
        debug!(word, dictionary = %rules.name, "no definitions on page");
        return None;
    }

    let pronunciation = first_text(doc, &rules.pronunciation);
    let pos = rules
        .part_of_speech
        .as_deref()
        .and_then(|sel| first_text(doc, &[sel]));
    let examples = capped_texts(doc, &rules.examples, rules.max_examples);

    debug!(
        word,
        definitions = definitions.len(),
        examples = examples.len(),
        "extracted entry"
    );

    Some(WordRecord {
        word: word.to_string(),
        pronunciation,
        pos,
        definitions,
        examples,
    })
}

/// Parse raw markup and extract a record from it.
pub fn extract_html(html: &str, word: &str, rules: &DictionaryRules) -> Option<WordRecord> {
    let doc = Html::parse_document(html);
    extract(&doc, word, rules)
}

// ABOUTME: WordRecord struct holding the structured result of one dictionary entry.
// ABOUTME: Fixed-shape record with builder helpers and formatting shortcuts.

use serde::{Deserialize, Serialize};

use crate::formats::{anki_row, display_block};

/// One extracted dictionary entry.
///
/// `word` is the term as requested, never normalized. Optional text fields
/// are `None` when the page had nothing for them; they render as empty
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    #[serde(default)]
    pub definitions: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl WordRecord {
    pub fn new(word: impl Into<String>, definitions: Vec<String>) -> Self {
        Self {
            word: word.into(),
            pronunciation: None,
            pos: None,
            definitions,
            examples: Vec::new(),
        }
    }

    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = Some(pronunciation.into());
        self
    }

    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }

    pub fn with_examples(mut self, examples: Vec<String>) -> Self {
        self.examples = examples;
        self
    }

    /// True when the record has at least one definition.
    ///
    /// Records without definitions are never produced by the extractor.
    pub fn is_found(&self) -> bool {
        !self.definitions.is_empty()
    }

    /// Render as the five import fields.
    pub fn to_row(&self) -> [String; 5] {
        anki_row(self)
    }

    /// Render as a human-readable block for the terminal.
    pub fn to_display(&self) -> String {
        display_block(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_fields() {
        let rec = WordRecord::new("test", vec!["a check".into()])
            .with_pronunciation("/test/")
            .with_pos("noun")
            .with_examples(vec!["This is a test.".into()]);
        assert_eq!(rec.pronunciation.as_deref(), Some("/test/"));
        assert_eq!(rec.pos.as_deref(), Some("noun"));
        assert_eq!(rec.examples.len(), 1);
        assert!(rec.is_found());
    }

    #[test]
    fn empty_definitions_is_not_found() {
        assert!(!WordRecord::new("nothing", vec![]).is_found());
    }

    #[test]
    fn json_omits_absent_fields() {
        let rec = WordRecord::new("minimal", vec!["Single definition".into()]);
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(
            json,
            r#"{"word":"minimal","definitions":["Single definition"],"examples":[]}"#
        );
        let back: WordRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }
}

// ABOUTME: Renders WordRecords into a flat five-field import row and a terminal display block.
// ABOUTME: Both renderings are pure; no truncation or HTML escaping happens here.

//! Record formatting.
//!
//! The import row embeds a literal `<br>` between list items. Flashcard
//! importers with HTML enabled render it as a line break; text is otherwise
//! passed through untouched, including any markup-like characters.

use crate::record::WordRecord;

/// Column names for the import file, in row order.
pub const ROW_HEADER: [&str; 5] = [
    "Word",
    "Pronunciation",
    "Part of Speech",
    "Definitions",
    "Examples",
];

/// Delimiter placed between list items inside a single row field.
pub const LINE_BREAK: &str = "<br>";

/// Prefix for each example, in both renderings.
pub const BULLET: &str = "•";

const RULE_WIDTH: usize = 60;

/// Numbered definitions joined by [`LINE_BREAK`]: `1. first<br>2. second`.
pub fn definitions_field(definitions: &[String]) -> String {
    definitions
        .iter()
        .enumerate()
        .map(|(i, d)| format!("{}. {}", i + 1, d))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

/// Bulleted examples joined by [`LINE_BREAK`]: `• one<br>• two`.
pub fn examples_field(examples: &[String]) -> String {
    examples
        .iter()
        .map(|e| format!("{} {}", BULLET, e))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

/// Render a record as the five import fields:
/// word, pronunciation, part of speech, definitions, examples.
///
/// Missing fields become empty strings, never placeholders.
pub fn anki_row(record: &WordRecord) -> [String; 5] {
    [
        record.word.clone(),
        record.pronunciation.clone().unwrap_or_default(),
        record.pos.clone().unwrap_or_default(),
        definitions_field(&record.definitions),
        examples_field(&record.examples),
    ]
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

/// Render a record as a multi-line block for interactive output.
///
/// Sections with nothing to show are left out entirely.
pub fn display_block(record: &WordRecord) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = Vec::new();

    lines.push(format!("\n{}", rule));
    lines.push(format!("Word: {}", record.word));

    if let Some(pron) = present(&record.pronunciation) {
        lines.push(format!("Pronunciation: {}", pron));
    }
    if let Some(pos) = present(&record.pos) {
        lines.push(format!("Part of Speech: {}", pos));
    }

    if !record.definitions.is_empty() {
        lines.push("\nDefinitions:".to_string());
        for (i, d) in record.definitions.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, d));
        }
    }

    if !record.examples.is_empty() {
        lines.push("\nExamples:".to_string());
        for e in &record.examples {
            lines.push(format!("  {} {}", BULLET, e));
        }
    }

    lines.push(format!("{}\n", rule));
    lines.join("\n")
}

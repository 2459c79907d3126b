// ABOUTME: Dictionary rule sets: base URL, selector patterns and list caps for one dictionary site.
// ABOUTME: Built-in presets are embedded JSON; custom rule sets load from JSON files.

//! Dictionary rule sets.
//!
//! A rule set tells the extractor where each field of a [`crate::WordRecord`]
//! lives on a dictionary entry page:
//!
//! - `pronunciation`: selectors tried in order; the first one with any match
//!   wins and only its first element is read.
//! - `part_of_speech`: a single selector; first match only.
//! - `definitions` / `examples`: alternative patterns combined into one
//!   document-ordered candidate list, of which at most `max_definitions` /
//!   `max_examples` candidates are examined.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::RulesError;

const BUILTIN_RULES_JSON: &str = include_str!("../../data/dictionaries.json");

/// Name of the preset used when none is requested.
pub const DEFAULT_PRESET: &str = "oxford";

/// Upper bound on definition candidates examined per entry.
pub const MAX_DEFINITIONS: usize = 5;

/// Upper bound on example candidates examined per entry.
pub const MAX_EXAMPLES: usize = 3;

fn default_max_definitions() -> usize {
    MAX_DEFINITIONS
}

fn default_max_examples() -> usize {
    MAX_EXAMPLES
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryRules {
    pub name: String,
    /// Entry pages live at `base_url` + word slug.
    pub base_url: String,
    #[serde(default)]
    pub pronunciation: Vec<String>,
    #[serde(default)]
    pub part_of_speech: Option<String>,
    pub definitions: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default = "default_max_definitions")]
    pub max_definitions: usize,
    #[serde(default = "default_max_examples")]
    pub max_examples: usize,
}

static BUILTIN_RULES: Lazy<Vec<DictionaryRules>> = Lazy::new(|| {
    serde_json::from_str(BUILTIN_RULES_JSON).expect("failed to parse builtin dictionary rules")
});

/// All built-in rule sets.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed.
pub fn builtin_rules() -> &'static [DictionaryRules] {
    &BUILTIN_RULES
}

impl DictionaryRules {
    /// Look up a built-in preset by name (case-insensitive).
    pub fn preset(name: &str) -> Result<Self, RulesError> {
        builtin_rules()
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| RulesError::UnknownPreset(name.to_string()))
    }

    /// The Oxford Learner's Dictionaries preset.
    pub fn oxford() -> Self {
        Self::builtin("oxford")
    }

    /// The Cambridge English dictionary preset.
    pub fn cambridge() -> Self {
        Self::builtin("cambridge")
    }

    // Presets named here ship in the embedded JSON.
    fn builtin(name: &str) -> Self {
        Self::preset(name).unwrap_or_else(|_| panic!("builtin dictionary preset {} missing", name))
    }

    pub fn from_json_str(json: &str) -> Result<Self, RulesError> {
        let rules: DictionaryRules =
            serde_json::from_str(json).map_err(|e| RulesError::Invalid(e.to_string()))?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Replace the base URL, e.g. to point at a mirror or a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Parsed base URL, always ending in `/` so slugs join as a last segment.
    pub fn base(&self) -> Result<Url, RulesError> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw)
            .map_err(|e| RulesError::Invalid(format!("base_url {:?}: {}", self.base_url, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(RulesError::Invalid(format!(
                "base_url scheme must be http or https, got {}",
                other
            ))),
        }
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        self.base()?;
        if self.definitions.iter().all(|d| d.trim().is_empty()) {
            return Err(RulesError::Invalid(format!(
                "rule set {:?} has no definition selectors",
                self.name
            )));
        }
        if self.max_definitions > MAX_DEFINITIONS {
            return Err(RulesError::Invalid(format!(
                "max_definitions must be at most {}, got {}",
                MAX_DEFINITIONS, self.max_definitions
            )));
        }
        if self.max_examples > MAX_EXAMPLES {
            return Err(RulesError::Invalid(format!(
                "max_examples must be at most {}, got {}",
                MAX_EXAMPLES, self.max_examples
            )));
        }
        Ok(())
    }
}

impl Default for DictionaryRules {
    fn default() -> Self {
        Self::oxford()
    }
}

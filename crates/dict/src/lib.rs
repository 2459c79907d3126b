// ABOUTME: Main library entry point for lexicard dictionary lookups.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, WordRecord, rule sets, formatting and export.

//! Lexicard - learner's dictionary lookups turned into flashcard rows.
//!
//! A lookup fetches one dictionary entry page, extracts a [`WordRecord`]
//! (pronunciation, part of speech, up to five definitions, up to three
//! examples) and renders it either as a tab-separated import row or as a
//! block of text for the terminal.
//!
//! # Example
//!
//! ```no_run
//! use lexicard_dict::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder().build()?;
//!     if let Some(record) = client.lookup("hello").await? {
//!         println!("{}", record.to_display());
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod export;
pub mod extractors;
pub mod formats;
pub mod options;
pub mod record;
pub mod source;

pub use crate::client::{word_slug, Client};
pub use crate::error::{BuildError, ErrorCode, ExportError, LookupError, RulesError};
pub use crate::export::{to_tsv_string, write_tsv_file, TsvWriter};
pub use crate::extractors::entry::{extract, extract_html};
pub use crate::extractors::rules::{builtin_rules, DictionaryRules, DEFAULT_PRESET};
pub use crate::formats::{anki_row, display_block, ROW_HEADER};
pub use crate::options::{ClientBuilder, Options};
pub use crate::record::WordRecord;
pub use crate::source::{HttpSource, PageSource, StaticSource};

// ABOUTME: Entry extraction: dictionary rule sets, selector helpers, and record building.
// ABOUTME: Turns a parsed dictionary page into a WordRecord.

//! Entry extraction module.
//!
//! Submodules:
//! - `rules`: per-dictionary selector rule sets and built-in presets.
//! - `compiled`: process-wide compiled selector cache.
//! - `select`: selector-based text helpers.
//! - `entry`: the extractor proper.

pub mod compiled;
pub mod entry;
pub mod rules;
pub mod select;

//! Shared data models for report records and extraction output structs.

pub mod report;

use report::IndexSuggestion;
use serde::Serialize;

#[derive(Debug, Default, Serialize)]
/// Per-stage accounting used by printers.
pub struct Summary {
    pub found: usize,
    pub skipped_path: usize,
    pub skipped_collection: usize,
    pub undecodable: usize,
    pub kept: usize,
}

#[derive(Debug, Serialize)]
/// Extraction results container.
pub struct ExtractResult {
    pub suggestions: Vec<IndexSuggestion>,
    pub summary: Summary,
}

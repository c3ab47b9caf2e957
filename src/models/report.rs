//! Record types for the scanned report: raw blocks and retained suggestions.

use serde::Serialize;
use serde_json::Value as Json;

#[derive(Debug, Clone, PartialEq)]
/// One structurally-delimited record from the report, prior to validation.
///
/// Captured text is kept as found; consumers trim it. `line_number` is
/// passthrough metadata and stays a string.
pub struct RawBlock {
    pub file_path: String,
    pub line_number: String,
    pub collection: String,
    pub fields_text: String,
    pub index_text: String,
}

#[derive(Debug, Clone, Serialize)]
/// A validated, retained record ready for output.
///
/// `definition` is the decoded index payload, opaque to this tool and
/// passed through unchanged (key order preserved).
pub struct IndexSuggestion {
    pub file_path: String,
    pub line_number: String,
    pub collection: String,
    pub fields: String,
    pub definition: Json,
}

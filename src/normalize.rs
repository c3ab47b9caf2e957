//! Decoding of the embedded index definition payload.
//!
//! The only stage permitted to discard data after the filter: a payload
//! that fails JSON decoding drops the whole record, silently. Callers
//! count drops for the summary; no per-record diagnostic is emitted.

use crate::models::report::{IndexSuggestion, RawBlock};
use serde_json::Value as Json;

/// Decode a filtered block into an [`IndexSuggestion`].
///
/// Trims the payload and attempts a best-effort JSON decode; the decoded
/// value is carried through opaque and unchanged. Returns `None` on any
/// decode failure (including an empty payload) — never an error.
pub fn normalize(block: RawBlock) -> Option<IndexSuggestion> {
    let definition: Json = serde_json::from_str(block.index_text.trim()).ok()?;
    Some(IndexSuggestion {
        file_path: block.file_path,
        line_number: block.line_number,
        collection: block.collection,
        fields: block.fields_text.trim().to_string(),
        definition,
    })
}

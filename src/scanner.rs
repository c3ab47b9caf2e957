//! Line-oriented scanner for the upstream index-analysis report.
//!
//! The report is human-oriented text in which suggestion records repeat as:
//!
//! ```text
//! 📌 <filePath>:<lineNumber>
//!   Collection: <collectionName>
//!   Fields: <fieldsText>
//!   Suggested index:
//!   <indexText…>
//! ```
//!
//! A record opens at a marker line and closes at the next marker line, the
//! footer separator, or end of input. `Fields:` and the index payload may
//! span multiple lines. Labels are recognized after trimming leading
//! whitespace; captured text is kept as found and trimmed by consumers.

use crate::models::report::RawBlock;
use regex::Regex;

/// Marker that opens one suggestion record.
pub const RECORD_MARKER: &str = "📌";
/// Label that carries the collection name.
pub const COLLECTION_LABEL: &str = "Collection:";
/// Label that opens the (possibly multi-line) fields description.
pub const FIELDS_LABEL: &str = "Fields:";
/// Label that opens the index payload.
pub const INDEX_LABEL: &str = "Suggested index:";

/// A footer separator is a run of box-drawing dashes, e.g. `──────`.
/// The report prints one between its body and its totals footer.
fn is_footer(line: &str) -> bool {
    let t = line.trim();
    !t.is_empty() && t.chars().all(|c| c == '─') && t.chars().count() >= 3
}

/// Scan the raw report text into an ordered sequence of [`RawBlock`]s.
///
/// Returns blocks in file order; zero matches is a valid result, not an
/// error. A record whose index payload is empty is still emitted (it fails
/// JSON decoding downstream, not here). Marker lines whose interior never
/// reaches the `Suggested index:` label produce no record; scanning resumes
/// at the next marker.
pub fn scan_blocks(text: &str) -> Vec<RawBlock> {
    // `lineNumber` is the trailing `:digits` suffix, so paths containing
    // `:` still parse (the leading capture is greedy).
    let header = Regex::new(&format!(r"^\s*{RECORD_MARKER}\s+(.+):(\d+)\s*$"))
        .expect("record header pattern");

    let mut blocks: Vec<RawBlock> = Vec::new();
    let mut open: Option<PartialBlock> = None;
    for line in text.lines() {
        if is_footer(line) {
            if let Some(pb) = open.take() {
                blocks.extend(pb.finish());
            }
            continue;
        }
        if let Some(caps) = header.captures(line) {
            if let Some(pb) = open.take() {
                blocks.extend(pb.finish());
            }
            open = Some(PartialBlock::open(caps[1].to_string(), caps[2].to_string()));
            continue;
        }
        if let Some(pb) = open.as_mut() {
            pb.feed(line);
        }
    }
    if let Some(pb) = open.take() {
        blocks.extend(pb.finish());
    }
    blocks
}

/// Which labeled section of the record the scanner is inside.
enum Section {
    /// After the marker, before `Fields:`.
    Preamble,
    /// Accumulating fields text until `Suggested index:`.
    Fields,
    /// Accumulating the index payload until the record closes.
    Index,
}

struct PartialBlock {
    file_path: String,
    line_number: String,
    collection: Option<String>,
    section: Section,
    fields: Vec<String>,
    index: Vec<String>,
}

impl PartialBlock {
    fn open(file_path: String, line_number: String) -> Self {
        Self {
            file_path,
            line_number,
            collection: None,
            section: Section::Preamble,
            fields: Vec::new(),
            index: Vec::new(),
        }
    }

    fn feed(&mut self, line: &str) {
        let t = line.trim_start();
        match self.section {
            Section::Preamble => {
                if let Some(rest) = t.strip_prefix(COLLECTION_LABEL) {
                    self.collection = Some(rest.trim().to_string());
                } else if let Some(rest) = t.strip_prefix(FIELDS_LABEL) {
                    self.fields.push(rest.to_string());
                    self.section = Section::Fields;
                }
                // Other preamble lines carry no captured field.
            }
            Section::Fields => {
                if t.trim_end() == INDEX_LABEL {
                    self.section = Section::Index;
                } else {
                    self.fields.push(line.to_string());
                }
            }
            Section::Index => self.index.push(line.to_string()),
        }
    }

    /// Close the record. `None` when the interior never formed the full
    /// labeled shape (missing collection or index label).
    fn finish(self) -> Option<RawBlock> {
        let collection = self.collection?;
        if !matches!(self.section, Section::Index) {
            return None;
        }
        Some(RawBlock {
            file_path: self.file_path,
            line_number: self.line_number,
            collection,
            fields_text: self.fields.join("\n"),
            index_text: self.index.join("\n"),
        })
    }
}

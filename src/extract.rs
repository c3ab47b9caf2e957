//! Extraction pipeline: load, scan, filter, normalize.
//!
//! Stages run strictly forward on one thread; the report is read whole.
//! Filtering and decode failures only shrink the result, they never abort.
//! A missing report file is the caller's fatal error (`io::Error` here).

use crate::filter::FilterCriteria;
use crate::models::{ExtractResult, Summary};
use crate::normalize;
use crate::scanner;
use std::fs;
use std::io;
use std::path::Path;

/// Run the full pipeline over the report at `report_path`.
pub fn run_extract(report_path: &Path, criteria: &FilterCriteria) -> io::Result<ExtractResult> {
    let text = fs::read_to_string(report_path)?;
    Ok(extract_from_str(&text, criteria))
}

/// Pipeline over in-memory report text.
///
/// Kept separate from the loader so the pure part is directly testable.
/// Discards are attributed to exactly one summary counter: a block failing
/// both filter predicates counts against the path exclusion.
pub fn extract_from_str(text: &str, criteria: &FilterCriteria) -> ExtractResult {
    let blocks = scanner::scan_blocks(text);
    let mut summary = Summary {
        found: blocks.len(),
        ..Summary::default()
    };
    let mut suggestions = Vec::new();
    for block in blocks {
        if !criteria.retains(&block) {
            if criteria.path_excluded(&block.file_path) {
                summary.skipped_path += 1;
            } else {
                summary.skipped_collection += 1;
            }
            continue;
        }
        match normalize::normalize(block) {
            Some(s) => suggestions.push(s),
            None => summary.undecodable += 1,
        }
    }
    summary.kept = suggestions.len();
    ExtractResult {
        suggestions,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::tempdir;

    fn block(path: &str, line: u32, collection: &str, index: &str) -> String {
        format!(
            "📌 {path}:{line}\n  Collection: {collection}\n  Fields: a (ASC), b (ASC)\n  Suggested index:\n  {index}\n\n"
        )
    }

    #[test]
    fn test_end_to_end_allow_list_gates_output() {
        let text = format!(
            "{}{}",
            block("app/api/foo.ts", 12, "team_members", "{\"fields\": [\"a\", \"b\"]}"),
            block("app/api/bar.ts", 30, "scratch_collection", "{\"fields\": [\"c\"]}"),
        );
        let res = extract_from_str(&text, &FilterCriteria::default());
        assert_eq!(res.summary.found, 2);
        assert_eq!(res.summary.kept, 1);
        assert_eq!(res.summary.skipped_collection, 1);
        assert_eq!(res.suggestions[0].definition, json!({"fields": ["a", "b"]}));
    }

    #[test]
    fn test_end_to_end_path_exclusion_yields_zero() {
        let text = block(
            "scripts/test-foo.ts",
            5,
            "team_members",
            "{\"fields\": [\"a\"]}",
        );
        let res = extract_from_str(&text, &FilterCriteria::default());
        assert_eq!(res.summary.found, 1);
        assert_eq!(res.summary.skipped_path, 1);
        assert_eq!(res.summary.kept, 0);
        assert!(res.suggestions.is_empty());
    }

    #[test]
    fn test_undecodable_payload_shrinks_count_by_one() {
        let good = format!(
            "{}{}",
            block("app/a.ts", 1, "team_members", "{\"fields\": [\"a\"]}"),
            block("app/b.ts", 2, "projects", "{\"fields\": [\"b\"]}"),
        );
        let bad = format!(
            "{}{}",
            block("app/a.ts", 1, "team_members", "{\"fields\": [\"a\"]}"),
            block("app/b.ts", 2, "projects", "{\"fields\": [\"b\","),
        );
        let res_good = extract_from_str(&good, &FilterCriteria::default());
        let res_bad = extract_from_str(&bad, &FilterCriteria::default());
        assert_eq!(res_good.summary.kept, 2);
        assert_eq!(res_bad.summary.kept, 1);
        assert_eq!(res_bad.summary.undecodable, 1);
    }

    #[test]
    fn test_zero_blocks_is_a_valid_result() {
        let res = extract_from_str("nothing to see\n", &FilterCriteria::default());
        assert_eq!(res.summary.found, 0);
        assert_eq!(res.summary.kept, 0);
        assert!(res.suggestions.is_empty());
    }

    #[test]
    fn test_run_extract_reads_report_from_disk() {
        let dir = tempdir().unwrap();
        let report = dir.path().join("index-analysis.txt");
        let mut f = std::fs::File::create(&report).unwrap();
        write!(
            f,
            "{}",
            block("app/api/foo.ts", 7, "projects", "{\"fields\": [\"x\"]}")
        )
        .unwrap();

        let res = run_extract(&report, &FilterCriteria::default()).unwrap();
        assert_eq!(res.summary.kept, 1);
        assert_eq!(res.suggestions[0].line_number, "7");
    }

    #[test]
    fn test_double_run_produces_identical_output_files() {
        let dir = tempdir().unwrap();
        let report = dir.path().join("index-analysis.txt");
        std::fs::write(
            &report,
            block(
                "app/api/foo.ts",
                3,
                "team_members",
                "{\"queryScope\": \"COLLECTION\", \"fields\": [\"a\", \"b\"]}",
            ),
        )
        .unwrap();
        let out = dir.path().join("index-definitions.json");

        let criteria = FilterCriteria::default();
        let res = run_extract(&report, &criteria).unwrap();
        crate::output::write_definitions(&res, &out).unwrap();
        let first = std::fs::read(&out).unwrap();

        let res = run_extract(&report, &criteria).unwrap();
        crate::output::write_definitions(&res, &out).unwrap();
        assert_eq!(first, std::fs::read(&out).unwrap());
    }

    #[test]
    fn test_run_extract_missing_report_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no-such-report.txt");
        let err = run_extract(&missing, &FilterCriteria::default()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}

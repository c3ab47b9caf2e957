//! Output rendering and the definitions file writer.
//!
//! Supports `human` (default) and `json` outputs. The JSON form carries the
//! suggestions, the summary, and the output file path. The definitions file
//! itself contains only the decoded index definitions, in pipeline order —
//! passthrough metadata stays on stdout.

use crate::models::ExtractResult;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::fs;
use std::io;
use std::path::Path;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print the count header and per-record detail in the requested format.
///
/// In `json` mode this prints the whole composed result once and the
/// written-file line is suppressed by `print_written`.
pub fn print_extract(res: &ExtractResult, output: &str, out_file: &str) {
    if output == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&compose_extract_json(res, out_file)).unwrap()
        );
        return;
    }
    let color = use_colors(output);
    let header = format!("🔎 {} index suggestions found", res.summary.kept);
    if color {
        println!("{}", header.bold());
    } else {
        println!("{}", header);
    }
    println!("{}", "─".repeat(44));
    for s in &res.suggestions {
        let loc = format!("{}:{}", s.file_path, s.line_number);
        if color {
            println!("📌 {} ({})", loc.bold(), s.collection.cyan());
        } else {
            println!("📌 {} ({})", loc, s.collection);
        }
        println!("   Fields: {}", s.fields);
        let pretty = serde_json::to_string_pretty(&s.definition).unwrap();
        for line in pretty.lines() {
            println!("   {}", line);
        }
    }
    let skipped = format!(
        "— skipped — path={} collection={} undecodable={}",
        res.summary.skipped_path, res.summary.skipped_collection, res.summary.undecodable
    );
    if color {
        println!("{}", skipped.bright_black());
    } else {
        println!("{}", skipped);
    }
}

/// Print the final success line naming the output file (human mode only).
///
/// The path is shown relative to the repo root when possible.
pub fn print_written(res: &ExtractResult, out_path: &Path, root: &Path, output: &str) {
    if output == "json" {
        return;
    }
    let shown = pathdiff::diff_paths(out_path, root)
        .unwrap_or_else(|| out_path.to_path_buf())
        .to_string_lossy()
        .to_string();
    let line = format!(
        "✅ wrote {} index definitions to {}",
        res.summary.kept, shown
    );
    if use_colors(output) {
        println!("{}", line.green().bold());
    } else {
        println!("{}", line);
    }
}

/// Write the definitions file: a pretty-printed JSON array of the decoded
/// index definitions only, overwriting any existing file at `out_path`.
pub fn write_definitions(res: &ExtractResult, out_path: &Path) -> io::Result<()> {
    let defs: Vec<&JsonVal> = res.suggestions.iter().map(|s| &s.definition).collect();
    let mut body = serde_json::to_string_pretty(&defs)?;
    body.push('\n');
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(out_path, body)
}

/// Compose the extract JSON object (pure) for testing/snapshot purposes.
pub fn compose_extract_json(res: &ExtractResult, out_file: &str) -> JsonVal {
    json!({
        "suggestions": serde_json::to_value(&res.suggestions).unwrap(),
        "summary": serde_json::to_value(&res.summary).unwrap(),
        "out": out_file,
    })
}

//! idxsift CLI binary entry point.
//! Delegates to modules for extraction and prints results.

mod cli;
mod config;
mod extract;
mod filter;
mod models;
mod normalize;
mod output;
mod scanner;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
// Colorization centralized in utils/output; no direct owo_colors usage here

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Extract {
            repo_root,
            report,
            out,
            output,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                report.as_deref(),
                out.as_deref(),
                output.as_deref(),
            );
            // Friendly note if no idxsift config was found
            if config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No idxsift.toml found; using defaults."
                );
            }
            // Friendly error if the report file is missing; nothing is
            // written in that case.
            let report_path = eff.repo_root.join(&eff.report);
            if !report_path.is_file() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!(
                        "Report file not found: {} (pass --report or configure idxsift.toml)",
                        report_path.to_string_lossy()
                    )
                );
                std::process::exit(2);
            }
            let result = match extract::run_extract(&report_path, &eff.criteria) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!("Failed to read report: {}", e)
                    );
                    std::process::exit(2);
                }
            };
            output::print_extract(&result, &eff.output, &eff.out);
            let out_path = eff.repo_root.join(&eff.out);
            if let Err(e) = output::write_definitions(&result, &out_path) {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!("Failed to write {}: {}", out_path.to_string_lossy(), e)
                );
                std::process::exit(2);
            }
            output::print_written(&result, &out_path, &eff.repo_root, &eff.output);
        }
    }
}

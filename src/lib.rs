//! idxsift core library.
//!
//! This crate exposes programmatic APIs for extracting database index
//! suggestions from an upstream analyzer report and re-emitting the
//! relevant ones as machine-consumable JSON.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `scanner`: Line-oriented block scanner for the report text.
//! - `filter`: Relevance criteria (path exclusion, collection allow-list).
//! - `normalize`: Decoding of the embedded index definition payload.
//! - `extract`: The load → scan → filter → normalize pipeline.
//! - `models`: Data models for report records and extraction output structs.
//! - `output`: Human/JSON printers and the definitions file writer.
//! - `utils`: Supporting helpers.
//!
//! Note: All documentation comments are written in English by convention.
pub mod cli;
pub mod config;
pub mod extract;
pub mod filter;
pub mod models;
pub mod normalize;
pub mod output;
pub mod scanner;
pub mod utils;

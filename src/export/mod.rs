//! Export module for the finance tracker
//!
//! - JSON: the full document, also accepted back by import
//! - CSV: transactions only (spreadsheet-compatible)
//! - YAML: the full document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{default_file_name, export_full_json, parse_import, FullExport, ImportDocument};
pub use yaml::export_full_yaml;

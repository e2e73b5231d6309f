//! Export module for fintrack
//!
//! Provides complete data export functionality in multiple formats:
//! - CSV: expenses (spreadsheet-compatible), optionally with the income row
//! - JSON: machine-readable full database export
//! - YAML: human-readable full database export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_expenses_csv, export_full_csv};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;

//! Export module for Spendwise
//!
//! - CSV: the growth projection, one row per year
//! - JSON: inputs, summary and projection in one document
//! - YAML: the JSON document with a readable header

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_projection_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;

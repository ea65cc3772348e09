mod export;
mod overview;
mod results;
pub mod views;

pub use export::{csv_file_name, export_date, export_csv, export_json, json_file_name, ExportError};
pub use overview::build_overview;
pub use results::build_results;

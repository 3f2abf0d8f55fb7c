//! Report output: CSV files and console tables

pub mod csv;
pub mod table;

pub use self::csv::{default_csv_path, write_report, DEFAULT_CSV_DIR};
pub use self::table::render_table;

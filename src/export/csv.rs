//! CSV export of the season table

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::error::Result;

/// Directory the season CSV lands in unless a path is given.
pub const DEFAULT_CSV_DIR: &str = "cwl_data";

/// `./cwl_data/{YYYY_MM}_cwl_performance_data.csv` for the current month.
pub fn default_csv_path() -> PathBuf {
    csv_path_for(Local::now().date_naive())
}

pub fn csv_path_for(date: NaiveDate) -> PathBuf {
    Path::new(DEFAULT_CSV_DIR).join(format!(
        "{}_cwl_performance_data.csv",
        date.format("%Y_%m")
    ))
}

/// Write the header row and the table, creating parent directories.
pub fn write_report(path: &Path, headers: &[String], table: &[Vec<String>]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = ::csv::Writer::from_path(path)?;
    writer.write_record(headers)?;
    for row in table {
        writer.write_record(row)?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = table.len(), "CSV written");
    Ok(())
}

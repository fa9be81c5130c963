use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

/// Parse a CSV rendition of a spreadsheet into a Polars DataFrame.
///
/// The first row is the header row; column types are inferred, and empty
/// fields become nulls.
pub fn parse_csv(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.into()))
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to parse CSV into DataFrame: {}", path.display()))
}

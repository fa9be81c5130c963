use anyhow::{bail, Context, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use polars::prelude::*;
use std::path::Path;

const EMPTY_CELL: Data = Data::Empty;

/// Parse the first worksheet of a workbook into a Polars DataFrame.
///
/// The format (`.xlsx`, `.xls`, `.ods`) is detected from the file itself.
pub fn parse_workbook(path: &Path) -> Result<DataFrame> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let range = workbook
        .worksheet_range_at(0)
        .with_context(|| format!("Workbook contains no sheets: {}", path.display()))?
        .with_context(|| format!("Failed to read first worksheet: {}", path.display()))?;

    range_to_dataframe(&range)
        .with_context(|| format!("Failed to convert worksheet to DataFrame: {}", path.display()))
}

/// Convert a worksheet cell range into a DataFrame.
///
/// The first row becomes the header row. A column whose remaining cells are
/// all numeric (or empty) becomes `Float64` with empty cells as nulls; any
/// other column becomes `String`.
pub fn range_to_dataframe(range: &Range<Data>) -> Result<DataFrame> {
    let rows: Vec<&[Data]> = range.rows().collect();
    let Some((header, body)) = rows.split_first() else {
        bail!("Worksheet is empty");
    };
    if header.is_empty() {
        bail!("Worksheet has no columns");
    }

    let names: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(i, cell)| header_name(cell, i))
        .collect();

    let mut columns = Vec::with_capacity(names.len());
    for (col_idx, name) in names.iter().enumerate() {
        let cells: Vec<&Data> = body
            .iter()
            .map(|row| row.get(col_idx).unwrap_or(&EMPTY_CELL))
            .collect();

        let numeric = cells
            .iter()
            .all(|c| matches!(c, Data::Empty | Data::Float(_) | Data::Int(_)));

        let series = if numeric {
            let values: Vec<Option<f64>> = cells
                .iter()
                .map(|c| match c {
                    Data::Float(f) => Some(*f),
                    Data::Int(i) => Some(*i as f64),
                    _ => None,
                })
                .collect();
            Series::new(name.as_str().into(), values)
        } else {
            let values: Vec<Option<String>> = cells.iter().map(|c| cell_to_string(c)).collect();
            Series::new(name.as_str().into(), values)
        };
        columns.push(series.into_column());
    }

    DataFrame::new(columns).context("Failed to assemble DataFrame from worksheet columns")
}

/// Column name from a header cell, with a positional fallback.
fn header_name(cell: &Data, index: usize) -> String {
    match cell {
        Data::String(s) if !s.trim().is_empty() => s.trim().to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        _ => format!("column_{index}"),
    }
}

fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(dt.as_f64().to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Error(e) => Some(format!("{e:?}")),
    }
}

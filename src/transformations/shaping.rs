use anyhow::{Context, Result};
use polars::prelude::*;
use thiserror::Error;

use crate::models::catalog::ParseMode;

/// Structural violation of a declared parse mode.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("series sheet must have an index column and exactly one value column, found {0} columns")]
    SeriesWidth(usize),
    #[error("table sheet must have an index column and at least one value column, found {0} columns")]
    TableWidth(usize),
}

/// Apply the declared parse mode to a freshly parsed frame.
///
/// - [`ParseMode::Series`]: exactly two columns; the first becomes a `String`
///   index, the second a `Float64` value column.
/// - [`ParseMode::Table`]: the first column becomes a `String` index, every
///   remaining column is cast to `Float64`.
/// - [`ParseMode::Raw`]: the frame passes through untouched.
pub fn apply_mode(df: DataFrame, mode: ParseMode) -> Result<DataFrame> {
    match mode {
        ParseMode::Raw => Ok(df),
        ParseMode::Series => {
            if df.width() != 2 {
                return Err(ShapeError::SeriesWidth(df.width()).into());
            }
            cast_indexed(df)
        }
        ParseMode::Table => {
            if df.width() < 2 {
                return Err(ShapeError::TableWidth(df.width()).into());
            }
            cast_indexed(df)
        }
    }
}

/// Multiply every value column by the catalog factor, element-wise.
///
/// Factor 1 is the identity and leaves the frame untouched. For indexed modes
/// the first column is the index and is skipped; for raw frames every
/// `Float64` column is scaled.
pub fn apply_factor(df: DataFrame, mode: ParseMode, factor: f64) -> Result<DataFrame> {
    if factor == 1.0 {
        return Ok(df);
    }

    let value_names: Vec<String> = match mode {
        ParseMode::Series | ParseMode::Table => df
            .get_column_names()
            .iter()
            .skip(1)
            .map(|s| s.to_string())
            .collect(),
        ParseMode::Raw => df
            .get_columns()
            .iter()
            .filter(|c| c.dtype() == &DataType::Float64)
            .map(|c| c.name().to_string())
            .collect(),
    };

    let mut lazy_df = df.lazy();
    for name in &value_names {
        lazy_df = lazy_df.with_column((col(name.as_str()) * lit(factor)).alias(name.as_str()));
    }

    lazy_df
        .collect()
        .context("Failed to apply scale factor to value columns")
}

/// Cast the first column to `String` and every remaining column to `Float64`.
fn cast_indexed(df: DataFrame) -> Result<DataFrame> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut lazy_df = df.lazy();
    for (i, name) in column_names.iter().enumerate() {
        let dtype = if i == 0 {
            DataType::String
        } else {
            DataType::Float64
        };
        lazy_df = lazy_df.with_column(col(name.as_str()).cast(dtype).alias(name.as_str()));
    }

    lazy_df
        .collect()
        .context("Failed to cast index/value columns to expected types")
}

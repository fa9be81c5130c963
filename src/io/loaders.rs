use anyhow::{bail, Context, Result};
use polars::prelude::DataFrame;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::models::catalog::{DatasetSpec, SPATIAL_CATALOG};
use crate::models::collection::SpatialData;
use crate::parsing::{csv_parser, xlsx_parser};
use crate::transformations::shaping;

/// File extensions probed for each catalog stem, in preference order.
const SOURCE_EXTENSIONS: &[&str] = &["xlsx", "xls", "ods", "csv"];

/// Loads the fixed spatial dataset catalog from an input directory.
pub struct SpatialDataLoader;

impl SpatialDataLoader {
    /// Load every catalog entry from `base_dir`.
    ///
    /// Entries are mutually independent and are loaded in parallel; each one
    /// produces its own key → frame pair and the pairs are merged once all
    /// loads finish. Any failing entry fails the whole load: no partial
    /// collection is ever returned, and the error chain names the offending
    /// file.
    pub fn load(base_dir: &Path) -> Result<SpatialData> {
        if !base_dir.is_dir() {
            bail!("Input directory does not exist: {}", base_dir.display());
        }

        let entries: Vec<(String, DataFrame)> = SPATIAL_CATALOG
            .par_iter()
            .map(|spec| {
                let df = Self::load_entry(base_dir, spec)
                    .with_context(|| format!("Failed to load dataset '{}'", spec.key))?;
                Ok((spec.key.to_string(), df))
            })
            .collect::<Result<_>>()?;

        log::info!(
            "Loaded {} spatial datasets from {}",
            entries.len(),
            base_dir.display()
        );
        Ok(SpatialData::from_entries(entries))
    }

    /// Load a single catalog entry: resolve the file, parse it, apply the
    /// declared parse mode and the post-processing factor.
    pub fn load_entry(base_dir: &Path, spec: &DatasetSpec) -> Result<DataFrame> {
        let path = resolve_source_file(base_dir, spec)?;

        let df = read_table_file(&path)?;
        let df = shaping::apply_mode(df, spec.mode)
            .with_context(|| format!("Unexpected sheet layout in {}", path.display()))?;
        let df = shaping::apply_factor(df, spec.mode, spec.factor)?;

        log::debug!(
            "Loaded '{}' ({} rows x {} columns) from {}",
            spec.key,
            df.height(),
            df.width(),
            path.display()
        );
        Ok(df)
    }
}

/// Probe the known source extensions for a catalog stem.
fn resolve_source_file(base_dir: &Path, spec: &DatasetSpec) -> Result<PathBuf> {
    let stem = base_dir.join(spec.relative_stem());

    for extension in SOURCE_EXTENSIONS {
        let candidate = stem.with_extension(extension);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    bail!(
        "Missing input file: {}.{{{}}}",
        stem.display(),
        SOURCE_EXTENSIONS.join(",")
    )
}

/// Dispatch to a parser based on the resolved file's extension.
fn read_table_file(path: &Path) -> Result<DataFrame> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    match extension.to_lowercase().as_str() {
        "xlsx" | "xls" | "ods" => xlsx_parser::parse_workbook(path),
        "csv" => csv_parser::parse_csv(path),
        other => bail!("Unsupported file format: {}", other),
    }
}

//! Spatial input data loading for a sector-coupled energy system model.
//!
//! The crate reads a fixed catalog of spreadsheet files describing
//! energy-system infrastructure (wind, solar, hydro, biogas, gas plants,
//! geological storage, electric grid, pipelines, demand) and returns them as
//! a mapping from descriptive key to a Polars [`DataFrame`](polars::prelude::DataFrame).
//!
//! # Example
//!
//! ```no_run
//! use esm_input::SpatialDataLoader;
//! use std::path::Path;
//!
//! let data = SpatialDataLoader::load(Path::new("InputData"))
//!     .expect("Failed to load spatial data");
//! let onshore = data.get("Wind (onshore), capacityMax").unwrap();
//! println!("{} regions", onshore.height());
//! ```

pub mod io;
pub mod models;
pub mod parsing;
pub mod transformations;

pub use io::loaders::SpatialDataLoader;
pub use models::catalog::{DatasetSpec, ParseMode, SPATIAL_CATALOG};
pub use models::collection::SpatialData;

//! High-level data loading.
//!
//! This module combines file resolution, format-specific parsing and mode
//! shaping into the catalog-driven loader that produces the full
//! [`SpatialData`](crate::models::collection::SpatialData) collection.
//!
//! # Example
//!
//! ```no_run
//! use esm_input::io::loaders::SpatialDataLoader;
//! use std::path::Path;
//!
//! let data = SpatialDataLoader::load(Path::new("InputData"))
//!     .expect("Failed to load spatial data");
//! println!("Loaded {} datasets", data.len());
//! ```

pub mod loaders;


pub use loaders::SpatialDataLoader;

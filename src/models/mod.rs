//! Domain model for spatial input data.
//!
//! # Modules
//!
//! - [`catalog`]: the fixed table of datasets the loader reads
//! - [`collection`]: the loaded key → DataFrame collection

pub mod catalog;
pub mod collection;


pub use catalog::{DatasetSpec, ParseMode, SPATIAL_CATALOG};
pub use collection::SpatialData;

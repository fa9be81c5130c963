//! Shaping of freshly parsed frames.
//!
//! Parsers return sheets exactly as laid out on disk; this module applies the
//! catalog's declared parse mode (index/value column casts) and the numeric
//! post-processing factor.

pub mod shaping;

#[cfg(test)]
mod shaping_tests;

pub use shaping::{apply_factor, apply_mode, ShapeError};

//! Parsers for the spatial input file formats.
//!
//! Every parser reads one file into a Polars `DataFrame` exactly as laid out
//! on disk; interpreting the layout (index columns, value columns, scale
//! factors) is the job of [`crate::transformations`].
//!
//! # Parsers
//!
//! - [`xlsx_parser`]: Excel/ODS workbooks, first worksheet only
//! - [`csv_parser`]: CSV renditions of the same tabular layout

pub mod csv_parser;
pub mod xlsx_parser;

//! Row reduction for Québec accident report CSVs.
//!
//! The export carries 33+ columns per row; the reduced form drops eleven of
//! them and replaces the French severity label with an integer code. This
//! crate provides the row transformation itself and a streaming pipeline
//! that applies it to whole files.
//!
//! # Example
//!
//! ```ignore
//! use accrep_model::SeverityMap;
//! use accrep_transform::reduce_file;
//!
//! let report = reduce_file(
//!     "rapports-2023.csv".as_ref(),
//!     "rapports-2023-reduit.csv".as_ref(),
//!     &SeverityMap::quebec(),
//! )?;
//! println!("{} rows written", report.rows_written);
//! ```

mod pipeline;
mod reduce;

// === Row Transformation ===
pub use reduce::reduce_row;

// === File Pipeline ===
pub use pipeline::{ReduceReport, reduce_file, reduce_stream};

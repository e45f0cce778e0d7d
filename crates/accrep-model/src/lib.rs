//! Data model for the accident report reducer.
//!
//! This crate defines the fixed column layout of the Québec road-accident
//! report export, the severity label table, and the error taxonomy shared
//! by the transform and CLI crates.

mod columns;
mod error;
mod severity;

// === Error Types ===
pub use error::{ReduceError, Result};

// === Column Layout ===
pub use columns::{MIN_FIELDS, REMOVED_COLUMNS, SEVERITY_COLUMN, reduced_index};

// === Severity Table ===
pub use severity::SeverityMap;

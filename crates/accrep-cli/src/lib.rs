//! CLI library components for the accident report reducer.

pub mod logging;

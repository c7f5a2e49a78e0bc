//! # Load Analysis
//!
//! Distribution of column loads over footings, ahead of the design checks.
//!
//! - [`centric_combined`] - Uniform-pressure combined footing under several columns

pub mod centric_combined;

pub use centric_combined::{CentricCombined, ColumnLoad, RelativeColumnLoad};

//! # Geometry
//!
//! Primitives shared by the design-code checks and the load analysis:
//!
//! - [`vector`] - Three-component arithmetic value type
//! - [`locations`] - Absolute (global) and relative (local frame) points
//! - [`coordinates_system`] - Anchored local frame with index-addressed locations
//!
//! All lengths are plain `f64` in one consistent unit chosen by the caller.

pub mod coordinates_system;
pub mod locations;
pub mod vector;

pub use coordinates_system::CoordinatesSystem;
pub use locations::{AbsoluteLocation, RelativeLocation};
pub use vector::Vector;

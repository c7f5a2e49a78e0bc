//! # footing_core - Reinforced-Concrete Footing Design Engine
//!
//! `footing_core` computes NSR-10 design quantities for reinforced-concrete
//! footings. All inputs and outputs are JSON-serializable, so calculations can
//! be driven from files, services or other tools.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Unit-agnostic**: Lengths and forces only need to be consistent
//!
//! ## Quick Start
//!
//! ```rust
//! use footing_core::calculations::punching_perimeter::compute_perimeter;
//! use footing_core::elements::PunchingFooting;
//! use footing_core::geometry::{AbsoluteLocation, CoordinatesSystem};
//!
//! let mut footing = PunchingFooting::new(2500.0, 1000.0, 450.0);
//! footing.add_coordinates_system(CoordinatesSystem::new(AbsoluteLocation::origin()));
//!
//! let column = AbsoluteLocation::new(0.0, 0.0, 0.0);
//! let perimeter = compute_perimeter(&footing, 450.0, 250.0, &column)?;
//! assert_eq!(perimeter, 3200.0);
//! # Ok::<(), footing_core::errors::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Vectors, absolute/relative locations, local coordinates systems
//! - [`elements`] - Footing data holders and layered reinforcement
//! - [`materials`] - Concrete and rebar definitions
//! - [`calculations`] - NSR-10 checks (punching perimeter, bending ratio) and schemas
//! - [`analysis`] - Combined footing load analysis
//! - [`errors`] - Structured error types
//!
//! ## Logging
//!
//! Calculation steps are reported through the [`log`] facade; install any
//! logger in the host application to see them.

pub mod analysis;
pub mod calculations;
pub mod elements;
pub mod errors;
pub mod geometry;
pub mod materials;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput};
pub use elements::{Footing, FootingGeometry, PunchingFooting, SectionDirection};
pub use errors::{CalcError, CalcResult};
pub use geometry::{AbsoluteLocation, CoordinatesSystem, RelativeLocation, Vector};

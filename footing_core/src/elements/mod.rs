//! # Structural Elements
//!
//! Data holders for the elements the design checks operate on.
//!
//! - [`footing`] - Isolated/combined footing and a lightweight plan-only footing
//! - [`reinforcement`] - Layered straight longitudinal bars
//!
//! Design checks depend on the [`FootingGeometry`] trait rather than on a
//! concrete footing type, so a full [`Footing`] and a plan-only
//! [`PunchingFooting`] are interchangeable where only plan dimensions,
//! effective height and the local frame matter.

pub mod footing;
pub mod reinforcement;

pub use footing::{Footing, PunchingFooting};
pub use reinforcement::{StraightLongitudinal, StraightLongitudinalLayer};

use serde::{Deserialize, Serialize};

use crate::geometry::CoordinatesSystem;

/// Plan direction of a footing: along `length_1` or along `length_2`.
///
/// ## JSON
///
/// Serializes as `"length_1"` / `"length_2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionDirection {
    #[serde(rename = "length_1")]
    Length1,
    #[serde(rename = "length_2")]
    Length2,
}

impl SectionDirection {
    pub const ALL: [SectionDirection; 2] = [SectionDirection::Length1, SectionDirection::Length2];

    /// The other plan direction
    pub fn orthogonal(self) -> Self {
        match self {
            SectionDirection::Length1 => SectionDirection::Length2,
            SectionDirection::Length2 => SectionDirection::Length1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SectionDirection::Length1 => "length_1",
            SectionDirection::Length2 => "length_2",
        }
    }
}

impl std::fmt::Display for SectionDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Read-only view of a footing used by geometric design checks.
pub trait FootingGeometry {
    /// Plan dimension along local axis 1
    fn length_1(&self) -> f64;

    /// Plan dimension along local axis 2
    fn length_2(&self) -> f64;

    /// Effective depth used for the punching critical section standoff
    fn effective_height(&self) -> f64;

    /// Local frame attached to the footing, if any
    fn coordinates_system(&self) -> Option<&CoordinatesSystem>;

    /// Plan dimension along `direction`
    fn length(&self, direction: SectionDirection) -> f64 {
        match direction {
            SectionDirection::Length1 => self.length_1(),
            SectionDirection::Length2 => self.length_2(),
        }
    }
}

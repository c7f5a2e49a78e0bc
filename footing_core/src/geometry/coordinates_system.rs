//! # Coordinates System
//!
//! A local frame: an anchor in global coordinates plus an append-only list of
//! [`RelativeLocation`]s addressed by the index they received on insertion.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::geometry::{AbsoluteLocation, CoordinatesSystem, RelativeLocation};
//!
//! let mut lcs = CoordinatesSystem::new(AbsoluteLocation::new(100.0, 0.0, 0.0));
//! let column = lcs.add_location(RelativeLocation::new(-25.0, 10.0, 0.0));
//!
//! assert_eq!(column, 0);
//! assert_eq!(lcs.first_location_vector()?.x, -25.0);
//! # Ok::<(), footing_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};

use super::locations::{AbsoluteLocation, RelativeLocation};
use super::vector::Vector;
use crate::errors::{CalcError, CalcResult};

/// Local coordinates system anchored at an absolute location.
///
/// The system owns its locations. Indices are stable because entries are
/// never removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinatesSystem {
    anchor_location: AbsoluteLocation,
    #[serde(default)]
    relative_locations: Vec<RelativeLocation>,
}

impl CoordinatesSystem {
    pub fn new(anchor_location: AbsoluteLocation) -> Self {
        CoordinatesSystem {
            anchor_location,
            relative_locations: Vec::new(),
        }
    }

    /// Create an empty system with room for `capacity` locations
    pub fn with_capacity(anchor_location: AbsoluteLocation, capacity: usize) -> Self {
        CoordinatesSystem {
            anchor_location,
            relative_locations: Vec::with_capacity(capacity),
        }
    }

    pub fn anchor_location(&self) -> &AbsoluteLocation {
        &self.anchor_location
    }

    /// Append a location and return the index it is addressed by from now on
    pub fn add_location(&mut self, relative_location: RelativeLocation) -> usize {
        self.relative_locations.push(relative_location);
        self.relative_locations.len() - 1
    }

    pub fn relative_location_at(&self, index: usize) -> CalcResult<&RelativeLocation> {
        let len = self.relative_locations.len();
        self.relative_locations
            .get(index)
            .ok_or(CalcError::LocationNotFound { index, len })
    }

    pub fn relative_location_at_mut(&mut self, index: usize) -> CalcResult<&mut RelativeLocation> {
        let len = self.relative_locations.len();
        self.relative_locations
            .get_mut(index)
            .ok_or(CalcError::LocationNotFound { index, len })
    }

    /// Snapshot of the location at index 0
    pub fn first_location_vector(&self) -> CalcResult<Vector> {
        self.relative_location_at(0).map(RelativeLocation::to_vector)
    }

    /// Absolute position of a stored location (anchor + offset)
    pub fn absolute_location_at(&self, index: usize) -> CalcResult<AbsoluteLocation> {
        let absolute = self.anchor_location.to_vector() + self.relative_location_at(index)?.to_vector();
        Ok(AbsoluteLocation::new(absolute.x, absolute.y, absolute.z))
    }

    pub fn relative_locations(&self) -> &[RelativeLocation] {
        &self.relative_locations
    }

    pub fn len(&self) -> usize {
        self.relative_locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relative_locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_system() -> CoordinatesSystem {
        CoordinatesSystem::new(AbsoluteLocation::new(10.0, 20.0, 0.0))
    }

    #[test]
    fn test_indices_follow_insertion_order() {
        let mut lcs = test_system();
        assert!(lcs.is_empty());
        assert_eq!(lcs.add_location(RelativeLocation::new(1.0, 0.0, 0.0)), 0);
        assert_eq!(lcs.add_location(RelativeLocation::new(2.0, 0.0, 0.0)), 1);
        assert_eq!(lcs.add_location(RelativeLocation::new(3.0, 0.0, 0.0)), 2);
        assert_eq!(lcs.len(), 3);
        assert_eq!(lcs.relative_location_at(1).unwrap().value_1, 2.0);
    }

    #[test]
    fn test_out_of_range_lookup() {
        let mut lcs = test_system();
        lcs.add_location(RelativeLocation::default());
        assert_eq!(
            lcs.relative_location_at(1),
            Err(CalcError::LocationNotFound { index: 1, len: 1 })
        );
        assert!(lcs.relative_location_at_mut(4).is_err());
    }

    #[test]
    fn test_first_location_vector() {
        let mut lcs = test_system();
        assert!(lcs.first_location_vector().is_err());

        lcs.add_location(RelativeLocation::new(-1025.0, 375.0, 0.0));
        lcs.add_location(RelativeLocation::new(5.0, 5.0, 5.0));
        assert_eq!(lcs.first_location_vector().unwrap(), Vector::new(-1025.0, 375.0, 0.0));
    }

    #[test]
    fn test_mutation_through_index() {
        let mut lcs = test_system();
        let index = lcs.add_location(RelativeLocation::new(1500.0, 0.0, 0.0));
        lcs.relative_location_at_mut(index).unwrap().value_1 = 1250.0;
        assert_eq!(lcs.relative_location_at(index).unwrap().value_1, 1250.0);
    }

    #[test]
    fn test_absolute_location_at() {
        let mut lcs = test_system();
        let index = lcs.add_location(RelativeLocation::new(1.0, -5.0, 2.0));
        assert_eq!(
            lcs.absolute_location_at(index).unwrap(),
            AbsoluteLocation::new(11.0, 15.0, 2.0)
        );
    }

    #[test]
    fn test_deserialize_anchor_only() {
        let json = r#"{ "anchor_location": { "value_x": 0.0, "value_y": 0.0, "value_z": 0.0 } }"#;
        let lcs: CoordinatesSystem = serde_json::from_str(json).unwrap();
        assert!(lcs.is_empty());
        assert_eq!(*lcs.anchor_location(), AbsoluteLocation::origin());
    }
}

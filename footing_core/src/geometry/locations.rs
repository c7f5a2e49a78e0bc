//! # Locations
//!
//! Points in space, either in the global frame ([`AbsoluteLocation`]) or as
//! offsets from a local frame's anchor ([`RelativeLocation`]).
//!
//! ## JSON Example
//!
//! ```json
//! { "value_x": -1025.0, "value_y": 375.0, "value_z": 0.0 }
//! ```

use serde::{Deserialize, Serialize};

use super::vector::Vector;

/// Point in the global reference frame.
///
/// Fields are private; once built the location does not change.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AbsoluteLocation {
    value_x: f64,
    value_y: f64,
    value_z: f64,
}

impl AbsoluteLocation {
    pub fn new(value_x: f64, value_y: f64, value_z: f64) -> Self {
        AbsoluteLocation {
            value_x,
            value_y,
            value_z,
        }
    }

    /// The global origin
    pub fn origin() -> Self {
        AbsoluteLocation::default()
    }

    pub fn value_x(&self) -> f64 {
        self.value_x
    }

    pub fn value_y(&self) -> f64 {
        self.value_y
    }

    pub fn value_z(&self) -> f64 {
        self.value_z
    }

    pub fn to_vector(&self) -> Vector {
        Vector::new(self.value_x, self.value_y, self.value_z)
    }
}

/// Point expressed in a local frame, as an offset from the frame's anchor.
///
/// Axes are mutable one at a time; clamping in the punching perimeter
/// rewrites `value_1` and `value_2` in place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RelativeLocation {
    pub value_1: f64,
    pub value_2: f64,
    pub value_3: f64,
}

impl RelativeLocation {
    pub fn new(value_1: f64, value_2: f64, value_3: f64) -> Self {
        RelativeLocation {
            value_1,
            value_2,
            value_3,
        }
    }

    /// Relative location holding the components of `vector`
    pub fn from_vector(vector: &Vector) -> Self {
        let mut location = RelativeLocation::default();
        location.update_from_vector(vector);
        location
    }

    /// `location` expressed relative to `reference` (component-wise difference)
    pub fn absolute_location_relative_to(
        location: &AbsoluteLocation,
        reference: &AbsoluteLocation,
    ) -> Self {
        RelativeLocation::from_vector(&(location.to_vector() - reference.to_vector()))
    }

    /// Offset pointing from `from` to `to`
    pub fn from_location_to_location(from: &AbsoluteLocation, to: &AbsoluteLocation) -> Self {
        RelativeLocation::absolute_location_relative_to(to, from)
    }

    pub fn to_vector(&self) -> Vector {
        Vector::new(self.value_1, self.value_2, self.value_3)
    }

    /// Overwrite all three axes from a vector
    pub fn update_from_vector(&mut self, vector: &Vector) {
        self.value_1 = vector.x;
        self.value_2 = vector.y;
        self.value_3 = vector.z;
    }

    /// Rotate about axis 3 so that axis 1 follows the plan projection of `vector`.
    ///
    /// A vector with no plan component leaves the location untouched.
    pub fn align_axis_1_with(&mut self, vector: &Vector) {
        let plan_length = vector.x.hypot(vector.y);
        if plan_length == 0.0 {
            return;
        }

        let cos = vector.x / plan_length;
        let sin = vector.y / plan_length;
        let value_1 = self.value_1 * cos + self.value_2 * sin;
        let value_2 = -self.value_1 * sin + self.value_2 * cos;

        self.value_1 = value_1;
        self.value_2 = value_2;
    }
}

impl From<Vector> for RelativeLocation {
    fn from(vector: Vector) -> Self {
        RelativeLocation::from_vector(&vector)
    }
}

impl From<RelativeLocation> for Vector {
    fn from(location: RelativeLocation) -> Self {
        location.to_vector()
    }
}

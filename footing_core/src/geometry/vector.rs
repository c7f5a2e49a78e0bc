//! # Vector
//!
//! Three-component value type used for every offset, edge and snapshot in
//! the geometry engine.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::geometry::Vector;
//!
//! let a = Vector::new(3.0, 4.0, 0.0);
//! let b = Vector::new(1.0, 1.0, 0.0);
//!
//! assert_eq!((a - b).direction(), [2.0, 3.0, 0.0]);
//! assert_eq!(a.magnitude(), 5.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

use super::locations::RelativeLocation;

/// Cartesian vector (x, y, z).
///
/// Arithmetic always produces a new vector; nothing mutates in place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    /// Create a vector from its three components
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    /// The zero vector
    pub fn zero() -> Self {
        Vector::default()
    }

    /// Vector holding the three local coordinates of a relative location
    pub fn based_on_relative_location(location: &RelativeLocation) -> Self {
        location.to_vector()
    }

    /// Euclidean norm
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Ordered components, used as a sort key. Not normalized.
    pub fn direction(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Vector::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

//! Deformed reinforcing bars.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::errors::{CalcError, CalcResult};

/// A reinforcing bar: designation number and nominal diameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rebar {
    /// Bar designation (e.g. 5 for a #5 bar)
    pub number: u32,

    /// Nominal diameter
    pub diameter: f64,
}

impl Rebar {
    pub fn new(number: u32, diameter: f64) -> Self {
        Rebar { number, diameter }
    }

    /// Nominal cross-section area π·d²/4
    pub fn area(&self) -> f64 {
        0.25 * PI * self.diameter * self.diameter
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.diameter <= 0.0 {
            return Err(CalcError::invalid_input(
                "diameter",
                self.diameter.to_string(),
                "Rebar diameter must be positive",
            ));
        }
        Ok(())
    }
}

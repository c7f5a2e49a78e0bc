//! # Materials
//!
//! Material definitions for reinforced-concrete elements.
//!
//! - **Concrete**: elastic modulus, design compression strength f'c, specific weight
//! - **Rebar**: deformed bar designation and nominal diameter
//!
//! ## Example
//!
//! ```rust
//! use footing_core::materials::{Concrete, Rebar};
//!
//! let concrete = Concrete::new(1800.0, 28.0, 2.4);
//! assert!(concrete.validate().is_ok());
//!
//! let bar = Rebar::new(5, 15.9);
//! assert!(bar.area() > 198.0 && bar.area() < 199.0);
//! ```

pub mod rebar;

pub use rebar::Rebar;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Concrete material properties.
///
/// ## JSON Example
///
/// ```json
/// {
///   "elastic_module": 1800.0,
///   "design_compression_strength": 28.0,
///   "specific_weight": 2.4
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Concrete {
    /// Modulus of elasticity Ec
    pub elastic_module: f64,

    /// Specified compressive strength f'c
    pub design_compression_strength: f64,

    /// Weight per unit volume
    pub specific_weight: f64,
}

impl Concrete {
    pub fn new(elastic_module: f64, design_compression_strength: f64, specific_weight: f64) -> Self {
        Concrete {
            elastic_module,
            design_compression_strength,
            specific_weight,
        }
    }

    /// Validate material parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.elastic_module <= 0.0 {
            return Err(CalcError::invalid_input(
                "elastic_module",
                self.elastic_module.to_string(),
                "Elastic modulus must be positive",
            ));
        }
        if self.design_compression_strength <= 0.0 {
            return Err(CalcError::invalid_input(
                "design_compression_strength",
                self.design_compression_strength.to_string(),
                "Compression strength must be positive",
            ));
        }
        if self.specific_weight < 0.0 {
            return Err(CalcError::invalid_input(
                "specific_weight",
                self.specific_weight.to_string(),
                "Specific weight cannot be negative",
            ));
        }
        Ok(())
    }
}

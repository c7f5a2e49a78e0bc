//! # Design-Code Calculations
//!
//! NSR-10 checks for reinforced-concrete footings. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Raw JSON parameters go through a [`schema::Schema`] before they are
//! structured, so missing parameters are reported by name.
//!
//! ## Available Calculations
//!
//! - [`punching_perimeter`] - Punching shear critical section perimeter (C.11.11)
//! - [`bending_ratio`] - Flexural reinforcement ratio (C.10)

pub mod bending_ratio;
pub mod punching_perimeter;
pub mod schema;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{CalcError, CalcResult};
use schema::{Schema, BENDING_REINFORCEMENT_RATIO_SCHEMA, PUNCHING_CRITICAL_SECTION_PERIMETER_SCHEMA};

// Re-export commonly used types
pub use bending_ratio::{BendingRatioInput, BendingRatioResult};
pub use punching_perimeter::{PunchingPerimeterInput, PunchingPerimeterResult};

/// Enum wrapper for all calculation types.
///
/// ## JSON Example
///
/// ```json
/// {
///   "type": "BendingRatio",
///   "design_compression_strength": 28000000.0,
///   "design_steel_yield_strength": 420000000.0,
///   "width": 2.5,
///   "effective_height": 0.45,
///   "flexural_moment": 50.0,
///   "capacity_reduction_factor": 0.9
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Punching shear critical section perimeter
    PunchingPerimeter(PunchingPerimeterInput),
    /// Flexural reinforcement ratio
    BendingRatio(BendingRatioInput),
}

/// Result of running a [`CalculationItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    PunchingPerimeter(PunchingPerimeterResult),
    BendingRatio(BendingRatioResult),
}

impl CalculationItem {
    /// Parse a JSON document, checking it against the matching schema first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use footing_core::calculations::CalculationItem;
    ///
    /// let json = r#"{ "type": "BendingRatio", "width": 2.5 }"#;
    /// let err = CalculationItem::from_json(json).unwrap_err();
    /// assert_eq!(err.error_code(), "MISSING_FIELD");
    /// ```
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let params: Value = serde_json::from_str(json)?;
        let calc_type = match params.get("type") {
            None | Some(Value::Null) => return Err(CalcError::missing_field("type")),
            Some(Value::String(calc_type)) => calc_type.as_str(),
            Some(other) => {
                return Err(CalcError::invalid_input("type", other.to_string(), "Expected a string"));
            }
        };

        Self::schema_for(calc_type)?.validate(&params)?;
        Ok(serde_json::from_value(params)?)
    }

    fn schema_for(calc_type: &str) -> CalcResult<Schema> {
        match calc_type {
            "PunchingPerimeter" => Ok(PUNCHING_CRITICAL_SECTION_PERIMETER_SCHEMA),
            "BendingRatio" => Ok(BENDING_REINFORCEMENT_RATIO_SCHEMA),
            other => Err(CalcError::invalid_input(
                "type",
                other,
                "Unknown calculation type (expected PunchingPerimeter or BendingRatio)",
            )),
        }
    }

    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::PunchingPerimeter(p) => &p.label,
            CalculationItem::BendingRatio(b) => &b.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::PunchingPerimeter(_) => "PunchingPerimeter",
            CalculationItem::BendingRatio(_) => "BendingRatio",
        }
    }

    /// Run the calculation
    pub fn run(&self) -> CalcResult<CalculationOutput> {
        log::debug!("running {} '{}'", self.calc_type(), self.label());
        match self {
            CalculationItem::PunchingPerimeter(input) => {
                punching_perimeter::calculate(input).map(CalculationOutput::PunchingPerimeter)
            }
            CalculationItem::BendingRatio(input) => bending_ratio::calculate(input).map(CalculationOutput::BendingRatio),
        }
    }
}

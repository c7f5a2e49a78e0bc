//! # Parameter Schemas
//!
//! Presence and type checks on raw JSON parameters, run before they are
//! structured into typed inputs. Catching a missing field here yields a
//! `MissingField` error naming it, instead of a serde message.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::calculations::schema::BENDING_REINFORCEMENT_RATIO_SCHEMA;
//! use serde_json::json;
//!
//! let params = json!({
//!     "design_compression_strength": 28,
//!     "design_steel_yield_strength": 420,
//!     "width": 2500,
//!     "effective_height": 450,
//!     "flexural_moment": 2_348_493_750_u64,
//!     "capacity_reduction_factor": 0.90
//! });
//! assert!(BENDING_REINFORCEMENT_RATIO_SCHEMA.validate(&params).is_ok());
//!
//! let err = BENDING_REINFORCEMENT_RATIO_SCHEMA.validate(&json!({})).unwrap_err();
//! assert_eq!(err.error_code(), "MISSING_FIELD");
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{CalcError, CalcResult};

/// Required parameters of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Calculation name, used in error messages
    pub name: &'static str,
    /// Parameters that must be present and numeric
    pub numeric: &'static [&'static str],
    /// Parameters that must be present and be JSON objects
    pub objects: &'static [&'static str],
}

pub const BENDING_REINFORCEMENT_RATIO_SCHEMA: Schema = Schema {
    name: "BendingReinforcementRatio",
    numeric: &[
        "design_compression_strength",
        "design_steel_yield_strength",
        "width",
        "effective_height",
        "flexural_moment",
        "capacity_reduction_factor",
    ],
    objects: &[],
};

pub const PUNCHING_CRITICAL_SECTION_PERIMETER_SCHEMA: Schema = Schema {
    name: "PunchingCriticalSectionPerimeter",
    numeric: &["column_section_length_1", "column_section_length_2"],
    objects: &["column_absolute_location", "footing"],
};

impl Schema {
    /// Check that every required parameter is present with the right kind.
    pub fn validate(&self, params: &Value) -> CalcResult<()> {
        let map = params.as_object().ok_or_else(|| {
            CalcError::invalid_input(self.name, params.to_string(), "Parameters must be a JSON object")
        })?;

        for &field in self.numeric {
            match map.get(field) {
                None | Some(Value::Null) => return Err(CalcError::missing_field(field)),
                Some(value) if !value.is_number() => {
                    return Err(CalcError::invalid_input(field, value.to_string(), "Expected a number"));
                }
                Some(_) => {}
            }
        }
        for &field in self.objects {
            match map.get(field) {
                None | Some(Value::Null) => return Err(CalcError::missing_field(field)),
                Some(value) if !value.is_object() => {
                    return Err(CalcError::invalid_input(field, value.to_string(), "Expected an object"));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Validate, then deserialize into the typed input.
    pub fn structurize<T: DeserializeOwned>(&self, params: Value) -> CalcResult<T> {
        self.validate(&params)?;
        Ok(serde_json::from_value(params)?)
    }
}

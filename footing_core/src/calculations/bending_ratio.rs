//! # Bending Reinforcement Ratio (NSR-10 C.10)
//!
//! Steel ratio ρ a rectangular footing section needs to resist a flexural
//! moment, floored at the code minimum.
//!
//! ## Derivation
//!
//! Equilibrium of the rectangular stress block gives
//!
//! ```text
//! Mu = φ·ρ·fy·b·d²·(1 − 0.59·ρ·fy/f'c)
//! ```
//!
//! which is the quadratic `a·ρ² − ρ + c = 0` with `a = 0.59·fy/f'c` and
//! `c = Mu / (φ·fy·b·d²)`. The smaller non-negative root governs.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::calculations::bending_ratio::{calculate, BendingRatioInput, MINIMUM_RATIO};
//!
//! // SI units: N, m
//! let input = BendingRatioInput {
//!     label: "F-1 length_1".to_string(),
//!     design_compression_strength: 28.0e6,
//!     design_steel_yield_strength: 420.0e6,
//!     width: 2.5,
//!     effective_height: 0.45,
//!     flexural_moment: 50.0,
//!     capacity_reduction_factor: 0.90,
//! };
//!
//! let result = calculate(&input)?;
//! assert_eq!(result.ratio, MINIMUM_RATIO);
//! # Ok::<(), footing_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Code section implemented here
pub const CODE_REFERENCE: &str = "NSR-10 C.10";

/// Minimum flexural steel ratio for footings
pub const MINIMUM_RATIO: f64 = 0.0025;

/// Input parameters for a bending reinforcement ratio calculation.
///
/// Units only need to be consistent (e.g. N and m throughout).
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "F-1 length_1",
///   "design_compression_strength": 28000000.0,
///   "design_steel_yield_strength": 420000000.0,
///   "width": 2.5,
///   "effective_height": 0.45,
///   "flexural_moment": 250000.0,
///   "capacity_reduction_factor": 0.9
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendingRatioInput {
    /// User label for this check
    #[serde(default)]
    pub label: String,

    /// Concrete compressive strength f'c
    pub design_compression_strength: f64,

    /// Steel yield strength fy
    pub design_steel_yield_strength: f64,

    /// Section width b
    pub width: f64,

    /// Effective height d
    pub effective_height: f64,

    /// Factored moment Mu
    pub flexural_moment: f64,

    /// Strength reduction factor φ
    pub capacity_reduction_factor: f64,
}

impl BendingRatioInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("design_compression_strength", self.design_compression_strength),
            ("design_steel_yield_strength", self.design_steel_yield_strength),
            ("width", self.width),
            ("effective_height", self.effective_height),
        ] {
            if value <= 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"));
            }
        }
        if self.flexural_moment < 0.0 {
            return Err(CalcError::invalid_input(
                "flexural_moment",
                self.flexural_moment.to_string(),
                "Use the moment magnitude; the mat is chosen by the caller",
            ));
        }
        if self.capacity_reduction_factor <= 0.0 || self.capacity_reduction_factor > 1.0 {
            return Err(CalcError::invalid_input(
                "capacity_reduction_factor",
                self.capacity_reduction_factor.to_string(),
                "Reduction factor must be in (0, 1]",
            ));
        }
        Ok(())
    }

    /// Quadratic coefficient a = 0.59·fy/f'c
    pub fn equation_component_a(&self) -> f64 {
        0.59 * self.design_steel_yield_strength / self.design_compression_strength
    }

    /// Constant term c = Mu / (φ·fy·b·d²)
    pub fn equation_component_c(&self) -> f64 {
        let section_area = self.width * self.effective_height;
        let reduced_steel_strength = self.capacity_reduction_factor * self.design_steel_yield_strength;
        self.flexural_moment / (reduced_steel_strength * section_area * self.effective_height)
    }
}

/// Results from a bending reinforcement ratio calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendingRatioResult {
    /// Design ratio: max(required, minimum)
    pub ratio: f64,

    /// Ratio from the quadratic solution alone
    pub required_ratio: f64,

    /// Whether the code minimum governs
    pub minimum_governs: bool,

    /// Steel area ρ·b·d for the design ratio
    pub steel_area: f64,

    /// Code section reference
    pub code_reference: String,
}

/// Smaller admissible root of a·ρ² − ρ + c = 0
fn solve_quadratic_equation_for_steel_reinforcement_ratio(input: &BendingRatioInput) -> CalcResult<f64> {
    let a = input.equation_component_a();
    let c = input.equation_component_c();
    let discriminant = 1.0 - 4.0 * a * c;

    if discriminant < 0.0 {
        return Err(CalcError::calculation_failed(
            "BendingReinforcementRatio",
            format!(
                "section cannot develop the flexural moment (1 - 4ac = {:.4}); increase width or effective height",
                discriminant
            ),
        ));
    }

    let root = discriminant.sqrt();
    let option_1 = (1.0 - root) / (2.0 * a);
    let option_2 = (1.0 + root) / (2.0 * a);
    let option_1 = if option_1 < 0.0 { f64::INFINITY } else { option_1 };

    Ok(option_1.min(option_2))
}

/// Calculate the design steel ratio.
///
/// # Returns
///
/// * `Ok(BendingRatioResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid or the section is too small
pub fn calculate(input: &BendingRatioInput) -> CalcResult<BendingRatioResult> {
    input.validate()?;

    let required_ratio = solve_quadratic_equation_for_steel_reinforcement_ratio(input)?;
    let ratio = required_ratio.max(MINIMUM_RATIO);
    log::debug!("bending ratio: required = {:.6}, design = {:.6}", required_ratio, ratio);

    Ok(BendingRatioResult {
        ratio,
        required_ratio,
        minimum_governs: required_ratio < MINIMUM_RATIO,
        steel_area: ratio * input.width * input.effective_height,
        code_reference: CODE_REFERENCE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input(flexural_moment: f64) -> BendingRatioInput {
        BendingRatioInput {
            label: "Test".to_string(),
            design_compression_strength: 28_000_000.0,
            design_steel_yield_strength: 420_000_000.0,
            width: 2.5,
            effective_height: 0.45,
            flexural_moment,
            capacity_reduction_factor: 0.90,
        }
    }

    #[test]
    fn test_small_moment_returns_minimum() {
        let result = calculate(&test_input(50.0)).unwrap();
        assert_eq!(result.ratio, MINIMUM_RATIO);
        assert!(result.minimum_governs);
        assert!(result.required_ratio > 0.0);
    }

    #[test]
    fn test_zero_moment_returns_minimum() {
        let result = calculate(&test_input(0.0)).unwrap();
        assert_eq!(result.required_ratio, 0.0);
        assert_eq!(result.ratio, MINIMUM_RATIO);
    }

    #[test]
    fn test_large_moment_solves_quadratic() {
        let input = test_input(2_000_000.0);
        let result = calculate(&input).unwrap();
        assert!(!result.minimum_governs);

        // ρ ≈ 0.01165 for these values
        assert!((result.ratio - 0.01165).abs() < 1e-4);

        let a = input.equation_component_a();
        let c = input.equation_component_c();
        assert!((a * result.ratio * result.ratio - result.ratio + c).abs() < 1e-12);
        assert!((result.steel_area - result.ratio * 2.5 * 0.45).abs() < 1e-15);
    }

    #[test]
    fn test_section_too_small() {
        let err = calculate(&test_input(50_000_000.0)).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_invalid_reduction_factor() {
        let mut input = test_input(50.0);
        input.capacity_reduction_factor = 1.5;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization() {
        let input = test_input(250_000.0);
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: BendingRatioInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}

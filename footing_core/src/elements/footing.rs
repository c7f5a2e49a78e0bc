//! # Footing
//!
//! Reinforced-concrete footing with plan dimensions along two local axes,
//! concrete covers, optional top/bottom bar mats in each direction and an
//! optional local coordinates system.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::elements::{Footing, FootingGeometry, SectionDirection};
//! use footing_core::geometry::{AbsoluteLocation, CoordinatesSystem};
//! use footing_core::materials::Concrete;
//!
//! let mut footing = Footing::new(2500.0, 1000.0, 500.0, Concrete::new(1800.0, 28.0, 2.4));
//! footing.add_coordinates_system(CoordinatesSystem::new(AbsoluteLocation::origin()));
//!
//! assert_eq!(footing.width(SectionDirection::Length1), 1000.0);
//! assert_eq!(footing.horizontal_area(), 2_500_000.0);
//! assert!(footing.coordinates_system().is_some());
//! ```

use serde::{Deserialize, Serialize};

use super::reinforcement::StraightLongitudinal;
use super::{FootingGeometry, SectionDirection};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::CoordinatesSystem;
use crate::materials::Concrete;

/// Default concrete cover on the sides and top face
pub const DEFAULT_COVER: f64 = 50.0;

/// Default cover for faces cast against soil
pub const DEFAULT_COVER_BOTTOM: f64 = 75.0;

/// Full footing element.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_1": 2500.0,
///   "length_2": 1000.0,
///   "height": 500.0,
///   "material": {
///     "elastic_module": 1800.0,
///     "design_compression_strength": 28.0,
///     "specific_weight": 2.4
///   },
///   "cover_lateral": 50.0,
///   "cover_top": 50.0,
///   "cover_bottom": 75.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footing {
    pub length_1: f64,
    pub length_2: f64,
    pub height: f64,
    pub material: Concrete,

    #[serde(default = "default_cover")]
    pub cover_lateral: f64,
    #[serde(default = "default_cover")]
    pub cover_top: f64,
    #[serde(default = "default_cover_bottom")]
    pub cover_bottom: f64,

    #[serde(default)]
    pub longitudinal_top_reinforcement_length_1: Option<StraightLongitudinal>,
    #[serde(default)]
    pub longitudinal_bottom_reinforcement_length_1: Option<StraightLongitudinal>,
    #[serde(default)]
    pub longitudinal_top_reinforcement_length_2: Option<StraightLongitudinal>,
    #[serde(default)]
    pub longitudinal_bottom_reinforcement_length_2: Option<StraightLongitudinal>,

    #[serde(default)]
    coordinates_system: Option<CoordinatesSystem>,
}

fn default_cover() -> f64 {
    DEFAULT_COVER
}

fn default_cover_bottom() -> f64 {
    DEFAULT_COVER_BOTTOM
}

impl Footing {
    /// Footing with default covers and no reinforcement
    pub fn new(length_1: f64, length_2: f64, height: f64, material: Concrete) -> Self {
        Footing {
            length_1,
            length_2,
            height,
            material,
            cover_lateral: DEFAULT_COVER,
            cover_top: DEFAULT_COVER,
            cover_bottom: DEFAULT_COVER_BOTTOM,
            longitudinal_top_reinforcement_length_1: None,
            longitudinal_bottom_reinforcement_length_1: None,
            longitudinal_top_reinforcement_length_2: None,
            longitudinal_bottom_reinforcement_length_2: None,
            coordinates_system: None,
        }
    }

    /// Validate geometry, covers and material.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("length_1", self.length_1),
            ("length_2", self.length_2),
            ("height", self.height),
        ] {
            if value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Footing dimensions must be positive",
                ));
            }
        }
        for (field, value) in [
            ("cover_lateral", self.cover_lateral),
            ("cover_top", self.cover_top),
            ("cover_bottom", self.cover_bottom),
        ] {
            if value < 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Cover cannot be negative"));
            }
        }
        if self.cover_top + self.cover_bottom >= self.height {
            return Err(CalcError::invalid_input(
                "height",
                self.height.to_string(),
                "Height must exceed the sum of top and bottom covers",
            ));
        }
        self.material.validate()
    }

    /// Attach (or replace) the local coordinates system
    pub fn add_coordinates_system(&mut self, coordinates_system: CoordinatesSystem) {
        self.coordinates_system = Some(coordinates_system);
    }

    pub fn horizontal_area(&self) -> f64 {
        self.length_1 * self.length_2
    }

    /// Width of the section cut perpendicular to `direction`
    pub fn width(&self, direction: SectionDirection) -> f64 {
        self.length(direction.orthogonal())
    }

    /// Bar mat along `direction`, top or bottom
    pub fn reinforcement(&self, direction: SectionDirection, above_middle: bool) -> Option<&StraightLongitudinal> {
        match (direction, above_middle) {
            (SectionDirection::Length1, true) => self.longitudinal_top_reinforcement_length_1.as_ref(),
            (SectionDirection::Length1, false) => self.longitudinal_bottom_reinforcement_length_1.as_ref(),
            (SectionDirection::Length2, true) => self.longitudinal_top_reinforcement_length_2.as_ref(),
            (SectionDirection::Length2, false) => self.longitudinal_bottom_reinforcement_length_2.as_ref(),
        }
    }

    /// Install a bar mat in the slot matching its direction and position
    pub fn set_reinforcement(&mut self, reinforcement: StraightLongitudinal) {
        let slot = match (reinforcement.distribution_direction, reinforcement.above_middle) {
            (SectionDirection::Length1, true) => &mut self.longitudinal_top_reinforcement_length_1,
            (SectionDirection::Length1, false) => &mut self.longitudinal_bottom_reinforcement_length_1,
            (SectionDirection::Length2, true) => &mut self.longitudinal_top_reinforcement_length_2,
            (SectionDirection::Length2, false) => &mut self.longitudinal_bottom_reinforcement_length_2,
        };
        *slot = Some(reinforcement);
    }

    /// Effective height of the section in `direction`.
    ///
    /// Falls back to the cover on the mat's face when no bars are placed.
    pub fn effective_height_for(&self, direction: SectionDirection, above_middle: bool) -> CalcResult<f64> {
        let mat = self
            .reinforcement(direction, above_middle)
            .filter(|reinforcement| !reinforcement.is_empty());

        match (mat, above_middle) {
            (Some(reinforcement), true) => reinforcement.centroid_height(),
            (Some(reinforcement), false) => Ok(self.height - reinforcement.centroid_height()?),
            (None, true) => Ok(self.height - self.cover_top),
            (None, false) => Ok(self.height - self.cover_bottom),
        }
    }

    /// Steel ratio As / (b·d) of a mat; zero when the mat is missing or empty
    pub fn reinforcement_ratio(&self, direction: SectionDirection, above_middle: bool) -> CalcResult<f64> {
        let area = match self.reinforcement(direction, above_middle) {
            Some(reinforcement) if !reinforcement.is_empty() => reinforcement.area(),
            _ => return Ok(0.0),
        };

        let effective_area = self.width(direction) * self.effective_height_for(direction, above_middle)?;
        Ok(area / effective_area)
    }

    /// Mean effective height of both bottom mats
    pub fn mean_effective_height(&self) -> CalcResult<f64> {
        let d_1 = self.effective_height_for(SectionDirection::Length1, false)?;
        let d_2 = self.effective_height_for(SectionDirection::Length2, false)?;
        Ok(0.5 * (d_1 + d_2))
    }
}

impl FootingGeometry for Footing {
    fn length_1(&self) -> f64 {
        self.length_1
    }

    fn length_2(&self) -> f64 {
        self.length_2
    }

    fn effective_height(&self) -> f64 {
        // centroid lookups only fail on empty mats, which are filtered out
        self.mean_effective_height().unwrap_or(self.height - self.cover_bottom)
    }

    fn coordinates_system(&self) -> Option<&CoordinatesSystem> {
        self.coordinates_system.as_ref()
    }
}

/// Plan-only footing for punching checks.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_1": 2500.0,
///   "length_2": 1000.0,
///   "effective_height": 450.0,
///   "coordinates_system": {
///     "anchor_location": { "value_x": 0.0, "value_y": 0.0, "value_z": 0.0 }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchingFooting {
    pub length_1: f64,
    pub length_2: f64,
    pub effective_height: f64,
    #[serde(default)]
    pub coordinates_system: Option<CoordinatesSystem>,
}

impl PunchingFooting {
    pub fn new(length_1: f64, length_2: f64, effective_height: f64) -> Self {
        PunchingFooting {
            length_1,
            length_2,
            effective_height,
            coordinates_system: None,
        }
    }

    pub fn add_coordinates_system(&mut self, coordinates_system: CoordinatesSystem) {
        self.coordinates_system = Some(coordinates_system);
    }

    /// Validate plan dimensions and effective height.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("footing.length_1", self.length_1),
            ("footing.length_2", self.length_2),
            ("footing.effective_height", self.effective_height),
        ] {
            if value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Footing dimensions must be positive",
                ));
            }
        }
        Ok(())
    }
}

impl FootingGeometry for PunchingFooting {
    fn length_1(&self) -> f64 {
        self.length_1
    }

    fn length_2(&self) -> f64 {
        self.length_2
    }

    fn effective_height(&self) -> f64 {
        self.effective_height
    }

    fn coordinates_system(&self) -> Option<&CoordinatesSystem> {
        self.coordinates_system.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{AbsoluteLocation, RelativeLocation};
    use crate::materials::Rebar;

    fn test_footing() -> Footing {
        Footing::new(2500.0, 1000.0, 500.0, Concrete::new(1800.0, 28.0, 2.4))
    }

    fn bottom_mat(direction: SectionDirection, bars: u32) -> StraightLongitudinal {
        let mut mat = StraightLongitudinal::new(direction, false);
        mat.add_layer(
            RelativeLocation::new(-1000.0, 0.0, 75.0),
            RelativeLocation::new(1000.0, 0.0, 75.0),
            bars,
            Rebar::new(5, 16.0),
        );
        mat
    }

    #[test]
    fn test_validate() {
        assert!(test_footing().validate().is_ok());

        let mut footing = test_footing();
        footing.length_2 = 0.0;
        assert!(footing.validate().is_err());

        let mut footing = test_footing();
        footing.cover_bottom = 480.0;
        assert!(footing.validate().is_err());
    }

    #[test]
    fn test_width_is_orthogonal_length() {
        let footing = test_footing();
        assert_eq!(footing.width(SectionDirection::Length1), 1000.0);
        assert_eq!(footing.width(SectionDirection::Length2), 2500.0);
        assert_eq!(footing.length(SectionDirection::Length1), 2500.0);
    }

    #[test]
    fn test_effective_height_without_bars() {
        let footing = test_footing();
        assert_eq!(footing.effective_height_for(SectionDirection::Length1, false).unwrap(), 425.0);
        assert_eq!(footing.effective_height_for(SectionDirection::Length2, true).unwrap(), 450.0);
        assert_eq!(footing.effective_height(), 425.0);
    }

    #[test]
    fn test_effective_height_with_bottom_bars() {
        let mut footing = test_footing();
        footing.set_reinforcement(bottom_mat(SectionDirection::Length1, 8));
        let d = footing.effective_height_for(SectionDirection::Length1, false).unwrap();
        assert!((d - 417.0).abs() < 1e-9);

        // mean of 417 (bars) and 425 (cover fallback)
        assert!((footing.effective_height() - 421.0).abs() < 1e-9);
    }

    #[test]
    fn test_reinforcement_ratio() {
        let mut footing = test_footing();
        assert_eq!(footing.reinforcement_ratio(SectionDirection::Length1, false).unwrap(), 0.0);

        footing.set_reinforcement(bottom_mat(SectionDirection::Length1, 8));
        let ratio = footing.reinforcement_ratio(SectionDirection::Length1, false).unwrap();
        let expected = 8.0 * Rebar::new(5, 16.0).area() / (1000.0 * 417.0);
        assert!((ratio - expected).abs() < 1e-12);
    }

    #[test]
    fn test_coordinates_system_attachment() {
        let mut footing = test_footing();
        assert!(footing.coordinates_system().is_none());
        footing.add_coordinates_system(CoordinatesSystem::new(AbsoluteLocation::new(5.0, 5.0, 0.0)));
        assert_eq!(
            footing.coordinates_system().unwrap().anchor_location().value_x(),
            5.0
        );
    }

    #[test]
    fn test_footing_deserialization_defaults() {
        let json = r#"{
            "length_1": 2500.0,
            "length_2": 1000.0,
            "height": 300.0,
            "material": { "elastic_module": 1800.0, "design_compression_strength": 28.0, "specific_weight": 2.4 }
        }"#;
        let footing: Footing = serde_json::from_str(json).unwrap();
        assert_eq!(footing.cover_bottom, DEFAULT_COVER_BOTTOM);
        assert!(footing.longitudinal_bottom_reinforcement_length_2.is_none());
        assert!(footing.coordinates_system().is_none());
    }

    #[test]
    fn test_punching_footing_validate() {
        assert!(PunchingFooting::new(2500.0, 1000.0, 450.0).validate().is_ok());
        let err = PunchingFooting::new(2500.0, -1.0, 450.0).validate().unwrap_err();
        assert_eq!(
            err,
            CalcError::invalid_input("footing.length_2", "-1", "Footing dimensions must be positive")
        );
    }
}

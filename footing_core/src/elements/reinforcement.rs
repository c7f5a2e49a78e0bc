//! # Straight Longitudinal Reinforcement
//!
//! Layered bar bookkeeping for slab-like elements. Each layer is a run of
//! identical bars between two relative locations; `value_3` of those
//! locations is the height of the bar axis above the element base.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::elements::{SectionDirection, StraightLongitudinal};
//! use footing_core::geometry::RelativeLocation;
//! use footing_core::materials::Rebar;
//!
//! let mut bottom = StraightLongitudinal::new(SectionDirection::Length1, false);
//! bottom.add_layer(
//!     RelativeLocation::new(-1200.0, 0.0, 75.0),
//!     RelativeLocation::new(1200.0, 0.0, 75.0),
//!     8,
//!     Rebar::new(5, 16.0),
//! );
//!
//! // bar axis sits half a diameter above the cover
//! assert!((bottom.centroid_height()? - 83.0).abs() < 1e-9);
//! # Ok::<(), footing_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};

use super::SectionDirection;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::RelativeLocation;
use crate::materials::Rebar;

/// One layer of identical straight bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StraightLongitudinalLayer {
    pub id: u32,
    pub start_location: RelativeLocation,
    pub end_location: RelativeLocation,
    pub amount_of_rebars: u32,
    pub rebar: Rebar,
    pub distribution_direction: SectionDirection,
}

impl StraightLongitudinalLayer {
    /// Total steel area of the layer
    pub fn area(&self) -> f64 {
        f64::from(self.amount_of_rebars) * self.rebar.area()
    }

    /// Mean height of the bar axis
    pub fn height(&self) -> f64 {
        0.5 * (self.start_location.value_3 + self.end_location.value_3)
    }

    /// First moment of the steel area about the element base
    pub fn inertia(&self) -> f64 {
        self.area() * self.height()
    }

    pub fn diameter(&self) -> f64 {
        self.rebar.diameter
    }

    /// Swap bars and shift the bar axis vertically by `offset`
    pub fn modify_rebar_configuration(&mut self, amount_of_new_rebars: u32, new_rebar: Rebar, offset: f64) {
        self.amount_of_rebars = amount_of_new_rebars;
        self.rebar = new_rebar;
        self.start_location.value_3 += offset;
        self.end_location.value_3 += offset;
    }
}

/// Straight bars distributed along one plan direction, top or bottom mat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StraightLongitudinal {
    pub distribution_direction: SectionDirection,
    pub above_middle: bool,
    #[serde(default)]
    layers: Vec<StraightLongitudinalLayer>,
}

impl StraightLongitudinal {
    pub fn new(distribution_direction: SectionDirection, above_middle: bool) -> Self {
        StraightLongitudinal {
            distribution_direction,
            above_middle,
            layers: Vec::new(),
        }
    }

    /// Add a layer whose bars rest on `start_location`/`end_location`.
    ///
    /// The given `value_3` is the face the bars bear against (cover line);
    /// the stored bar axis is moved half a diameter into the element.
    pub fn add_layer(
        &mut self,
        mut start_location: RelativeLocation,
        mut end_location: RelativeLocation,
        amount_of_rebars: u32,
        rebar: Rebar,
    ) -> &StraightLongitudinalLayer {
        let id = self.layers.last().map_or(1, |layer| layer.id + 1);
        let offset = self.inward(0.5 * rebar.diameter);
        start_location.value_3 += offset;
        end_location.value_3 += offset;

        self.layers.push(StraightLongitudinalLayer {
            id,
            start_location,
            end_location,
            amount_of_rebars,
            rebar,
            distribution_direction: self.distribution_direction,
        });
        log::trace!("added reinforcement layer {} ({} bars #{})", id, amount_of_rebars, rebar.number);

        &self.layers[self.layers.len() - 1]
    }

    /// Replace the bars of layer `id`, keeping the bearing face fixed
    pub fn change_layer_rebar_configuration(
        &mut self,
        id: u32,
        amount_of_new_rebars: u32,
        new_rebar: Rebar,
    ) -> CalcResult<&StraightLongitudinalLayer> {
        let above_middle = self.above_middle;
        let layer = self
            .layers
            .iter_mut()
            .find(|layer| layer.id == id)
            .ok_or(CalcError::LayerNotFound { id })?;

        let mut offset = 0.5 * (layer.diameter() - new_rebar.diameter);
        if !above_middle {
            offset = -offset;
        }
        layer.modify_rebar_configuration(amount_of_new_rebars, new_rebar, offset);

        Ok(&*layer)
    }

    /// Area-weighted height of all layers
    pub fn centroid_height(&self) -> CalcResult<f64> {
        if self.layers.is_empty() {
            return Err(CalcError::empty_reinforcement("centroid height calculation"));
        }

        let (inertia, total_area) = self
            .layers
            .iter()
            .fold((0.0, 0.0), |(inertia, area), layer| (inertia + layer.inertia(), area + layer.area()));

        Ok(inertia / total_area)
    }

    pub fn area(&self) -> f64 {
        self.layers.iter().map(StraightLongitudinalLayer::area).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[StraightLongitudinalLayer] {
        &self.layers
    }

    fn inward(&self, distance: f64) -> f64 {
        if self.above_middle {
            -distance
        } else {
            distance
        }
    }
}

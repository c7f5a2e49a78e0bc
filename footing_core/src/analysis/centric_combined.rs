//! # Centric Combined Footing
//!
//! Load analysis for a footing shared by several columns, assuming the
//! footing is centred on the resultant so soil pressure is uniform.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::analysis::{CentricCombined, ColumnLoad};
//! use footing_core::elements::{Footing, SectionDirection};
//! use footing_core::geometry::AbsoluteLocation;
//! use footing_core::materials::Concrete;
//!
//! let footing = Footing::new(4.0, 2.0, 0.6, Concrete::new(24.8e9, 28.0e6, 24.0e3));
//! let loads = vec![
//!     ColumnLoad::new(300.0e3, AbsoluteLocation::new(-1.0, 0.0, 0.0)),
//!     ColumnLoad::new(500.0e3, AbsoluteLocation::new(1.0, 0.0, 0.0)),
//! ];
//!
//! let analysis = CentricCombined::new(&footing, loads, SectionDirection::Length1)?;
//! assert_eq!(analysis.absolute_centroid().value_x(), 0.25);
//! assert_eq!(analysis.solicitation(), 100.0e3);
//! # Ok::<(), footing_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::elements::{Footing, FootingGeometry, SectionDirection};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{AbsoluteLocation, RelativeLocation, Vector};

/// Axial load delivered by one column, at the column's location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnLoad {
    pub value: f64,
    pub location: AbsoluteLocation,
}

impl ColumnLoad {
    pub fn new(value: f64, location: AbsoluteLocation) -> Self {
        ColumnLoad { value, location }
    }
}

/// A column load paired with its position relative to the load centroid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativeColumnLoad {
    pub load: ColumnLoad,
    pub relative: RelativeLocation,
}

/// Uniform-pressure analysis of a combined footing.
#[derive(Debug, Clone)]
pub struct CentricCombined<'a> {
    footing: &'a Footing,
    loads_from_columns: Vec<ColumnLoad>,
    section_direction: SectionDirection,
}

impl<'a> CentricCombined<'a> {
    /// # Errors
    ///
    /// * `InvalidInput` - no loads, or loads summing to zero
    pub fn new(
        footing: &'a Footing,
        loads_from_columns: Vec<ColumnLoad>,
        section_direction: SectionDirection,
    ) -> CalcResult<Self> {
        if loads_from_columns.is_empty() {
            return Err(CalcError::invalid_input(
                "loads_from_columns",
                "[]",
                "At least one column load is required",
            ));
        }
        let total_load: f64 = loads_from_columns.iter().map(|load| load.value).sum();
        if total_load == 0.0 {
            return Err(CalcError::invalid_input(
                "loads_from_columns",
                total_load.to_string(),
                "Column loads must not cancel out",
            ));
        }

        Ok(CentricCombined {
            footing,
            loads_from_columns,
            section_direction,
        })
    }

    pub fn loads_from_columns(&self) -> &[ColumnLoad] {
        &self.loads_from_columns
    }

    /// Load-weighted plan position of the resultant; z is the plain mean
    pub fn absolute_centroid(&self) -> AbsoluteLocation {
        let (moment_xx, moment_yy, total_load) = self.moment_and_load_totals();

        AbsoluteLocation::new(moment_xx / total_load, moment_yy / total_load, self.value_z_mean())
    }

    /// Soil pressure under uniform distribution: Σ loads / plan area
    pub fn solicitation(&self) -> f64 {
        self.total_load() / self.footing.horizontal_area()
    }

    /// Line load along the section direction: pressure × orthogonal length
    pub fn solicitation_load(&self) -> f64 {
        self.solicitation() * self.orthogonal_length()
    }

    pub fn section_length(&self) -> f64 {
        self.footing.length(self.section_direction)
    }

    pub fn orthogonal_length(&self) -> f64 {
        self.footing.length(self.section_direction.orthogonal())
    }

    /// Loads ordered by the first component of the centroid→load vector
    pub fn sorted_loads_relative_to_centroid(&self) -> Vec<ColumnLoad> {
        let centroid = self.absolute_centroid();
        let key = |load: &ColumnLoad| -> f64 {
            Vector::based_on_relative_location(&RelativeLocation::absolute_location_relative_to(
                &load.location,
                &centroid,
            ))
            .direction()[0]
        };

        let mut loads = self.loads_from_columns.clone();
        loads.sort_by(|load_1, load_2| key(load_1).total_cmp(&key(load_2)));
        loads
    }

    /// Express every load relative to the centroid, with local axis 1
    /// rotated onto the direction of the last load.
    pub fn align_axis_1_with_columns(&self) -> Vec<RelativeColumnLoad> {
        let mut relatives = self.relativize_loads_from_columns();
        let aligner_vector = match relatives.last() {
            Some(last) => last.relative.to_vector(),
            None => return relatives,
        };

        for relative_load in &mut relatives {
            relative_load.relative.align_axis_1_with(&aligner_vector);
        }
        relatives
    }

    fn relativize_loads_from_columns(&self) -> Vec<RelativeColumnLoad> {
        let centroid = self.absolute_centroid();
        self.loads_from_columns
            .iter()
            .map(|load| RelativeColumnLoad {
                load: *load,
                relative: RelativeLocation::from_location_to_location(&centroid, &load.location),
            })
            .collect()
    }

    fn total_load(&self) -> f64 {
        self.loads_from_columns.iter().map(|load| load.value).sum()
    }

    fn moment_and_load_totals(&self) -> (f64, f64, f64) {
        self.loads_from_columns
            .iter()
            .fold((0.0, 0.0, 0.0), |(moment_xx, moment_yy, total_load), load| {
                (
                    moment_xx + load.value * load.location.value_x(),
                    moment_yy + load.value * load.location.value_y(),
                    total_load + load.value,
                )
            })
    }

    fn value_z_mean(&self) -> f64 {
        let sum: f64 = self.loads_from_columns.iter().map(|load| load.location.value_z()).sum();
        sum / self.loads_from_columns.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Concrete;

    const TOLERANCE: f64 = 1e-9;

    fn test_footing() -> Footing {
        Footing::new(5000.0, 2000.0, 600.0, Concrete::new(1800.0, 28.0, 2.4))
    }

    fn load(value: f64, value_x: f64, value_y: f64, value_z: f64) -> ColumnLoad {
        ColumnLoad::new(value, AbsoluteLocation::new(value_x, value_y, value_z))
    }

    #[test]
    fn test_empty_loads_rejected() {
        let footing = test_footing();
        assert!(CentricCombined::new(&footing, vec![], SectionDirection::Length1).is_err());
    }

    #[test]
    fn test_cancelling_loads_rejected() {
        let footing = test_footing();
        let loads = vec![load(100.0, 0.0, 0.0, 0.0), load(-100.0, 10.0, 0.0, 0.0)];
        assert!(CentricCombined::new(&footing, loads, SectionDirection::Length1).is_err());
    }

    #[test]
    fn test_absolute_centroid() {
        let footing = test_footing();
        let loads = vec![load(100.0, -1000.0, 0.0, 10.0), load(300.0, 1000.0, 400.0, 30.0)];
        let analysis = CentricCombined::new(&footing, loads, SectionDirection::Length1).unwrap();

        let centroid = analysis.absolute_centroid();
        assert_eq!(centroid.value_x(), 500.0);
        assert_eq!(centroid.value_y(), 300.0);
        assert_eq!(centroid.value_z(), 20.0);
    }

    #[test]
    fn test_solicitation_uses_orthogonal_length() {
        let footing = test_footing();
        let loads = vec![load(1.0e6, -1000.0, 0.0, 0.0), load(1.0e6, 1000.0, 0.0, 0.0)];

        let along_1 = CentricCombined::new(&footing, loads.clone(), SectionDirection::Length1).unwrap();
        assert!((along_1.solicitation() - 0.2).abs() < TOLERANCE);
        assert!((along_1.solicitation_load() - 400.0).abs() < TOLERANCE);
        assert_eq!(along_1.section_length(), 5000.0);

        let along_2 = CentricCombined::new(&footing, loads, SectionDirection::Length2).unwrap();
        assert!((along_2.solicitation_load() - 1000.0).abs() < TOLERANCE);
        assert_eq!(along_2.orthogonal_length(), 5000.0);
    }

    #[test]
    fn test_sorted_loads_relative_to_centroid() {
        let footing = test_footing();
        let loads = vec![
            load(100.0, 1500.0, 0.0, 0.0),
            load(100.0, -1500.0, 0.0, 0.0),
            load(100.0, 0.0, 200.0, 0.0),
        ];
        let analysis = CentricCombined::new(&footing, loads, SectionDirection::Length1).unwrap();

        let sorted: Vec<f64> = analysis
            .sorted_loads_relative_to_centroid()
            .iter()
            .map(|load| load.location.value_x())
            .collect();
        assert_eq!(sorted, vec![-1500.0, 0.0, 1500.0]);
        // input order untouched
        assert_eq!(analysis.loads_from_columns()[0].location.value_x(), 1500.0);
    }

    #[test]
    fn test_align_axis_1_with_columns() {
        let footing = test_footing();
        let loads = vec![load(1.0, 0.0, 0.0, 0.0), load(1.0, 300.0, 400.0, 0.0)];
        let analysis = CentricCombined::new(&footing, loads, SectionDirection::Length1).unwrap();

        let aligned = analysis.align_axis_1_with_columns();
        assert_eq!(aligned.len(), 2);
        assert!((aligned[0].relative.value_1 + 250.0).abs() < TOLERANCE);
        assert!(aligned[0].relative.value_2.abs() < TOLERANCE);
        assert!((aligned[1].relative.value_1 - 250.0).abs() < TOLERANCE);
        assert!(aligned[1].relative.value_2.abs() < TOLERANCE);
        assert_eq!(aligned[1].load.value, 1.0);
    }
}

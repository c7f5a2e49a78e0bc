//! # Punching Critical Section Perimeter (NSR-10 C.11.11)
//!
//! Perimeter of the two-way shear critical section around a column resting
//! on a footing. The section is the column footprint offset outward by half
//! the footing's effective height on every side, truncated at the footing
//! edges.
//!
//! ## Procedure
//!
//! Work happens in a local coordinates system anchored where the footing's
//! own system is anchored:
//!
//! 1. The column center is registered first (index 0).
//! 2. The four rectangle vertices are registered in cyclic order
//!    (+,+), (-,+), (-,-), (+,-) as indices 1 to 4.
//! 3. Candidate edges are 1→2, 2→3, 3→4 and 4→1.
//! 4. An edge is kept when at least one endpoint lies inside the footing
//!    plan (boundary inclusive).
//! 5. Endpoints of kept edges are clamped onto the footing plan, one axis
//!    at a time.
//! 6. The lengths of the kept edges are summed.
//!
//! Clamping snaps vertices to the boundary instead of intersecting edges
//! with it. That is exact for rectangles aligned with the footing axes,
//! which is the only orientation supported.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::calculations::punching_perimeter::compute_perimeter;
//! use footing_core::elements::PunchingFooting;
//! use footing_core::geometry::{AbsoluteLocation, CoordinatesSystem};
//!
//! let mut footing = PunchingFooting::new(2500.0, 1000.0, 450.0);
//! footing.add_coordinates_system(CoordinatesSystem::new(AbsoluteLocation::origin()));
//!
//! // column against the left edge, upper half
//! let column = AbsoluteLocation::new(-1025.0, 375.0, 0.0);
//! assert_eq!(compute_perimeter(&footing, 450.0, 250.0, &column)?, 1150.0);
//! # Ok::<(), footing_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::elements::{FootingGeometry, PunchingFooting};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{AbsoluteLocation, CoordinatesSystem, RelativeLocation, Vector};

/// Code section implemented here
pub const CODE_REFERENCE: &str = "NSR-10 C.11.11";

/// Column center plus four perimeter vertices
const FRAME_CAPACITY: usize = 5;

const COLUMN_INDEX: usize = 0;

/// Directed edge between two locations of the working frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge {
    from: usize,
    to: usize,
}

/// What a single perimeter evaluation produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PerimeterOutcome {
    /// Clipped perimeter length
    pub perimeter: f64,
    /// Number of edges that survived the footing test
    pub edges_kept: usize,
    /// Number of vertices moved by clamping
    pub vertices_clamped: usize,
    /// Perimeter vertices (indices 1 to 4) after clamping, local frame
    pub vertices: Vec<Vector>,
}

/// Single-use evaluator for one column on one footing.
///
/// Owns its working coordinates system; the footing's attached system only
/// lends its anchor and is never modified.
pub struct PunchingCriticalSectionPerimeter<'a, F: FootingGeometry> {
    footing: &'a F,
    column_section_length_1: f64,
    column_section_length_2: f64,
    column_absolute_location: AbsoluteLocation,
    local_coordinates_system: CoordinatesSystem,
}

impl<'a, F: FootingGeometry> PunchingCriticalSectionPerimeter<'a, F> {
    /// Check preconditions and set up the working frame.
    ///
    /// # Errors
    ///
    /// * `MissingCoordinatesSystem` - the footing has no local system attached
    /// * `InvalidInput` - a footing or column dimension is not positive
    pub fn new(
        footing: &'a F,
        column_section_length_1: f64,
        column_section_length_2: f64,
        column_absolute_location: AbsoluteLocation,
    ) -> CalcResult<Self> {
        let anchor_location = *footing
            .coordinates_system()
            .ok_or_else(|| CalcError::missing_coordinates_system("footing"))?
            .anchor_location();

        for (field, value) in [
            ("footing.length_1", footing.length_1()),
            ("footing.length_2", footing.length_2()),
            ("footing.effective_height", footing.effective_height()),
            ("column_section_length_1", column_section_length_1),
            ("column_section_length_2", column_section_length_2),
        ] {
            // non-finite values are not rejected here
            if value <= 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Dimension must be positive"));
            }
        }

        Ok(PunchingCriticalSectionPerimeter {
            footing,
            column_section_length_1,
            column_section_length_2,
            column_absolute_location,
            local_coordinates_system: CoordinatesSystem::with_capacity(anchor_location, FRAME_CAPACITY),
        })
    }

    /// Run the six steps and report the clipped perimeter.
    pub fn call(mut self) -> CalcResult<PerimeterOutcome> {
        self.add_column_to_local_coordinates_system();
        let vertices = self.add_perimeter_vertices_to_local_coordinates_system()?;
        let edges = self.select_edges_into_the_footing(build_edges(vertices))?;
        let vertices_clamped = self.update_edges_vertices(&edges)?;
        let perimeter = self.compute_perimeter(&edges)?;

        log::debug!(
            "punching perimeter: {} of 4 edges kept, {} vertices clamped, perimeter = {}",
            edges.len(),
            vertices_clamped,
            perimeter
        );
        if edges.is_empty() {
            log::warn!(
                "punching perimeter: critical section of column at ({}, {}) lies entirely outside the footing",
                self.column_absolute_location.value_x(),
                self.column_absolute_location.value_y()
            );
        }

        let vertices = vertices
            .iter()
            .map(|&index| self.local_coordinates_system.relative_location_at(index).map(RelativeLocation::to_vector))
            .collect::<CalcResult<Vec<_>>>()?;

        Ok(PerimeterOutcome {
            perimeter,
            edges_kept: edges.len(),
            vertices_clamped,
            vertices,
        })
    }

    fn add_column_to_local_coordinates_system(&mut self) {
        let column_vector = self.column_absolute_location.to_vector()
            - self.local_coordinates_system.anchor_location().to_vector();
        let index = self.add_relative_location_from_a_vector(column_vector);
        debug_assert_eq!(index, COLUMN_INDEX);
    }

    fn add_perimeter_vertices_to_local_coordinates_system(&mut self) -> CalcResult<[usize; 4]> {
        let column_vector = self.local_coordinates_system.first_location_vector()?;
        let mut indices = [0; 4];
        for (slot, offset) in indices.iter_mut().zip(self.perimeter_vertices_relative_to_column_location()) {
            *slot = self.add_relative_location_from_a_vector(offset + column_vector);
        }
        Ok(indices)
    }

    /// Vertex offsets from the column center, in cyclic order
    fn perimeter_vertices_relative_to_column_location(&self) -> [Vector; 4] {
        let half_width_1 = 0.5 * (self.column_section_length_1 + self.footing.effective_height());
        let half_width_2 = 0.5 * (self.column_section_length_2 + self.footing.effective_height());

        [
            Vector::new(half_width_1, half_width_2, 0.0),
            Vector::new(-half_width_1, half_width_2, 0.0),
            Vector::new(-half_width_1, -half_width_2, 0.0),
            Vector::new(half_width_1, -half_width_2, 0.0),
        ]
    }

    fn add_relative_location_from_a_vector(&mut self, vector: Vector) -> usize {
        let mut relative_location = RelativeLocation::default();
        relative_location.update_from_vector(&vector);
        self.local_coordinates_system.add_location(relative_location)
    }

    fn select_edges_into_the_footing(&self, edges: [Edge; 4]) -> CalcResult<Vec<Edge>> {
        let mut kept = Vec::with_capacity(edges.len());
        for edge in edges {
            let from_into_footing = self.into_footing(edge.from)?;
            let to_into_footing = self.into_footing(edge.to)?;
            if from_into_footing || to_into_footing {
                kept.push(edge);
            } else {
                log::trace!("dropping edge {} -> {}: both ends outside the footing", edge.from, edge.to);
            }
        }
        Ok(kept)
    }

    fn into_footing(&self, index: usize) -> CalcResult<bool> {
        let location = self.local_coordinates_system.relative_location_at(index)?;
        Ok(self.horizontal_check(location) && self.vertical_check(location))
    }

    fn horizontal_check(&self, location: &RelativeLocation) -> bool {
        let limit = 0.5 * self.footing.length_1();
        location.value_1 >= -limit && location.value_1 <= limit
    }

    fn vertical_check(&self, location: &RelativeLocation) -> bool {
        let limit = 0.5 * self.footing.length_2();
        location.value_2 >= -limit && location.value_2 <= limit
    }

    /// Clamp every endpoint of the kept edges; returns how many vertices moved
    fn update_edges_vertices(&mut self, edges: &[Edge]) -> CalcResult<usize> {
        let mut clamped = [false; FRAME_CAPACITY];
        for edge in edges {
            for index in [edge.from, edge.to] {
                if self.update_location_to_limit(index)? {
                    if let Some(flag) = clamped.get_mut(index) {
                        *flag = true;
                    }
                }
            }
        }
        Ok(clamped.iter().filter(|&&moved| moved).count())
    }

    fn update_location_to_limit(&mut self, index: usize) -> CalcResult<bool> {
        let limit_1 = 0.5 * self.footing.length_1();
        let limit_2 = 0.5 * self.footing.length_2();
        let location = self.local_coordinates_system.relative_location_at_mut(index)?;

        let value_1 = constrain(location.value_1, limit_1);
        let value_2 = constrain(location.value_2, limit_2);
        let moved = value_1 != location.value_1 || value_2 != location.value_2;
        if moved {
            log::trace!(
                "clamping vertex {}: ({}, {}) -> ({}, {})",
                index,
                location.value_1,
                location.value_2,
                value_1,
                value_2
            );
        }

        location.value_1 = value_1;
        location.value_2 = value_2;
        Ok(moved)
    }

    fn compute_perimeter(&self, edges: &[Edge]) -> CalcResult<f64> {
        edges.iter().try_fold(0.0, |perimeter, edge| -> CalcResult<f64> {
            let vector_from = self.local_coordinates_system.relative_location_at(edge.from)?.to_vector();
            let vector_to = self.local_coordinates_system.relative_location_at(edge.to)?.to_vector();
            Ok(perimeter + (vector_to - vector_from).magnitude())
        })
    }
}

fn build_edges(vertices: [usize; 4]) -> [Edge; 4] {
    [
        Edge { from: vertices[0], to: vertices[1] },
        Edge { from: vertices[1], to: vertices[2] },
        Edge { from: vertices[2], to: vertices[3] },
        Edge { from: vertices[3], to: vertices[0] },
    ]
}

/// Snap `value` into `[-limit, limit]`
fn constrain(value: f64, limit: f64) -> f64 {
    if value > limit {
        return limit;
    }
    if value < -limit {
        return -limit;
    }
    value
}

/// Clipped critical section perimeter of a column on a footing.
///
/// The footing must already carry a local coordinates system; its anchor
/// defines the local frame. Lengths share whatever unit the caller uses.
///
/// # Errors
///
/// * `MissingCoordinatesSystem` - no local system attached to the footing
/// * `InvalidInput` - a footing or column dimension is not positive
pub fn compute_perimeter<F: FootingGeometry>(
    footing: &F,
    column_section_length_1: f64,
    column_section_length_2: f64,
    column_absolute_location: &AbsoluteLocation,
) -> CalcResult<f64> {
    PunchingCriticalSectionPerimeter::new(
        footing,
        column_section_length_1,
        column_section_length_2,
        *column_absolute_location,
    )?
    .call()
    .map(|outcome| outcome.perimeter)
}

/// Input parameters for a punching perimeter calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "F-1 / C-3",
///   "footing": {
///     "length_1": 2500.0,
///     "length_2": 1000.0,
///     "effective_height": 450.0,
///     "coordinates_system": {
///       "anchor_location": { "value_x": 0.0, "value_y": 0.0, "value_z": 0.0 }
///     }
///   },
///   "column_section_length_1": 450.0,
///   "column_section_length_2": 250.0,
///   "column_absolute_location": { "value_x": -1025.0, "value_y": 375.0, "value_z": 0.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchingPerimeterInput {
    /// User label for this check (e.g., "F-1 / C-3")
    #[serde(default)]
    pub label: String,

    /// Footing plan, effective height and local frame
    pub footing: PunchingFooting,

    /// Column section dimension along local axis 1
    pub column_section_length_1: f64,

    /// Column section dimension along local axis 2
    pub column_section_length_2: f64,

    /// Column center in global coordinates
    pub column_absolute_location: AbsoluteLocation,
}

impl PunchingPerimeterInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.footing.validate()?;
        if self.column_section_length_1 <= 0.0 {
            return Err(CalcError::invalid_input(
                "column_section_length_1",
                self.column_section_length_1.to_string(),
                "Column section must be positive",
            ));
        }
        if self.column_section_length_2 <= 0.0 {
            return Err(CalcError::invalid_input(
                "column_section_length_2",
                self.column_section_length_2.to_string(),
                "Column section must be positive",
            ));
        }
        if self.footing.coordinates_system.is_none() {
            return Err(CalcError::missing_coordinates_system("footing"));
        }
        Ok(())
    }

    /// Side lengths (W1, W2) of the unclipped critical rectangle
    pub fn critical_section_widths(&self) -> (f64, f64) {
        (
            self.column_section_length_1 + self.footing.effective_height,
            self.column_section_length_2 + self.footing.effective_height,
        )
    }

    /// Perimeter with no footing edge in the way: 2·(W1 + W2)
    pub fn unclipped_perimeter(&self) -> f64 {
        let (width_1, width_2) = self.critical_section_widths();
        2.0 * (width_1 + width_2)
    }
}

/// Results from a punching perimeter calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "perimeter": 1150.0,
///   "unclipped_perimeter": 3200.0,
///   "clipped": true,
///   "edges_kept": 2,
///   "vertices": [
///     { "x": -575.0, "y": 500.0, "z": 0.0 },
///     { "x": -1475.0, "y": 725.0, "z": 0.0 },
///     { "x": -1250.0, "y": 25.0, "z": 0.0 },
///     { "x": -575.0, "y": 25.0, "z": 0.0 }
///   ],
///   "code_reference": "NSR-10 C.11.11"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchingPerimeterResult {
    /// Critical section perimeter b0 after truncation at the footing edges
    pub perimeter: f64,

    /// Perimeter of the full critical rectangle
    pub unclipped_perimeter: f64,

    /// Whether any edge was dropped or any vertex clamped
    pub clipped: bool,

    /// Edges of the critical rectangle that remain (0 to 4)
    pub edges_kept: usize,

    /// Rectangle vertices in the footing's local frame after clamping.
    /// Vertices on dropped edges only keep their unclamped position.
    pub vertices: Vec<Vector>,

    /// Code section reference
    pub code_reference: String,
}

impl PunchingPerimeterResult {
    /// Fraction of the full perimeter that remains effective
    pub fn effective_fraction(&self) -> f64 {
        if self.unclipped_perimeter > 0.0 {
            self.perimeter / self.unclipped_perimeter
        } else {
            0.0
        }
    }
}

/// Calculate the clipped punching perimeter.
///
/// # Returns
///
/// * `Ok(PunchingPerimeterResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid or the footing has no local frame
pub fn calculate(input: &PunchingPerimeterInput) -> CalcResult<PunchingPerimeterResult> {
    input.validate()?;

    let outcome = PunchingCriticalSectionPerimeter::new(
        &input.footing,
        input.column_section_length_1,
        input.column_section_length_2,
        input.column_absolute_location,
    )?
    .call()?;

    Ok(PunchingPerimeterResult {
        perimeter: outcome.perimeter,
        unclipped_perimeter: input.unclipped_perimeter(),
        clipped: outcome.edges_kept < 4 || outcome.vertices_clamped > 0,
        edges_kept: outcome.edges_kept,
        vertices: outcome.vertices,
        code_reference: CODE_REFERENCE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Footing;
    use crate::materials::Concrete;

    const LENGTH_1: f64 = 2500.0;
    const LENGTH_2: f64 = 1000.0;
    const EFFECTIVE_HEIGHT: f64 = 450.0;
    const COLUMN_1: f64 = 450.0;
    const COLUMN_2: f64 = 250.0;

    /// Plan-only footing with a fixed effective height of 450
    fn test_footing() -> PunchingFooting {
        let mut footing = PunchingFooting::new(LENGTH_1, LENGTH_2, EFFECTIVE_HEIGHT);
        footing.add_coordinates_system(CoordinatesSystem::new(AbsoluteLocation::origin()));
        footing
    }

    fn perimeter_at(value_x: f64, value_y: f64) -> f64 {
        compute_perimeter(
            &test_footing(),
            COLUMN_1,
            COLUMN_2,
            &AbsoluteLocation::new(value_x, value_y, 0.0),
        )
        .unwrap()
    }

    fn full_perimeter() -> f64 {
        2.0 * ((COLUMN_1 + EFFECTIVE_HEIGHT) + (COLUMN_2 + EFFECTIVE_HEIGHT))
    }

    fn test_input(value_x: f64, value_y: f64) -> PunchingPerimeterInput {
        PunchingPerimeterInput {
            label: "F-1".to_string(),
            footing: test_footing(),
            column_section_length_1: COLUMN_1,
            column_section_length_2: COLUMN_2,
            column_absolute_location: AbsoluteLocation::new(value_x, value_y, 0.0),
        }
    }

    #[test]
    fn test_column_case_a() {
        assert_eq!(perimeter_at(-1025.0, 375.0), 1150.0);
    }

    #[test]
    fn test_column_case_b() {
        assert_eq!(perimeter_at(0.0, 375.0), 1850.0);
    }

    #[test]
    fn test_column_case_c() {
        assert_eq!(perimeter_at(1025.0, 375.0), 1150.0);
    }

    #[test]
    fn test_column_case_d() {
        assert_eq!(perimeter_at(-1025.0, 0.0), 2050.0);
    }

    #[test]
    fn test_column_case_e() {
        assert_eq!(perimeter_at(0.0, 0.0), 3200.0);
    }

    #[test]
    fn test_column_case_f() {
        assert_eq!(perimeter_at(1025.0, 0.0), 2050.0);
    }

    #[test]
    fn test_column_case_g() {
        assert_eq!(perimeter_at(-1025.0, -375.0), 1150.0);
    }

    #[test]
    fn test_column_case_h() {
        assert_eq!(perimeter_at(0.0, -375.0), 1850.0);
    }

    #[test]
    fn test_column_case_i() {
        assert_eq!(perimeter_at(1025.0, -375.0), 1150.0);
    }

    #[test]
    fn test_interior_column_keeps_full_perimeter() {
        assert_eq!(full_perimeter(), 3200.0);
        assert_eq!(perimeter_at(100.0, -50.0), full_perimeter());
        assert_eq!(perimeter_at(-700.0, 100.0), full_perimeter());
    }

    #[test]
    fn test_vertex_on_boundary_counts_as_inside() {
        // vertices at x = 1250 sit exactly on the edge
        assert_eq!(perimeter_at(800.0, 0.0), full_perimeter());

        // only the boundary vertices keep edges 1->2, 2->3 and 3->4 alive;
        // 1->2 and 3->4 collapse to zero length after clamping
        assert_eq!(perimeter_at(1700.0, 0.0), 700.0);
    }

    #[test]
    fn test_column_centered_on_boundary() {
        // 450 + 700 + 450
        assert_eq!(perimeter_at(1250.0, 0.0), 1600.0);
    }

    #[test]
    fn test_column_far_outside() {
        assert_eq!(perimeter_at(5000.0, 0.0), 0.0);
        assert_eq!(perimeter_at(0.0, -3000.0), 0.0);
    }

    #[test]
    fn test_perimeter_is_bounded() {
        let full = full_perimeter();
        let mut value_x = -2000.0;
        while value_x <= 2000.0 {
            let mut value_y = -1000.0;
            while value_y <= 1000.0 {
                let perimeter = perimeter_at(value_x, value_y);
                assert!(perimeter >= 0.0, "negative perimeter at ({value_x}, {value_y})");
                assert!(perimeter <= full, "perimeter {perimeter} exceeds {full} at ({value_x}, {value_y})");
                value_y += 125.0;
            }
            value_x += 125.0;
        }
    }

    #[test]
    fn test_clamped_vertices_stay_on_footing() {
        let footing = test_footing();
        let outcome = PunchingCriticalSectionPerimeter::new(
            &footing,
            COLUMN_1,
            COLUMN_2,
            AbsoluteLocation::new(-1025.0, 375.0, 0.0),
        )
        .unwrap()
        .call()
        .unwrap();

        assert_eq!(outcome.edges_kept, 2);
        assert_eq!(outcome.vertices_clamped, 2);
        // vertex 2 belongs only to dropped edges and keeps its raw position
        assert_eq!(
            outcome.vertices,
            vec![
                Vector::new(-575.0, 500.0, 0.0),
                Vector::new(-1475.0, 725.0, 0.0),
                Vector::new(-1250.0, 25.0, 0.0),
                Vector::new(-575.0, 25.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_anchor_offsets_the_local_frame() {
        let mut footing = PunchingFooting::new(LENGTH_1, LENGTH_2, EFFECTIVE_HEIGHT);
        footing.add_coordinates_system(CoordinatesSystem::new(AbsoluteLocation::new(10_000.0, 5_000.0, 300.0)));

        let centered = AbsoluteLocation::new(10_000.0, 5_000.0, 300.0);
        assert_eq!(compute_perimeter(&footing, COLUMN_1, COLUMN_2, &centered).unwrap(), 3200.0);

        let corner = AbsoluteLocation::new(8_975.0, 5_375.0, 300.0);
        assert_eq!(compute_perimeter(&footing, COLUMN_1, COLUMN_2, &corner).unwrap(), 1150.0);
    }

    #[test]
    fn test_footing_system_is_not_mutated() {
        let footing = test_footing();
        let column = AbsoluteLocation::new(-1025.0, 0.0, 0.0);
        let first = compute_perimeter(&footing, COLUMN_1, COLUMN_2, &column).unwrap();
        let second = compute_perimeter(&footing, COLUMN_1, COLUMN_2, &column).unwrap();

        assert_eq!(first, 2050.0);
        assert_eq!(first, second);
        assert!(footing.coordinates_system().unwrap().is_empty());
    }

    #[test]
    fn test_missing_coordinates_system() {
        let footing = PunchingFooting::new(LENGTH_1, LENGTH_2, EFFECTIVE_HEIGHT);
        let err = compute_perimeter(&footing, COLUMN_1, COLUMN_2, &AbsoluteLocation::origin()).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_COORDINATES_SYSTEM");
    }

    #[test]
    fn test_non_positive_dimension_rejected() {
        let err = compute_perimeter(&test_footing(), 0.0, COLUMN_2, &AbsoluteLocation::origin()).unwrap_err();
        assert_eq!(
            err,
            CalcError::invalid_input("column_section_length_1", "0", "Dimension must be positive")
        );
    }

    #[test]
    fn test_non_finite_input_is_not_rejected() {
        // NaN vertices fail every boundary comparison, so every edge is dropped
        let perimeter = compute_perimeter(
            &test_footing(),
            f64::NAN,
            COLUMN_2,
            &AbsoluteLocation::origin(),
        )
        .unwrap();
        assert_eq!(perimeter, 0.0);

        let mut unbounded = test_footing();
        unbounded.length_1 = f64::INFINITY;
        unbounded.length_2 = f64::INFINITY;
        let perimeter = compute_perimeter(&unbounded, COLUMN_1, COLUMN_2, &AbsoluteLocation::origin()).unwrap();
        assert_eq!(perimeter, full_perimeter());
    }

    #[test]
    fn test_with_full_footing_element() {
        // 500 high with 75 bottom cover: effective height 425
        let mut footing = Footing::new(LENGTH_1, LENGTH_2, 500.0, Concrete::new(1800.0, 28.0, 2.4));
        footing.add_coordinates_system(CoordinatesSystem::new(AbsoluteLocation::origin()));

        let perimeter = compute_perimeter(&footing, COLUMN_1, COLUMN_2, &AbsoluteLocation::origin()).unwrap();
        assert_eq!(perimeter, 2.0 * ((COLUMN_1 + 425.0) + (COLUMN_2 + 425.0)));
    }

    #[test]
    fn test_calculate() {
        let result = calculate(&test_input(-1025.0, 375.0)).unwrap();
        assert_eq!(result.perimeter, 1150.0);
        assert_eq!(result.unclipped_perimeter, 3200.0);
        assert!(result.clipped);
        assert_eq!(result.edges_kept, 2);
        assert_eq!(result.code_reference, CODE_REFERENCE);
        assert!((result.effective_fraction() - 1150.0 / 3200.0).abs() < 1e-12);

        let interior = calculate(&test_input(0.0, 0.0)).unwrap();
        assert!(!interior.clipped);
        assert_eq!(interior.edges_kept, 4);
        assert_eq!(interior.effective_fraction(), 1.0);
    }

    #[test]
    fn test_invalid_input() {
        let mut input = test_input(0.0, 0.0);
        input.column_section_length_2 = -250.0;
        assert!(calculate(&input).is_err());

        let mut input = test_input(0.0, 0.0);
        input.footing.coordinates_system = None;
        assert_eq!(
            calculate(&input).unwrap_err(),
            CalcError::missing_coordinates_system("footing")
        );
    }

    #[test]
    fn test_serialization() {
        let input = test_input(1025.0, -375.0);
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: PunchingPerimeterInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
        assert_eq!(calculate(&roundtrip).unwrap().perimeter, 1150.0);
    }
}

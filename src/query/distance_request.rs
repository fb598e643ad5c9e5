use crate::math::{Point, Real};
use crate::query::SolverType;
use crate::shape::ShapeType;

/// The distance reported for pairs of shapes no routine is registered for.
pub const UNKNOWN_DISTANCE: Real = Real::MAX;

/// Parameters of a distance query.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DistanceRequest {
    /// The convex solver strategy used by [`distance()`](crate::query::distance()).
    pub solver_type: SolverType,
    /// Should the nearest points be written to the [`DistanceResult`]?
    pub enable_nearest_points: bool,
}

impl DistanceRequest {
    /// A request using the given solver strategy.
    pub fn new(solver_type: SolverType) -> Self {
        Self {
            solver_type,
            enable_nearest_points: false,
        }
    }

    /// Enables the computation of the nearest points.
    pub fn with_nearest_points(mut self) -> Self {
        self.enable_nearest_points = true;
        self
    }
}

/// The result of one or several distance queries.
///
/// A result only records a new distance if it is smaller than the one it already holds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DistanceResult {
    /// The minimum distance found so far, [`UNKNOWN_DISTANCE`] if none.
    pub min_distance: Real,
    /// The world-space points of both shapes realizing `min_distance`.
    ///
    /// Only computed if the request enables it, and only for disjoint shapes.
    pub nearest_points: Option<[Point<Real>; 2]>,
    /// The types of the primitive shapes realizing `min_distance`.
    pub shape_types: Option<(ShapeType, ShapeType)>,
}

impl Default for DistanceResult {
    fn default() -> Self {
        Self {
            min_distance: UNKNOWN_DISTANCE,
            nearest_points: None,
            shape_types: None,
        }
    }
}

impl DistanceResult {
    /// An empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `distance` if it is smaller than the current minimum distance.
    ///
    /// Returns `true` if the result was modified.
    pub fn update(
        &mut self,
        distance: Real,
        shape_types: (ShapeType, ShapeType),
        nearest_points: Option<[Point<Real>; 2]>,
    ) -> bool {
        if distance < self.min_distance {
            self.min_distance = distance;
            self.shape_types = Some(shape_types);
            self.nearest_points = nearest_points;
            true
        } else {
            false
        }
    }

    /// Records the content of `other` if its distance is smaller than ours.
    pub fn merge(&mut self, other: &DistanceResult) -> bool {
        if other.min_distance < self.min_distance {
            *self = *other;
            true
        } else {
            false
        }
    }

    /// Exchanges the roles of both shapes in this result.
    pub fn swap(&mut self) {
        if let Some([p1, p2]) = self.nearest_points {
            self.nearest_points = Some([p2, p1]);
        }
        if let Some((t1, t2)) = self.shape_types {
            self.shape_types = Some((t2, t1));
        }
    }
}

use crate::math::{Isometry, Point, Real};
use crate::query::DistanceMatrix;
use crate::shape::SupportMap;

/// The built-in convex solver strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum SolverType {
    /// The Gilbert-Johnson-Keerthi algorithm, with Johnson's distance sub-algorithm.
    #[default]
    Gjk,
    /// Gilbert's iterative minimum-norm point algorithm.
    Gilbert,
}

/// Outcome of a convex closest-points computation.
///
/// Points are expressed in the local-space of the first shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConvexClosestPoints {
    /// The shapes overlap.
    Intersecting,
    /// The shapes are disjoint, with the given closest points on the first and second shape.
    Separated(Point<Real>, Point<Real>),
}

/// A convex solver strategy, together with its distance dispatch table.
pub trait NarrowPhaseSolver: Default + Send + Sync + 'static {
    /// Computes the closest points between two convex shapes.
    ///
    /// `pos12` is the position of `g2` relative to `g1`.
    fn closest_points(
        &self,
        pos12: &Isometry<Real>,
        g1: &dyn SupportMap,
        g2: &dyn SupportMap,
    ) -> ConvexClosestPoints;

    /// The distance dispatch table of this strategy.
    ///
    /// It is built on first use and shared, read-only, by every subsequent query.
    fn distance_matrix() -> &'static DistanceMatrix<Self>;
}

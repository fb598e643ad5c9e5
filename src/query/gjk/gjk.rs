//! The Gilbert-Johnson-Keerthi distance algorithm.

use crate::math::{Isometry, Real, Vector, DEFAULT_EPSILON, DIM};
use crate::query::gjk::{CSOPoint, JohnsonSimplex};
use crate::query::{ConvexClosestPoints, DistanceMatrix, NarrowPhaseSolver};
use crate::shape::SupportMap;
use na::Unit;
use num::Bounded;
use std::sync::OnceLock;

/// The absolute tolerance used by the GJK algorithm.
pub fn eps_tol() -> Real {
    DEFAULT_EPSILON * 10.0
}

/// Computes the closest points between two convex shapes with the GJK algorithm.
///
/// `pos12` is the position of `g2` relative to `g1`. The returned points are expressed in the
/// local-space of `g1`. The algorithm stops once the gap between the lower and upper bounds
/// of the distance is smaller than `sqrt(tolerance)` times the distance, or after
/// `max_iterations` steps.
pub fn closest_points<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    max_iterations: usize,
    tolerance: Real,
) -> ConvexClosestPoints
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let eps_rel = tolerance.sqrt();
    let init_dir = if pos12.translation.vector.norm_squared() > 0.0 {
        pos12.translation.vector
    } else {
        Vector::x()
    };

    let mut simplex = JohnsonSimplex::new(CSOPoint::from_shapes(pos12, g1, g2, &init_dir));
    let mut proj = simplex.project_origin_and_reduce();
    let mut max_bound = Real::max_value();

    for _ in 0..max_iterations {
        let old_max_bound = max_bound;

        let Some((dir, dist)) = Unit::try_new_and_get(-proj.coords, tolerance) else {
            // The origin is on the simplex.
            return ConvexClosestPoints::Intersecting;
        };
        max_bound = dist;

        if max_bound >= old_max_bound {
            // Upper bounds inconsistencies.
            return separated(&simplex);
        }

        let cso_point = CSOPoint::from_shapes_toward(pos12, g1, g2, &dir);
        let min_bound = -dir.dot(&cso_point.point.coords);

        if max_bound - min_bound <= eps_rel * max_bound || !simplex.add_point(cso_point) {
            return separated(&simplex);
        }

        proj = simplex.project_origin_and_reduce();

        if simplex.dimension() == DIM {
            // The origin is inside of the tetrahedron.
            return ConvexClosestPoints::Intersecting;
        }
    }

    log::debug!(
        "GJK stopped after {} iterations without converging.",
        max_iterations
    );
    separated(&simplex)
}

fn separated(simplex: &JohnsonSimplex) -> ConvexClosestPoints {
    let (p1, p2) = simplex.closest_points();
    ConvexClosestPoints::Separated(p1, p2)
}

/// The GJK solver strategy.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GjkSolver {
    /// The maximum number of iterations of a single query.
    pub max_iterations: usize,
    /// The distance under which shapes are considered intersecting.
    pub tolerance: Real,
}

impl Default for GjkSolver {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: eps_tol(),
        }
    }
}

impl NarrowPhaseSolver for GjkSolver {
    fn closest_points(
        &self,
        pos12: &Isometry<Real>,
        g1: &dyn SupportMap,
        g2: &dyn SupportMap,
    ) -> ConvexClosestPoints {
        closest_points(pos12, g1, g2, self.max_iterations, self.tolerance)
    }

    fn distance_matrix() -> &'static DistanceMatrix<Self> {
        static MATRIX: OnceLock<DistanceMatrix<GjkSolver>> = OnceLock::new();
        MATRIX.get_or_init(|| {
            log::debug!("Building the distance dispatch table of the GJK solver.");
            DistanceMatrix::new()
        })
    }
}

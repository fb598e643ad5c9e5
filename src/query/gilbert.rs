//! Gilbert's iterative minimum-norm point algorithm.
//!
//! The current point `x` of the configuration-space obstacle moves toward the support point `w`
//! in the direction `-x`, to the point of the segment `[x, w]` closest to the origin. Unlike GJK
//! no simplex is maintained: each step only remembers the current point and the pair of points
//! of the original shapes it is made of.

use crate::math::{Isometry, Real, Vector};
use crate::query::gjk::{eps_tol, CSOPoint};
use crate::query::{ConvexClosestPoints, DistanceMatrix, NarrowPhaseSolver};
use crate::shape::SupportMap;
use std::sync::OnceLock;

/// Computes the closest points between two convex shapes with Gilbert's algorithm.
///
/// `pos12` is the position of `g2` relative to `g1`. The returned points are expressed in the
/// local-space of `g1`. If no separating plane has been found after `max_iterations` steps,
/// the shapes are reported as intersecting.
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

    let init = CSOPoint::from_shapes(pos12, g1, g2, &init_dir);
    let (mut p1, mut p2) = (init.orig1, init.orig2);
    let mut lower_bound: Real = 0.0;

    for _ in 0..max_iterations {
        let x = p1 - p2;
        let sq_norm = x.norm_squared();

        if sq_norm <= tolerance * tolerance {
            return ConvexClosestPoints::Intersecting;
        }

        let support = CSOPoint::from_shapes(pos12, g1, g2, &-x);
        let w = support.point.coords;
        let gap = sq_norm - x.dot(&w);
        lower_bound = lower_bound.max(x.dot(&w) / sq_norm.sqrt());

        if gap <= eps_rel * sq_norm {
            return ConvexClosestPoints::Separated(p1, p2);
        }

        // Exact line search on the segment [x, w].
        let step = w - x;
        let t = (-x.dot(&step) / step.norm_squared()).clamp(0.0, 1.0);
        p1 += (support.orig1 - p1) * t;
        p2 += (support.orig2 - p2) * t;
    }

    log::debug!(
        "Gilbert's algorithm stopped after {} iterations without converging.",
        max_iterations
    );

    if lower_bound > 0.0 {
        ConvexClosestPoints::Separated(p1, p2)
    } else {
        ConvexClosestPoints::Intersecting
    }
}

/// The solver strategy based on Gilbert's minimum-norm point algorithm.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GilbertSolver {
    /// The maximum number of iterations of a single query.
    pub max_iterations: usize,
    /// The distance under which shapes are considered intersecting.
    pub tolerance: Real,
}

impl Default for GilbertSolver {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: eps_tol(),
        }
    }
}

impl NarrowPhaseSolver for GilbertSolver {
    fn closest_points(
        &self,
        pos12: &Isometry<Real>,
        g1: &dyn SupportMap,
        g2: &dyn SupportMap,
    ) -> ConvexClosestPoints {
        closest_points(pos12, g1, g2, self.max_iterations, self.tolerance)
    }

    fn distance_matrix() -> &'static DistanceMatrix<Self> {
        static MATRIX: OnceLock<DistanceMatrix<GilbertSolver>> = OnceLock::new();
        MATRIX.get_or_init(|| {
            log::debug!("Building the distance dispatch table of Gilbert's solver.");
            DistanceMatrix::new()
        })
    }
}

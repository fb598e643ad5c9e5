use crate::math::{Isometry, Real};
use crate::query::distance::unexpected_shapes;
use crate::query::{ConvexClosestPoints, DistanceContext, DistanceResult, NarrowPhaseSolver};
use crate::shape::Shape;

/// Distance routine between two support-mapped shapes, delegated to the convex solver.
pub fn dispatch_support_map_support_map<S: NarrowPhaseSolver>(
    g1: &dyn Shape,
    pos1: &Isometry<Real>,
    g2: &dyn Shape,
    pos2: &Isometry<Real>,
    ctx: &DistanceContext<'_, S>,
    result: &mut DistanceResult,
) -> Real {
    let (Some(s1), Some(s2)) = (g1.as_support_map(), g2.as_support_map()) else {
        return unexpected_shapes(g1, g2);
    };

    let pos12 = pos1.inv_mul(pos2);
    let types = (g1.shape_type(), g2.shape_type());

    match ctx.solver.closest_points(&pos12, s1, s2) {
        ConvexClosestPoints::Intersecting => {
            let _ = result.update(0.0, types, None);
            0.0
        }
        ConvexClosestPoints::Separated(p1, p2) => {
            let dist = na::distance(&p1, &p2);
            let points = ctx
                .request
                .enable_nearest_points
                .then(|| [pos1 * p1, pos1 * p2]);
            let _ = result.update(dist, types, points);
            dist
        }
    }
}

use crate::math::{Isometry, Point, Real};
use crate::query::distance::unexpected_shapes;
use crate::query::{DistanceContext, DistanceResult};
use crate::shape::{HalfSpace, Shape};

/// Distance between two world-space half-spaces.
///
/// Half-spaces always intersect unless their normals are exactly opposite. In that case,
/// they are disjoint if the boundary planes are separated by a gap.
pub fn distance_halfspace_halfspace(hs1: &HalfSpace, hs2: &HalfSpace) -> Real {
    if *hs1.normal == -*hs2.normal {
        // `hs2` is `dot(n1, x) >= -offset2`.
        (-hs2.offset - hs1.offset).max(0.0)
    } else {
        0.0
    }
}

/// Distance routine between two half-spaces.
pub fn dispatch_halfspace_halfspace<S>(
    g1: &dyn Shape,
    pos1: &Isometry<Real>,
    g2: &dyn Shape,
    pos2: &Isometry<Real>,
    ctx: &DistanceContext<'_, S>,
    result: &mut DistanceResult,
) -> Real {
    let (Some(hs1), Some(hs2)) = (g1.as_halfspace(), g2.as_halfspace()) else {
        return unexpected_shapes(g1, g2);
    };

    let hs1 = hs1.transform_by(pos1);
    let hs2 = hs2.transform_by(pos2);
    let dist = distance_halfspace_halfspace(&hs1, &hs2);

    let points = if ctx.request.enable_nearest_points && dist > 0.0 {
        let p1: Point<Real> = hs1.plane_point();
        Some([p1, p1 + *hs1.normal * dist])
    } else {
        None
    };

    let _ = result.update(dist, (g1.shape_type(), g2.shape_type()), points);
    dist
}

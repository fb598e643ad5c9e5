use crate::math::{Isometry, Point, Real};
use crate::query::distance::unexpected_shapes;
use crate::query::{DistanceContext, DistanceResult};
use crate::shape::{HalfSpace, Shape, SupportMap};

/// Distance between a world-space half-space and a support-mapped shape at `pos2`.
///
/// Returns the distance together with the point of the boundary plane and the point of the
/// shape realizing it.
pub fn distance_halfspace_support_map<G: ?Sized + SupportMap>(
    halfspace: &HalfSpace,
    pos2: &Isometry<Real>,
    other: &G,
) -> (Real, [Point<Real>; 2]) {
    let deepest = other.support_point_toward(pos2, &-halfspace.normal);
    let dist = halfspace.signed_distance(&deepest).max(0.0);
    let on_plane = deepest - *halfspace.normal * dist;
    (dist, [on_plane, deepest])
}

fn halfspace_support_map_world(
    hs: &dyn Shape,
    hs_pos: &Isometry<Real>,
    other: &dyn Shape,
    other_pos: &Isometry<Real>,
) -> Option<(Real, [Point<Real>; 2])> {
    let halfspace = hs.as_halfspace()?.transform_by(hs_pos);
    let other = other.as_support_map()?;
    Some(distance_halfspace_support_map(&halfspace, other_pos, other))
}

/// Distance routine between a half-space and a support-mapped shape.
pub fn dispatch_halfspace_support_map<S>(
    g1: &dyn Shape,
    pos1: &Isometry<Real>,
    g2: &dyn Shape,
    pos2: &Isometry<Real>,
    ctx: &DistanceContext<'_, S>,
    result: &mut DistanceResult,
) -> Real {
    let Some((dist, points)) = halfspace_support_map_world(g1, pos1, g2, pos2) else {
        return unexpected_shapes(g1, g2);
    };

    let points = (ctx.request.enable_nearest_points && dist > 0.0).then_some(points);
    let _ = result.update(dist, (g1.shape_type(), g2.shape_type()), points);
    dist
}

/// Distance routine between a support-mapped shape and a half-space.
pub fn dispatch_support_map_halfspace<S>(
    g1: &dyn Shape,
    pos1: &Isometry<Real>,
    g2: &dyn Shape,
    pos2: &Isometry<Real>,
    ctx: &DistanceContext<'_, S>,
    result: &mut DistanceResult,
) -> Real {
    let Some((dist, [on_plane, deepest])) = halfspace_support_map_world(g2, pos2, g1, pos1) else {
        return unexpected_shapes(g1, g2);
    };

    let points = (ctx.request.enable_nearest_points && dist > 0.0).then_some([deepest, on_plane]);
    let _ = result.update(dist, (g1.shape_type(), g2.shape_type()), points);
    dist
}

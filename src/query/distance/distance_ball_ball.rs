use crate::math::{Isometry, Point, Real};
use crate::query::distance::unexpected_shapes;
use crate::query::{DistanceContext, DistanceResult};
use crate::shape::{Ball, Shape};
use na::{self, ComplexField};

/// Distance between balls.
///
/// `center2` is the center of `b2` in the local-space of `b1`.
#[inline]
pub fn distance_ball_ball(b1: &Ball, center2: &Point<Real>, b2: &Ball) -> Real {
    let r1 = b1.radius;
    let r2 = b2.radius;
    let distance_squared = center2.coords.norm_squared();
    let sum_radius = r1 + r2;

    if distance_squared <= sum_radius * sum_radius {
        0.0
    } else {
        ComplexField::sqrt(distance_squared) - sum_radius
    }
}

/// Distance routine between two balls.
pub fn dispatch_ball_ball<S>(
    g1: &dyn Shape,
    pos1: &Isometry<Real>,
    g2: &dyn Shape,
    pos2: &Isometry<Real>,
    ctx: &DistanceContext<'_, S>,
    result: &mut DistanceResult,
) -> Real {
    let (Some(b1), Some(b2)) = (g1.as_ball(), g2.as_ball()) else {
        return unexpected_shapes(g1, g2);
    };

    let c1 = Point::from(pos1.translation.vector);
    let c2 = Point::from(pos2.translation.vector);
    let dist = distance_ball_ball(b1, &Point::from(c2 - c1), b2);

    let points = if ctx.request.enable_nearest_points && dist > 0.0 {
        let dir = (c2 - c1) / na::distance(&c1, &c2);
        Some([c1 + dir * b1.radius, c2 - dir * b2.radius])
    } else {
        None
    };

    let _ = result.update(dist, (g1.shape_type(), g2.shape_type()), points);
    dist
}

use crate::math::{Isometry, Real};
use crate::query::distance::{distance_with_context, unexpected_shapes};
use crate::query::{DistanceContext, DistanceResult, UNKNOWN_DISTANCE};
use crate::shape::Shape;
use alloc::vec::Vec;
use ordered_float::OrderedFloat;

/// Distance routine between a compound shape and any other shape.
///
/// Each part of the compound is dispatched, with `g2`, through the same table. Parts are
/// visited by increasing distance between their AABB and the AABB of `g2`, and the
/// traversal stops as soon as this lower bound exceeds the smallest distance found.
/// Parts for which no routine is registered are skipped.
pub fn dispatch_composite_shape_shape<S>(
    g1: &dyn Shape,
    pos1: &Isometry<Real>,
    g2: &dyn Shape,
    pos2: &Isometry<Real>,
    ctx: &DistanceContext<'_, S>,
    result: &mut DistanceResult,
) -> Real {
    let Some(compound) = g1.as_compound() else {
        return unexpected_shapes(g1, g2);
    };

    let aabb2 = g2.compute_aabb(pos2);
    let mut candidates: Vec<_> = compound
        .shapes()
        .iter()
        .map(|(delta, part)| {
            let part_pos = pos1 * delta;
            let lower_bound = part.compute_aabb(&part_pos).distance_to_aabb(&aabb2);
            (OrderedFloat(lower_bound), part_pos, &**part)
        })
        .collect();
    candidates.sort_unstable_by_key(|(lower_bound, ..)| *lower_bound);

    let mut best = UNKNOWN_DISTANCE;

    for (lower_bound, part_pos, part) in &candidates {
        if lower_bound.0 >= best {
            break;
        }

        let dist = distance_with_context(part_pos, *part, pos2, g2, ctx, result);

        if dist < best {
            best = dist;
            if best == 0.0 {
                break;
            }
        }
    }

    best
}

//! Implementation details of the `distance` function.

pub use self::distance::{
    distance, distance_with_context, distance_with_matrix, distance_with_solver,
};
pub(crate) use self::distance::unexpected_shapes;
pub use self::distance_ball_ball::{dispatch_ball_ball, distance_ball_ball};
pub use self::distance_composite_shape_shape::dispatch_composite_shape_shape;
pub use self::distance_halfspace_halfspace::{
    dispatch_halfspace_halfspace, distance_halfspace_halfspace,
};
pub use self::distance_halfspace_support_map::{
    dispatch_halfspace_support_map, dispatch_support_map_halfspace,
    distance_halfspace_support_map,
};
pub use self::distance_support_map_support_map::dispatch_support_map_support_map;

#[allow(clippy::module_inception)]
mod distance;
mod distance_ball_ball;
mod distance_composite_shape_shape;
mod distance_halfspace_halfspace;
mod distance_halfspace_support_map;
mod distance_support_map_support_map;

//! Shapes supported by nphase.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::compound::{Compound, CompoundError};
pub use self::cuboid::Cuboid;
pub use self::half_space::HalfSpace;
pub use self::shape::{
    ObjectKind, Shape, ShapeType, TypedShape, MAX_CUSTOM_SHAPE_TYPES, NUM_SHAPE_TYPES,
};
pub use self::shared_shape::{LocalBounds, SharedShape};
pub use self::support_map::SupportMap;

mod ball;
mod capsule;
mod compound;
mod cuboid;
mod half_space;
#[allow(clippy::module_inception)]
mod shape;
mod shared_shape;
mod support_map;

//! Bounding volumes and their fitting to shapes.

pub use self::aabb::Aabb;
pub use self::bounding_sphere::BoundingSphere;
pub use self::bounding_volume::BoundingVolume;
pub use self::bv_ball::ball_aabb;
pub use self::compute_bv::{compute_typed_bv, BvType, ComputeBv, TypedBv};
pub use self::kdop::{Kdop, Kdop16, Kdop18, Kdop24};
pub use self::kios::{Kios, MAX_KIOS_SPHERES};
pub use self::obb::Obb;
pub use self::rss::{ObbRss, Rss};

mod aabb;
mod bounding_sphere;
#[allow(clippy::module_inception)]
mod bounding_volume;
mod bv_ball;
mod bv_capsule;
mod bv_compound;
mod bv_cuboid;
mod bv_halfspace;
mod compute_bv;
mod kdop;
mod kios;
mod obb;
mod rss;

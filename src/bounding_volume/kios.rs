//! Intersection of spheres and of an oriented box.

use crate::bounding_volume::{BoundingSphere, Obb};
use crate::math::{Point, Real};
use arrayvec::ArrayVec;

/// The maximum number of spheres of a [`Kios`].
pub const MAX_KIOS_SPHERES: usize = 5;

/// A bounding volume made of the intersection of up to five spheres and of an oriented box.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct Kios {
    /// The spheres of this volume.
    pub spheres: ArrayVec<BoundingSphere, MAX_KIOS_SPHERES>,
    /// The oriented box of this volume.
    pub obb: Obb,
}

impl Kios {
    /// A volume made of a single sphere and of a box.
    pub fn new(sphere: BoundingSphere, obb: Obb) -> Self {
        let mut spheres = ArrayVec::new();
        spheres.push(sphere);
        Self { spheres, obb }
    }

    /// Does this volume contain a point expressed in the same coordinate frame as `self`?
    ///
    /// The point must lie inside of every sphere and inside of the box.
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        self.spheres.iter().all(|s| s.contains_local_point(point))
            && self.obb.contains_local_point(point)
    }
}

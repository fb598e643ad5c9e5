//! Bounding sphere.

use crate::math::{Isometry, Point, Real};
use na;
use num::Bounded;

/// A Bounding Sphere.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of the bounding sphere.
    pub center: Point<Real>,
    /// The radius of the bounding sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// A sphere centered at `center` with an unbounded radius.
    pub fn new_unbounded(center: Point<Real>) -> BoundingSphere {
        BoundingSphere::new(center, Real::max_value())
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Transforms this bounding sphere by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::new(m * self.center, self.radius)
    }

    /// Does this sphere contain a point expressed in the same coordinate frame as `self`?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        na::distance(&self.center, point) <= self.radius
    }
}

//! Axis Aligned Bounding Box.

use crate::bounding_volume::{BoundingSphere, BoundingVolume};
use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::utils::IsometryOps;
use approx::{AbsDiffEq, RelativeEq};
use na;
use num::Bounded;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is the simplest bounding volume, defined by its minimum and maximum corners.
/// Faces that do not bound anything are placed at `±Real::MAX`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with `mins` components set to `Real::max_values` and `maxs`
    /// components set to `-Real::max_values`.
    ///
    /// This is often used as the initial values of some AABB merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::max_value()).into(),
            Vector::repeat(-Real::max_value()).into(),
        )
    }

    /// Creates the AABB covering the whole space.
    #[inline]
    pub fn new_unbounded() -> Self {
        Self::new(
            Vector::repeat(-Real::max_value()).into(),
            Vector::repeat(Real::max_value()).into(),
        )
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this AABB.
    ///
    /// Each bound is halved before subtraction so unbounded faces don't overflow.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.maxs.coords * 0.5 - self.mins.coords * 0.5
    }

    /// Computes the AABB bounding `self` transformed by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        let ls_center = self.center();
        let center = m * ls_center;
        let ws_half_extents = m.absolute_transform_vector(&self.half_extents());

        Aabb::new(center + (-ws_half_extents), center + ws_half_extents)
    }

    /// The smallest bounding sphere containing this AABB.
    #[inline]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        let center = self.center();
        let radius = self.half_extents().norm();
        BoundingSphere::new(center, radius)
    }

    /// Does this AABB contains a point expressed in the same coordinate frame as `self`?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Computes the distance between `self` and `other`, zero if they overlap.
    #[inline]
    pub fn distance_to_aabb(&self, other: &Aabb) -> Real {
        (self.mins - other.maxs)
            .sup(&(other.mins - self.maxs))
            .sup(&Vector::zeros())
            .norm()
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }
}

impl AbsDiffEq for Aabb {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.mins.abs_diff_eq(&other.mins, epsilon) && self.maxs.abs_diff_eq(&other.maxs, epsilon)
    }
}

impl RelativeEq for Aabb {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.mins.relative_eq(&other.mins, epsilon, max_relative)
            && self.maxs.relative_eq(&other.maxs, epsilon, max_relative)
    }
}

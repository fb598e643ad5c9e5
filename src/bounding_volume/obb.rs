//! Oriented Bounding Box.

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Matrix, Point, Real, Vector};
use num::Bounded;

/// An Oriented Bounding Box.
///
/// The columns of `axes` are the (orthonormal) box axes expressed in the frame the
/// box lives in.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Obb {
    /// The center of the box.
    pub center: Point<Real>,
    /// The box axes, one per column.
    pub axes: Matrix<Real>,
    /// The half-extents of the box along each of its axes.
    pub half_extents: Vector<Real>,
}

impl Obb {
    /// Creates a new oriented box.
    #[inline]
    pub fn new(center: Point<Real>, axes: Matrix<Real>, half_extents: Vector<Real>) -> Self {
        Self {
            center,
            axes,
            half_extents,
        }
    }

    /// The box covering the whole space: identity axes, zero center, unbounded half-extents.
    #[inline]
    pub fn new_unbounded() -> Self {
        Self::new(
            Point::origin(),
            Matrix::identity(),
            Vector::repeat(Real::max_value()),
        )
    }

    /// The box obtained by applying the transform `pos` to a local-space AABB.
    #[inline]
    pub fn from_local_aabb(pos: &Isometry<Real>, aabb: &Aabb) -> Self {
        Self::new(
            pos * aabb.center(),
            pos.rotation.to_rotation_matrix().into_inner(),
            aabb.half_extents(),
        )
    }

    /// Transforms this box by `pos`.
    #[inline]
    pub fn transform_by(&self, pos: &Isometry<Real>) -> Self {
        Self::new(
            pos * self.center,
            pos.rotation.to_rotation_matrix().into_inner() * self.axes,
            self.half_extents,
        )
    }

    /// Expresses `point` in the frame of the box axes, relative to its center.
    #[inline]
    pub fn to_box_frame(&self, point: &Point<Real>) -> Vector<Real> {
        self.axes.tr_mul(&(point - self.center))
    }

    /// Does this box contain a point expressed in the same coordinate frame as `self`?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        let local = self.to_box_frame(point);
        local
            .iter()
            .zip(self.half_extents.iter())
            .all(|(x, he)| x.abs() <= *he)
    }
}

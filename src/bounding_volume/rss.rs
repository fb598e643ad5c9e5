//! Rectangle Swept Sphere.

use crate::bounding_volume::{Aabb, Obb};
use crate::math::{Isometry, Matrix, Point, Real, Vector};
use crate::utils::WBasis;
use num::Bounded;

/// A Rectangle Swept Sphere: the set of points closer than `radius` to a rectangle.
///
/// The rectangle is centered at `center`, spans `lengths[0]` along the first column of `axes`
/// and `lengths[1]` along the second one. The third column is the rectangle normal.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Rss {
    /// The center of the rectangle.
    pub center: Point<Real>,
    /// The rectangle axes, one per column.
    pub axes: Matrix<Real>,
    /// The side lengths of the rectangle.
    pub lengths: [Real; 2],
    /// The radius of the swept sphere.
    pub radius: Real,
}

impl Rss {
    /// Creates a new rectangle swept sphere.
    #[inline]
    pub fn new(center: Point<Real>, axes: Matrix<Real>, lengths: [Real; 2], radius: Real) -> Self {
        Self {
            center,
            axes,
            lengths,
            radius,
        }
    }

    /// The volume covering the whole space: identity axes, zero center, unbounded side
    /// lengths and radius.
    #[inline]
    pub fn new_unbounded() -> Self {
        Self::new(
            Point::origin(),
            Matrix::identity(),
            [Real::max_value(); 2],
            Real::max_value(),
        )
    }

    /// The volume of a segment swept by a sphere of radius `radius`.
    pub fn from_segment(a: &Point<Real>, b: &Point<Real>, radius: Real) -> Self {
        let center = na::center(a, b);
        let dir = b - a;
        let length = dir.norm();

        let axes = if length > 0.0 {
            let dir = dir / length;
            let [u, v] = dir.orthonormal_basis();
            Matrix::from_columns(&[dir, u, v])
        } else {
            Matrix::identity()
        };

        Self::new(center, axes, [length, 0.0], radius)
    }

    /// The volume enclosing a local-space AABB transformed by `pos`.
    ///
    /// The rectangle spans the two largest extents of the box, and the sphere sweeps its
    /// smallest one.
    pub fn from_local_aabb(pos: &Isometry<Real>, aabb: &Aabb) -> Self {
        let half_extents = aabb.half_extents();
        let k = half_extents.imin();
        let (i, j) = ((k + 1) % 3, (k + 2) % 3);
        let rot = pos.rotation.to_rotation_matrix().into_inner();
        let axes = Matrix::from_columns(&[rot.column(i), rot.column(j), rot.column(k)]);

        Self::new(
            pos * aabb.center(),
            axes,
            [half_extents[i] * 2.0, half_extents[j] * 2.0],
            half_extents[k],
        )
    }

    /// Does this volume contain a point expressed in the same coordinate frame as `self`?
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        let local = self.axes.tr_mul(&(point - self.center));
        let hx = self.lengths[0] * 0.5;
        let hy = self.lengths[1] * 0.5;
        let on_rect = Vector::new(local.x.clamp(-hx, hx), local.y.clamp(-hy, hy), 0.0);
        (local - on_rect).norm() <= self.radius
    }
}

/// An oriented box and a rectangle swept sphere fitted independently to the same shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct ObbRss {
    /// The oriented box.
    pub obb: Obb,
    /// The rectangle swept sphere.
    pub rss: Rss,
}

impl ObbRss {
    /// Does this volume contain a point expressed in the same coordinate frame as `self`?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        self.obb.contains_local_point(point) && self.rss.contains_local_point(point)
    }
}

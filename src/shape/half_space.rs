//! HalfSpace shape delimited by a plane with an arbitrary offset.
use crate::math::{Isometry, Point, Real, Vector};
use approx::{AbsDiffEq, RelativeEq};
use na::Unit;

/// A half-space delimited by an infinite plane.
///
/// The boundary plane is the set of points `x` such that `normal · x = offset`.
/// Points with `normal · x < offset` are inside of the half-space, points with
/// `normal · x > offset` are outside of it.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct HalfSpace {
    /// The halfspace planar boundary's outward normal.
    pub normal: Unit<Vector<Real>>,
    /// The signed distance from the origin to the boundary plane, along `normal`.
    pub offset: Real,
}

impl Default for HalfSpace {
    /// The half-space `x <= 0`.
    fn default() -> Self {
        HalfSpace {
            normal: Vector::x_axis(),
            offset: 0.0,
        }
    }
}

impl HalfSpace {
    /// Builds a new halfspace from its outward normal and offset.
    ///
    /// The normal does not need to be unit-length: both `normal` and `offset` are
    /// divided by its norm. A zero normal silently yields the default half-space
    /// (normal `(1, 0, 0)` and offset `0`); check the input beforehand if this
    /// substitution is not acceptable.
    #[inline]
    pub fn new(normal: Vector<Real>, offset: Real) -> HalfSpace {
        match Unit::try_new_and_get(normal, 0.0) {
            Some((normal, length)) => HalfSpace {
                normal,
                offset: offset / length,
            },
            None => HalfSpace::default(),
        }
    }

    /// Builds a new halfspace from an already normalized outward normal and its offset.
    #[inline]
    pub fn from_unit_normal(normal: Unit<Vector<Real>>, offset: Real) -> HalfSpace {
        HalfSpace { normal, offset }
    }

    /// Builds the half-space `a * x + b * y + c * z <= d`.
    ///
    /// The coefficients are normalized the same way as with [`HalfSpace::new`].
    #[inline]
    pub fn from_coefficients(a: Real, b: Real, c: Real, d: Real) -> HalfSpace {
        Self::new(Vector::new(a, b, c), d)
    }

    /// The signed distance from `pt` to the boundary plane.
    ///
    /// Positive outside of the half-space, negative inside, zero on the plane.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.offset
    }

    /// The unsigned distance from `pt` to the boundary plane.
    #[inline]
    pub fn distance(&self, pt: &Point<Real>) -> Real {
        self.signed_distance(pt).abs()
    }

    /// Applies the rigid transformation `pos` to this half-space.
    ///
    /// With `x' = R x + T`, the plane `n · x = d` becomes `n' · x' = d'` with
    /// `n' = R n` and `d' = d + n' · T`. This only holds because `R` is a rotation.
    #[inline]
    pub fn transform_by(&self, pos: &Isometry<Real>) -> HalfSpace {
        let normal = pos.rotation * self.normal;
        let offset = self.offset + normal.dot(&pos.translation.vector);
        HalfSpace { normal, offset }
    }

    /// A point of the boundary plane: the projection of the origin onto it.
    #[inline]
    pub fn plane_point(&self) -> Point<Real> {
        Point::from(*self.normal * self.offset)
    }
}

impl AbsDiffEq for HalfSpace {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.normal.abs_diff_eq(&other.normal, epsilon)
            && self.offset.abs_diff_eq(&other.offset, epsilon)
    }
}

impl RelativeEq for HalfSpace {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.normal.relative_eq(&other.normal, epsilon, max_relative)
            && self.offset.relative_eq(&other.offset, epsilon, max_relative)
    }
}

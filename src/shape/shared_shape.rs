use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{Ball, Capsule, Compound, CompoundError, Cuboid, HalfSpace, Shape, TypedShape};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

/// Bounds of a shape, expressed in its local-space, cached when its geometry is established.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct LocalBounds {
    /// The local-space AABB of the shape.
    pub aabb: Aabb,
    /// The center of `aabb`.
    pub center: Point<Real>,
    /// The distance between `center` and the minimum corner of `aabb`.
    pub radius: Real,
}

impl LocalBounds {
    /// Derives the cached center and radius from a local-space AABB.
    pub fn from_aabb(aabb: Aabb) -> Self {
        let center = aabb.center();
        let radius = (aabb.mins - center).norm();
        Self {
            aabb,
            center,
            radius,
        }
    }
}

/// A reference-counted, shareable geometric shape, together with its cached local bounds.
///
/// Cloning a `SharedShape` only increments a reference count. The bounds are computed once,
/// by [`SharedShape::new`] and [`SharedShape::set`], and never recomputed by queries.
#[derive(Clone)]
pub struct SharedShape {
    shape: Arc<dyn Shape>,
    bounds: LocalBounds,
}

impl Deref for SharedShape {
    type Target = dyn Shape;
    fn deref(&self) -> &dyn Shape {
        &*self.shape
    }
}

impl AsRef<dyn Shape> for SharedShape {
    fn as_ref(&self) -> &dyn Shape {
        &*self.shape
    }
}

impl fmt::Debug for SharedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let typed_shape: TypedShape = (*self.shape).as_typed_shape();
        write!(f, "SharedShape ( Arc<{typed_shape:?}> )")
    }
}

impl SharedShape {
    /// Wraps any shape type into a `SharedShape`.
    ///
    /// ```
    /// # #[cfg(all(feature = "dim3", feature = "f32"))] {
    /// # use nphase3d::shape::{SharedShape, Ball};
    /// let shared = SharedShape::new(Ball::new(1.0));
    /// assert_eq!(shared.local_bounds().center, nphase3d::math::Point::origin());
    /// # }
    /// ```
    pub fn new(shape: impl Shape) -> Self {
        let bounds = shape.compute_local_bounds();
        Self {
            shape: Arc::new(shape),
            bounds,
        }
    }

    /// Replaces the wrapped geometry and recomputes the cached bounds.
    pub fn set(&mut self, shape: impl Shape) {
        self.bounds = shape.compute_local_bounds();
        self.shape = Arc::new(shape);
    }

    /// The local bounds cached when the geometry was established.
    #[inline]
    pub fn local_bounds(&self) -> &LocalBounds {
        &self.bounds
    }

    /// The shared pointer to the wrapped shape.
    #[inline]
    pub fn shape(&self) -> &Arc<dyn Shape> {
        &self.shape
    }

    /// Initialize a ball shape defined by its radius.
    pub fn ball(radius: Real) -> Self {
        SharedShape::new(Ball::new(radius))
    }

    /// Initialize a cuboid shape defined by its half-extents.
    pub fn cuboid(hx: Real, hy: Real, hz: Real) -> Self {
        SharedShape::new(Cuboid::new(Vector::new(hx, hy, hz)))
    }

    /// Initialize a capsule shape from its endpoints and radius.
    pub fn capsule(a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        SharedShape::new(Capsule::new(a, b, radius))
    }

    /// Initialize a half-space from its outward normal and offset.
    pub fn halfspace(normal: Vector<Real>, offset: Real) -> Self {
        SharedShape::new(HalfSpace::new(normal, offset))
    }

    /// Initialize a compound shape defined by its subshapes.
    pub fn compound(shapes: Vec<(Isometry<Real>, SharedShape)>) -> Result<Self, CompoundError> {
        Compound::new(shapes).map(SharedShape::new)
    }
}

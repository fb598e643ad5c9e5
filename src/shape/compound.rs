//!
//! Shape composed from the union of primitives.
//!

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Isometry, Real};
use crate::shape::SharedShape;
use alloc::vec::Vec;

/// Errors raised while building a [`Compound`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum CompoundError {
    /// A compound must contain at least one shape.
    #[error("a compound shape must contain at least one shape")]
    Empty,
}

/// A compound shape with an aabb bounding volume.
///
/// A compound shape is a shape composed of the union of several simpler shape. Each part
/// has its own delta transformation to shift or rotate it with regard to the other parts.
/// Compound shapes are [`ObjectKind::Hierarchy`](crate::shape::ObjectKind::Hierarchy)
/// operands of the distance queries.
#[derive(Clone, Debug)]
pub struct Compound {
    shapes: Vec<(Isometry<Real>, SharedShape)>,
    aabbs: Vec<Aabb>,
    aabb: Aabb,
}

impl Compound {
    /// Builds a new compound shape from a collection of sub-shapes.
    ///
    /// Returns [`CompoundError::Empty`] if `shapes` is empty.
    pub fn new(shapes: Vec<(Isometry<Real>, SharedShape)>) -> Result<Compound, CompoundError> {
        if shapes.is_empty() {
            return Err(CompoundError::Empty);
        }

        let mut aabbs = Vec::with_capacity(shapes.len());
        let mut aabb = Aabb::new_invalid();

        for (delta, shape) in &shapes {
            let bv = shape.compute_aabb(delta);
            aabb.merge(&bv);
            aabbs.push(bv);
        }

        Ok(Compound {
            shapes,
            aabbs,
            aabb,
        })
    }

    /// The shapes of this compound shape.
    #[inline]
    pub fn shapes(&self) -> &[(Isometry<Real>, SharedShape)] {
        &self.shapes[..]
    }

    /// The AABB of this compound in its local-space.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The shapes AABBs, expressed in the local-space of this compound.
    #[inline]
    pub fn aabbs(&self) -> &[Aabb] {
        &self.aabbs[..]
    }
}

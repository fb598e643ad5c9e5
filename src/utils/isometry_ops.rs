use crate::math::{Isometry, Real, Vector};

/// Extra operations with isometries.
pub trait IsometryOps {
    /// Transform a vector by the absolute value of the rotation matrix of `self`.
    ///
    /// Applied to the half-extents of a box, this yields the half-extents of the
    /// axis-aligned box enclosing the rotated box.
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real>;
}

impl IsometryOps for Isometry<Real> {
    #[inline]
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.rotation.to_rotation_matrix().into_inner().abs() * *v
    }
}

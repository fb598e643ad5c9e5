//! Miscellaneous utilities.

use crate::math::{Real, Vector};

/// Trait to copy the sign of each component of one scalar/vector to another.
pub trait WSign<Rhs>: Sized {
    /// Copy the sign of each component of `self` to the corresponding component of `to`.
    fn copy_sign_to(self, to: Rhs) -> Rhs;
}

impl WSign<Real> for Real {
    #[inline]
    fn copy_sign_to(self, to: Real) -> Real {
        to.copysign(self)
    }
}

impl WSign<Vector<Real>> for Vector<Real> {
    #[inline]
    fn copy_sign_to(self, to: Vector<Real>) -> Vector<Real> {
        to.zip_map(&self, |t, s| s.copy_sign_to(t))
    }
}

/// Trait to compute the orthonormal basis of the orthogonal complement of a vector.
pub trait WBasis: Sized {
    /// The type of the array of orthonormal vectors.
    type Basis;
    /// Computes the vectors which, when combined with `self`, form an orthonormal basis.
    fn orthonormal_basis(self) -> Self::Basis;
}

impl WBasis for Vector<Real> {
    type Basis = [Vector<Real>; 2];
    // Branchless construction from Pixar's "Building an Orthonormal Basis, Revisited".
    // `self` must be normalized.
    fn orthonormal_basis(self) -> [Vector<Real>; 2] {
        let sign = self.z.copy_sign_to(1.0);
        let a = -1.0 / (sign + self.z);
        let b = self.x * self.y * a;

        [
            Vector::new(1.0 + sign * self.x * self.x * a, sign * b, -sign * self.x),
            Vector::new(b, sign + self.y * self.y * a, -self.y),
        ]
    }
}

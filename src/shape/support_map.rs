//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, Vector};
use na::Unit;

/// Traits of convex shapes representable by a support mapping function.
///
/// A support function associates a direction to the point of the shape which
/// maximizes its dot product with that direction.
pub trait SupportMap {
    /// Evaluates the support function of this shape.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.local_support_point` except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.local_support_point(dir.as_ref())
    }

    /// Evaluates the support function of this shape transformed by `transform`.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }

    /// Same as `self.support_point` except that `dir` is normalized.
    fn support_point_toward(
        &self,
        transform: &Isometry<Real>,
        dir: &Unit<Vector<Real>>,
    ) -> Point<Real> {
        let local_dir = Unit::new_unchecked(transform.inverse_transform_vector(dir));
        transform * self.local_support_point_toward(&local_dir)
    }

    /// The value of the support function: the largest dot product between `dir`
    /// and a point of this shape transformed by `transform`.
    ///
    /// `dir` does not need to be normalized, the result is then scaled by its norm.
    fn support_distance(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Real {
        dir.dot(&self.support_point(transform, dir).coords)
    }
}

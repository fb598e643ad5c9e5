use crate::bounding_volume::{Aabb, BoundingSphere, ComputeBv, Kdop, Obb, Rss};
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Ball;

/// Computes the Axis-Aligned Bounding Box of a ball.
#[inline]
pub fn ball_aabb(center: &Point<Real>, radius: Real) -> Aabb {
    Aabb::new(
        *center + Vector::repeat(-radius),
        *center + Vector::repeat(radius),
    )
}

impl Ball {
    /// Computes the local-space Axis-Aligned Bounding Box of this ball.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        ball_aabb(&Point::origin(), self.radius)
    }
}

impl ComputeBv<Aabb> for Ball {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> Aabb {
        ball_aabb(&Point::from(pos.translation.vector), self.radius)
    }
}

impl ComputeBv<BoundingSphere> for Ball {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::new(Point::from(pos.translation.vector), self.radius)
    }
}

impl ComputeBv<Obb> for Ball {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> Obb {
        Obb::new(
            Point::from(pos.translation.vector),
            pos.rotation.to_rotation_matrix().into_inner(),
            Vector::repeat(self.radius),
        )
    }
}

impl ComputeBv<Rss> for Ball {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> Rss {
        Rss::new(
            Point::from(pos.translation.vector),
            pos.rotation.to_rotation_matrix().into_inner(),
            [0.0; 2],
            self.radius,
        )
    }
}

impl<const N: usize> ComputeBv<Kdop<N>> for Ball {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> Kdop<N> {
        Kdop::from_support_map(pos, self)
    }
}

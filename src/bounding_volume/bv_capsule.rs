use crate::bounding_volume::{Aabb, BoundingSphere, ComputeBv, Kdop, Obb, Rss};
use crate::math::{Isometry, Real, Vector};
use crate::shape::Capsule;

impl Capsule {
    /// Computes the local-space Axis-Aligned Bounding Box of this capsule.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let margin = Vector::repeat(self.radius);
        Aabb::new(
            self.a.inf(&self.b) - margin,
            self.b.sup(&self.a) + margin,
        )
    }
}

impl ComputeBv<Aabb> for Capsule {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> Aabb {
        self.transform_by(pos).local_aabb()
    }
}

impl ComputeBv<BoundingSphere> for Capsule {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::new(pos * self.center(), self.half_height() + self.radius)
    }
}

impl ComputeBv<Obb> for Capsule {
    /// The box aligned with the capsule axis.
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> Obb {
        let rss: Rss = self.compute_bv(pos);
        Obb::new(
            rss.center,
            rss.axes,
            Vector::new(
                self.half_height() + self.radius,
                self.radius,
                self.radius,
            ),
        )
    }
}

impl ComputeBv<Rss> for Capsule {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> Rss {
        Rss::from_segment(&(pos * self.a), &(pos * self.b), self.radius)
    }
}

impl<const N: usize> ComputeBv<Kdop<N>> for Capsule {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> Kdop<N> {
        Kdop::from_support_map(pos, self)
    }
}

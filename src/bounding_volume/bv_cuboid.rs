use crate::bounding_volume::{Aabb, BoundingSphere, ComputeBv, Kdop, Obb, Rss};
use crate::math::{Isometry, Point, Real};
use crate::shape::Cuboid;
use crate::utils::IsometryOps;

impl Cuboid {
    /// Computes the local-space Axis-Aligned Bounding Box of this cuboid.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let half_extents = Point::from(self.half_extents);

        Aabb::new(-half_extents, half_extents)
    }
}

impl ComputeBv<Aabb> for Cuboid {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> Aabb {
        let center = Point::from(pos.translation.vector);
        let ws_half_extents = pos.absolute_transform_vector(&self.half_extents);

        Aabb::from_half_extents(center, ws_half_extents)
    }
}

impl ComputeBv<BoundingSphere> for Cuboid {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::new(
            Point::from(pos.translation.vector),
            self.half_extents.norm(),
        )
    }
}

impl ComputeBv<Obb> for Cuboid {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> Obb {
        Obb::from_local_aabb(pos, &self.local_aabb())
    }
}

impl ComputeBv<Rss> for Cuboid {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> Rss {
        Rss::from_local_aabb(pos, &self.local_aabb())
    }
}

impl<const N: usize> ComputeBv<Kdop<N>> for Cuboid {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> Kdop<N> {
        Kdop::from_support_map(pos, self)
    }
}

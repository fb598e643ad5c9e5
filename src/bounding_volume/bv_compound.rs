use crate::bounding_volume::{Aabb, BoundingSphere, BoundingVolume, ComputeBv, Obb, Rss};
use crate::math::{Isometry, Real};
use crate::shape::Compound;

impl ComputeBv<Aabb> for Compound {
    /// Merges the world-space AABBs of the parts.
    fn compute_bv(&self, pos: &Isometry<Real>) -> Aabb {
        let mut aabb = Aabb::new_invalid();
        for (delta, part) in self.shapes() {
            aabb.merge(&part.compute_aabb(&(pos * delta)));
        }
        aabb
    }
}

impl ComputeBv<BoundingSphere> for Compound {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> BoundingSphere {
        self.local_aabb().bounding_sphere().transform_by(pos)
    }
}

impl ComputeBv<Obb> for Compound {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> Obb {
        Obb::from_local_aabb(pos, self.local_aabb())
    }
}

impl ComputeBv<Rss> for Compound {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> Rss {
        Rss::from_local_aabb(pos, self.local_aabb())
    }
}

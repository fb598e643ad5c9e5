//! Bounding volumes of half-spaces.
//!
//! A half-space is unbounded: most of its bounding volumes cover the whole space. Only the
//! faces of an AABB or the slabs of a k-DOP exactly parallel to the boundary plane can be
//! tightened. The alignment tests below are exact floating-point comparisons: a normal that
//! is only approximately aligned gets the universal bound.

use crate::bounding_volume::{Aabb, BoundingSphere, ComputeBv, Kdop, Obb, Rss};
use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::shape::HalfSpace;

impl ComputeBv<Aabb> for HalfSpace {
    fn compute_bv(&self, pos: &Isometry<Real>) -> Aabb {
        let hs = self.transform_by(pos);
        let n = &hs.normal;
        let mut aabb = Aabb::new_unbounded();

        let zeros = n.iter().filter(|c| **c == 0.0).count();
        if zeros == DIM - 1 {
            if let Some(i) = n.iter().position(|c| *c != 0.0) {
                if n[i] < 0.0 {
                    aabb.mins[i] = -hs.offset;
                } else {
                    aabb.maxs[i] = hs.offset;
                }
            }
        }

        aabb
    }
}

impl ComputeBv<BoundingSphere> for HalfSpace {
    #[inline]
    fn compute_bv(&self, _: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::new_unbounded(Point::origin())
    }
}

impl ComputeBv<Obb> for HalfSpace {
    #[inline]
    fn compute_bv(&self, _: &Isometry<Real>) -> Obb {
        Obb::new_unbounded()
    }
}

impl ComputeBv<Rss> for HalfSpace {
    #[inline]
    fn compute_bv(&self, _: &Isometry<Real>) -> Rss {
        Rss::new_unbounded()
    }
}

impl<const N: usize> ComputeBv<Kdop<N>> for HalfSpace {
    /// Tightens the first slab, in priority order, exactly parallel to the boundary plane.
    ///
    /// With `v` a slab direction made of `m` nonzero `±1` components, the normal is parallel
    /// to `v` iff `n = s * v` for some `s`. The half-space then satisfies
    /// `s * dot(v, x) <= d`, that is `dot(v, x) <= s * d * m` if `s > 0` (since
    /// `s * s * m = 1`), and `dot(v, x) >= s * d * m` otherwise.
    fn compute_bv(&self, pos: &Isometry<Real>) -> Kdop<N> {
        let hs = self.transform_by(pos);
        let mut kdop = Kdop::new_unbounded();

        for i in 0..Kdop::<N>::NUM_DIRECTIONS {
            let dir = Kdop::<N>::direction(i);
            if let Some(s) = parallel_factor(&hs, &dir) {
                let nonzeros = dir.iter().filter(|c| **c != 0.0).count() as Real;
                let bound = s * hs.offset * nonzeros;

                if s > 0.0 {
                    kdop.dist[Kdop::<N>::NUM_DIRECTIONS + i] = bound;
                } else {
                    kdop.dist[i] = bound;
                }
                break;
            }
        }

        kdop
    }
}

/// Returns `s` such that the normal of `hs` is exactly `s * dir`, if it exists.
///
/// `dir` components are `0` or `±1`, so `s` is read from its first nonzero component.
fn parallel_factor(hs: &HalfSpace, dir: &Vector<Real>) -> Option<Real> {
    let n = &hs.normal;
    let j0 = dir.iter().position(|c| *c != 0.0)?;
    let s = n[j0] * dir[j0];

    let parallel = (0..DIM).all(|j| {
        if dir[j] == 0.0 {
            n[j] == 0.0
        } else {
            n[j] * dir[j] == s
        }
    });

    parallel.then_some(s)
}

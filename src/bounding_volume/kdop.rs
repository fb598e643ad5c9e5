//! Discrete oriented polytopes.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::SupportMap;
use num::Bounded;

/// The directions of the slabs of a [`Kdop`], in priority order.
///
/// A `Kdop<N>` uses the first `N / 2` of them: the three axes, then the diagonals
/// combining two axes, then (for `N = 24`) the diagonals combining three axes.
const DIRECTIONS: [[Real; 3]; 12] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [1.0, -1.0, 0.0],
    [1.0, 0.0, -1.0],
    [0.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// A k-direction discrete oriented polytope, the intersection of `N / 2` slabs.
///
/// Entry `i < N / 2` is the minimum of `dot(v_i, x)` over the bounded region, and entry
/// `N / 2 + i` is its maximum, with `v_i` the (non-normalized) `i`-th slab direction.
/// Unbounded entries are set to `±Real::MAX`. Only `N ∈ {16, 18, 24}` is supported.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Kdop<const N: usize> {
    /// The signed support distances of the slabs: minimums first, then maximums.
    pub dist: [Real; N],
}

/// A `Kdop` with 8 slabs.
pub type Kdop16 = Kdop<16>;
/// A `Kdop` with 9 slabs.
pub type Kdop18 = Kdop<18>;
/// A `Kdop` with 12 slabs.
pub type Kdop24 = Kdop<24>;

impl<const N: usize> Kdop<N> {
    const SUPPORTED: () = assert!(
        N == 16 || N == 18 || N == 24,
        "Only 16, 18 and 24-DOPs are supported."
    );

    /// The number of slabs of this polytope.
    pub const NUM_DIRECTIONS: usize = N / 2;

    /// The direction of the `i`-th slab.
    #[inline]
    pub fn direction(i: usize) -> Vector<Real> {
        Vector::from(DIRECTIONS[i])
    }

    /// The polytope covering the whole space.
    pub fn new_unbounded() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::SUPPORTED;
        let mut dist = [Real::max_value(); N];
        for d in &mut dist[..Self::NUM_DIRECTIONS] {
            *d = -Real::max_value();
        }
        Self { dist }
    }

    /// The polytope bounding a support-mapped shape transformed by `pos`.
    pub fn from_support_map(pos: &Isometry<Real>, shape: &(impl SupportMap + ?Sized)) -> Self {
        let mut result = Self::new_unbounded();
        for i in 0..Self::NUM_DIRECTIONS {
            let dir = Self::direction(i);
            result.dist[i] = -shape.support_distance(pos, &-dir);
            result.dist[Self::NUM_DIRECTIONS + i] = shape.support_distance(pos, &dir);
        }
        result
    }

    /// The lower bound of the `i`-th slab.
    #[inline]
    pub fn min(&self, i: usize) -> Real {
        self.dist[i]
    }

    /// The upper bound of the `i`-th slab.
    #[inline]
    pub fn max(&self, i: usize) -> Real {
        self.dist[Self::NUM_DIRECTIONS + i]
    }

    /// Does this polytope contain a point expressed in the same coordinate frame as `self`?
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        (0..Self::NUM_DIRECTIONS).all(|i| {
            let proj = Self::direction(i).dot(&point.coords);
            proj >= self.min(i) && proj <= self.max(i)
        })
    }
}

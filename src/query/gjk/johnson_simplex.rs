use crate::math::{Matrix, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::CSOPoint;
use arrayvec::ArrayVec;

/// Subsets with a Gram determinant smaller than this fraction of its diagonal product are
/// considered degenerate.
const DEGENERACY_THRESHOLD: Real = DEFAULT_EPSILON * 100.0;

/// A simplex of at most four CSO points, reduced with Johnson's distance sub-algorithm.
///
/// Every subset of the simplex vertices is tested: the affine projection of the origin on
/// the subset hull is kept if all its barycentric coordinates are non-negative, and the
/// subset with the closest valid projection replaces the simplex.
#[derive(Clone, Debug)]
pub struct JohnsonSimplex {
    points: ArrayVec<CSOPoint, 4>,
    bcoords: ArrayVec<Real, 4>,
}

impl JohnsonSimplex {
    /// Creates a simplex made of a single point.
    pub fn new(pt: CSOPoint) -> Self {
        let mut res = JohnsonSimplex {
            points: ArrayVec::new(),
            bcoords: ArrayVec::new(),
        };
        res.reset(pt);
        res
    }

    /// Resets this simplex to a single point.
    pub fn reset(&mut self, pt: CSOPoint) {
        self.points.clear();
        self.bcoords.clear();
        self.points.push(pt);
        self.bcoords.push(1.0);
    }

    /// The dimension of the smallest subspace that can contain this simplex.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.points.len() - 1
    }

    /// Checks if this simplex has a vertex equal to `pt`.
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.points.iter().any(|p| p.point == *pt)
    }

    /// Adds a point to this simplex.
    ///
    /// Returns `false` if the simplex is already a tetrahedron or if `pt` is one of its
    /// vertices: the point cannot improve the projection.
    pub fn add_point(&mut self, pt: CSOPoint) -> bool {
        if self.points.is_full() || self.contains_point(&pt.point) {
            return false;
        }

        self.points.push(pt);
        self.bcoords.push(0.0);
        true
    }

    /// Projects the origin on the convex hull of this simplex, and removes the vertices that
    /// don't contribute to the projection.
    pub fn project_origin_and_reduce(&mut self) -> Point<Real> {
        let n = self.points.len();
        let mut best_subset = ArrayVec::<usize, 4>::new();
        best_subset.push(0);
        let mut best_bcoords = ArrayVec::<Real, 4>::new();
        best_bcoords.push(1.0);
        let mut best_sq_dist = self.points[0].point.coords.norm_squared();

        for mask in 2u8..(1 << n) {
            let subset: ArrayVec<usize, 4> = (0..n).filter(|i| mask & (1 << i) != 0).collect();

            if let Some(bcoords) = self.affine_projection(&subset) {
                if bcoords.iter().any(|b| *b < 0.0) {
                    continue;
                }

                let sq_dist = self.combination(&subset, &bcoords).norm_squared();
                if sq_dist < best_sq_dist {
                    best_sq_dist = sq_dist;
                    best_subset = subset;
                    best_bcoords = bcoords;
                }
            }
        }

        let proj = self.combination(&best_subset, &best_bcoords);
        let mut points = ArrayVec::new();
        let mut bcoords = ArrayVec::new();
        for (i, b) in best_subset.iter().zip(best_bcoords.iter()) {
            if *b > 0.0 {
                points.push(self.points[*i]);
                bcoords.push(*b);
            }
        }
        self.points = points;
        self.bcoords = bcoords;

        Point::from(proj)
    }

    /// The points of both shapes realizing the current projection of the origin.
    pub fn closest_points(&self) -> (Point<Real>, Point<Real>) {
        let mut p1 = Vector::zeros();
        let mut p2 = Vector::zeros();

        for (pt, b) in self.points.iter().zip(self.bcoords.iter()) {
            p1 += pt.orig1.coords * *b;
            p2 += pt.orig2.coords * *b;
        }

        (Point::from(p1), Point::from(p2))
    }

    fn combination(&self, subset: &[usize], bcoords: &[Real]) -> Vector<Real> {
        subset
            .iter()
            .zip(bcoords.iter())
            .fold(Vector::zeros(), |acc, (i, b)| {
                acc + self.points[*i].point.coords * *b
            })
    }

    /// Barycentric coordinates of the projection of the origin on the affine hull of `subset`.
    ///
    /// Returns `None` if the subset is degenerate.
    fn affine_projection(&self, subset: &[usize]) -> Option<ArrayVec<Real, 4>> {
        let p0 = self.points[subset[0]].point.coords;
        let edges: ArrayVec<Vector<Real>, 3> = subset[1..]
            .iter()
            .map(|i| self.points[*i].point.coords - p0)
            .collect();
        let m = edges.len();

        // Unused rows stay at identity so the solve only involves the leading block.
        let mut gram = Matrix::identity();
        let mut rhs = Vector::zeros();
        let mut diag_product = 1.0;

        for i in 0..m {
            rhs[i] = -edges[i].dot(&p0);
            for j in 0..m {
                gram[(i, j)] = edges[i].dot(&edges[j]);
            }
            diag_product *= gram[(i, i)];
        }

        if gram.determinant() <= diag_product * DEGENERACY_THRESHOLD {
            return None;
        }

        let mu = gram.try_inverse()? * rhs;
        let mut bcoords = ArrayVec::new();
        bcoords.push(1.0 - mu.iter().take(m).sum::<Real>());
        bcoords.extend(mu.iter().take(m).copied());
        Some(bcoords)
    }
}

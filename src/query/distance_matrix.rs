use crate::math::{Isometry, Real};
use crate::query::details;
use crate::query::{DispatchError, DistanceRequest, DistanceResult, NarrowPhaseSolver};
use crate::shape::{Shape, ShapeType, NUM_SHAPE_TYPES};

/// Everything a distance routine needs besides the two shapes and their positions.
pub struct DistanceContext<'a, S> {
    /// The dispatch table the routine was found in, used to dispatch sub-queries.
    pub matrix: &'a DistanceMatrix<S>,
    /// The convex solver.
    pub solver: &'a S,
    /// The parameters of the query.
    pub request: &'a DistanceRequest,
}

/// A distance routine registered for one pair of shape types.
///
/// The routine receives both shapes with their world-space positions, records its findings
/// in the `DistanceResult`, and returns the distance it computed.
pub type DistanceFn<S> = fn(
    &dyn Shape,
    &Isometry<Real>,
    &dyn Shape,
    &Isometry<Real>,
    &DistanceContext<'_, S>,
    &mut DistanceResult,
) -> Real;

/// A dense table of distance routines indexed by pairs of shape types.
///
/// The row is given by the type of the first shape and the column by the type of the second.
/// An empty cell means the pair is not supported.
pub struct DistanceMatrix<S> {
    table: [[Option<DistanceFn<S>>; NUM_SHAPE_TYPES]; NUM_SHAPE_TYPES],
}

static_assertions::assert_impl_all!(DistanceMatrix<crate::query::GjkSolver>: Send, Sync);
static_assertions::assert_impl_all!(DistanceMatrix<crate::query::GilbertSolver>: Send, Sync);

impl<S> Clone for DistanceMatrix<S> {
    fn clone(&self) -> Self {
        Self { table: self.table }
    }
}

impl<S: NarrowPhaseSolver> Default for DistanceMatrix<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> DistanceMatrix<S> {
    /// A table without any registered routine.
    pub fn empty() -> Self {
        Self {
            table: [[None; NUM_SHAPE_TYPES]; NUM_SHAPE_TYPES],
        }
    }

    /// Registers the routine computing the distance between shapes of types `t1` and `t2`.
    ///
    /// Only this order is registered: a routine for `(t2, t1)` has to be registered separately.
    pub fn register(
        &mut self,
        t1: ShapeType,
        t2: ShapeType,
        f: DistanceFn<S>,
    ) -> Result<(), DispatchError> {
        let i = t1.index().ok_or(DispatchError::UnindexableShapeType(t1))?;
        let j = t2.index().ok_or(DispatchError::UnindexableShapeType(t2))?;
        let cell = &mut self.table[i][j];

        if cell.is_some() {
            return Err(DispatchError::AlreadyRegistered(t1, t2));
        }

        *cell = Some(f);
        Ok(())
    }

    /// The routine registered for shapes of types `t1` and `t2`, if any.
    #[inline]
    pub fn get(&self, t1: ShapeType, t2: ShapeType) -> Option<DistanceFn<S>> {
        self.table[t1.index()?][t2.index()?]
    }

    /// Is there a routine registered for shapes of types `t1` and `t2`?
    #[inline]
    pub fn is_supported(&self, t1: ShapeType, t2: ShapeType) -> bool {
        self.get(t1, t2).is_some()
    }

    fn set(&mut self, t1: ShapeType, t2: ShapeType, f: DistanceFn<S>) {
        if let (Some(i), Some(j)) = (t1.index(), t2.index()) {
            self.table[i][j] = Some(f);
        }
    }
}

impl<S: NarrowPhaseSolver> DistanceMatrix<S> {
    /// A table with the routines of every built-in pair of shape types.
    pub fn new() -> Self {
        use ShapeType::*;

        let mut matrix = Self::empty();
        let convex = [Ball, Cuboid, Capsule];

        for t1 in convex {
            for t2 in convex {
                matrix.set(t1, t2, details::dispatch_support_map_support_map::<S>);
            }
            matrix.set(HalfSpace, t1, details::dispatch_halfspace_support_map::<S>);
            matrix.set(t1, HalfSpace, details::dispatch_support_map_halfspace::<S>);
        }

        matrix.set(Ball, Ball, details::dispatch_ball_ball::<S>);
        matrix.set(HalfSpace, HalfSpace, details::dispatch_halfspace_halfspace::<S>);

        for t2 in ShapeType::BUILTIN {
            matrix.set(Compound, t2, details::dispatch_composite_shape_shape::<S>);
        }

        matrix
    }
}

use crate::math::{Isometry, Real};
use crate::query::{
    DistanceContext, DistanceMatrix, DistanceRequest, DistanceResult, GilbertSolver, GjkSolver,
    NarrowPhaseSolver, SolverType, UNKNOWN_DISTANCE,
};
use crate::shape::{ObjectKind, Shape};

/// Computes the minimum distance separating two shapes.
///
/// The convex solver is selected by `request.solver_type`, and a new instance of it is created
/// for this query. The routine used is chosen by the types of both shapes. If no routine is
/// registered for them, a warning is logged and [`UNKNOWN_DISTANCE`] is returned.
///
/// Returns `0.0` if the objects are touching or penetrating.
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use nphase3d::math::Isometry;
/// use nphase3d::query::{self, DistanceRequest, DistanceResult};
/// use nphase3d::shape::Ball;
///
/// let ball = Ball::new(1.0);
/// let mut result = DistanceResult::new();
/// let dist = query::distance(
///     &Isometry::identity(),
///     &ball,
///     &Isometry::translation(5.0, 0.0, 0.0),
///     &ball,
///     &DistanceRequest::default(),
///     &mut result,
/// );
/// assert_eq!(dist, 3.0);
/// assert_eq!(result.min_distance, 3.0);
/// # }
/// ```
pub fn distance(
    pos1: &Isometry<Real>,
    g1: &dyn Shape,
    pos2: &Isometry<Real>,
    g2: &dyn Shape,
    request: &DistanceRequest,
    result: &mut DistanceResult,
) -> Real {
    match request.solver_type {
        SolverType::Gjk => {
            distance_with_solver::<GjkSolver>(pos1, g1, pos2, g2, None, request, result)
        }
        SolverType::Gilbert => {
            distance_with_solver::<GilbertSolver>(pos1, g1, pos2, g2, None, request, result)
        }
    }
}

/// Computes the minimum distance separating two shapes with the solver strategy `S`.
///
/// If `solver` is `None`, a default-initialized solver is used for this query only.
/// `request.solver_type` is ignored.
pub fn distance_with_solver<S: NarrowPhaseSolver>(
    pos1: &Isometry<Real>,
    g1: &dyn Shape,
    pos2: &Isometry<Real>,
    g2: &dyn Shape,
    solver: Option<&S>,
    request: &DistanceRequest,
    result: &mut DistanceResult,
) -> Real {
    let owned;
    let solver = match solver {
        Some(solver) => solver,
        None => {
            owned = S::default();
            &owned
        }
    };

    distance_with_matrix(
        S::distance_matrix(),
        solver,
        pos1,
        g1,
        pos2,
        g2,
        request,
        result,
    )
}

/// Computes the minimum distance separating two shapes with a custom dispatch table.
pub fn distance_with_matrix<S>(
    matrix: &DistanceMatrix<S>,
    solver: &S,
    pos1: &Isometry<Real>,
    g1: &dyn Shape,
    pos2: &Isometry<Real>,
    g2: &dyn Shape,
    request: &DistanceRequest,
    result: &mut DistanceResult,
) -> Real {
    let ctx = DistanceContext {
        matrix,
        solver,
        request,
    };
    distance_with_context(pos1, g1, pos2, g2, &ctx, result)
}

/// Dispatches a distance query to the routine registered in `ctx.matrix`.
///
/// If `g1` is a primitive and `g2` a hierarchy, the routine registered for `(g2, g1)` is
/// called instead, and the content it writes to `result` is swapped back.
pub fn distance_with_context<S>(
    pos1: &Isometry<Real>,
    g1: &dyn Shape,
    pos2: &Isometry<Real>,
    g2: &dyn Shape,
    ctx: &DistanceContext<'_, S>,
    result: &mut DistanceResult,
) -> Real {
    if g1.object_kind() == ObjectKind::Primitive && g2.object_kind() == ObjectKind::Hierarchy {
        let mut swapped = DistanceResult::new();
        let dist = call_registered(pos2, g2, pos1, g1, ctx, &mut swapped);
        swapped.swap();
        let _ = result.merge(&swapped);
        dist
    } else {
        call_registered(pos1, g1, pos2, g2, ctx, result)
    }
}

fn call_registered<S>(
    pos1: &Isometry<Real>,
    g1: &dyn Shape,
    pos2: &Isometry<Real>,
    g2: &dyn Shape,
    ctx: &DistanceContext<'_, S>,
    result: &mut DistanceResult,
) -> Real {
    let (t1, t2) = (g1.shape_type(), g2.shape_type());

    match ctx.matrix.get(t1, t2) {
        Some(routine) => routine(g1, pos1, g2, pos2, ctx, result),
        None => {
            log::warn!("Distance not supported between shapes of types {t1:?} and {t2:?}.");
            UNKNOWN_DISTANCE
        }
    }
}

/// Reports a routine called with shapes lacking the capability it relies on.
pub(crate) fn unexpected_shapes(g1: &dyn Shape, g2: &dyn Shape) -> Real {
    log::warn!(
        "Distance routine called with incompatible shapes of types {:?} and {:?}.",
        g1.shape_type(),
        g2.shape_type()
    );
    UNKNOWN_DISTANCE
}

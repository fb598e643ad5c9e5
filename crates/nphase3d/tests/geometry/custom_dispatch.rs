use nphase3d::math::{Isometry, Real};
use nphase3d::query::{
    self, gjk, ConvexClosestPoints, DistanceContext, DistanceMatrix, DistanceRequest,
    DistanceResult, GjkSolver, NarrowPhaseSolver, UNKNOWN_DISTANCE,
};
use nphase3d::shape::{Ball, Shape, ShapeType, SharedShape, SupportMap};
use std::sync::OnceLock;

use crate::common::Blob;

/// Treats a blob as a unit ball centered at its origin.
fn blob_ball<S>(
    g1: &dyn Shape,
    pos1: &Isometry<Real>,
    g2: &dyn Shape,
    pos2: &Isometry<Real>,
    _: &DistanceContext<'_, S>,
    result: &mut DistanceResult,
) -> Real {
    let Some(ball) = g2.as_ball() else {
        return UNKNOWN_DISTANCE;
    };
    let centers = pos2.translation.vector - pos1.translation.vector;
    let dist = (centers.norm() - 1.0 - ball.radius).max(0.0);
    let _ = result.update(dist, (g1.shape_type(), g2.shape_type()), None);
    dist
}

#[test]
fn custom_routine_through_an_explicit_table() {
    let mut matrix = DistanceMatrix::<GjkSolver>::new();
    matrix
        .register(ShapeType::Custom(4), ShapeType::Ball, blob_ball::<GjkSolver>)
        .unwrap();

    let blob = Blob { id: 4 };
    let ball = Ball::new(0.5);
    let request = DistanceRequest::default();
    let solver = GjkSolver::default();
    let id = Isometry::identity();
    let pos2 = Isometry::translation(0.0, 4.0, 0.0);

    let mut result = DistanceResult::new();
    let dist = query::distance_with_matrix(
        &matrix, &solver, &id, &blob, &pos2, &ball, &request, &mut result,
    );
    assert_eq!(dist, 2.5);
    assert_eq!(result.shape_types, Some((ShapeType::Custom(4), ShapeType::Ball)));

    // Only the registered order is supported.
    let mut result = DistanceResult::new();
    let dist = query::distance_with_matrix(
        &matrix, &solver, &pos2, &ball, &id, &blob, &request, &mut result,
    );
    assert_eq!(dist, UNKNOWN_DISTANCE);

    // The process-wide table is not affected.
    let mut result = DistanceResult::new();
    let dist = query::distance(&id, &blob, &pos2, &ball, &request, &mut result);
    assert_eq!(dist, UNKNOWN_DISTANCE);
}

#[test]
fn compound_parts_use_the_custom_table() {
    let mut matrix = DistanceMatrix::<GjkSolver>::new();
    matrix
        .register(ShapeType::Custom(4), ShapeType::Ball, blob_ball::<GjkSolver>)
        .unwrap();

    let compound = SharedShape::compound(vec![(
        Isometry::translation(2.0, 0.0, 0.0),
        SharedShape::new(Blob { id: 4 }),
    )])
    .unwrap();
    let ball = Ball::new(1.0);
    let mut result = DistanceResult::new();

    // The compound is the second operand: the driver swaps it to the row.
    let dist = query::distance_with_matrix(
        &matrix,
        &GjkSolver::default(),
        &Isometry::translation(6.0, 0.0, 0.0),
        &ball,
        &Isometry::identity(),
        &*compound,
        &DistanceRequest::default(),
        &mut result,
    );
    assert_eq!(dist, 2.0);
    assert_eq!(result.shape_types, Some((ShapeType::Ball, ShapeType::Custom(4))));
}

/// A GJK solver with a coarse tolerance, registered with its own table.
#[derive(Default)]
struct CoarseSolver;

impl NarrowPhaseSolver for CoarseSolver {
    fn closest_points(
        &self,
        pos12: &Isometry<Real>,
        g1: &dyn SupportMap,
        g2: &dyn SupportMap,
    ) -> ConvexClosestPoints {
        gjk::closest_points(pos12, g1, g2, 10, 1.0e-2)
    }

    fn distance_matrix() -> &'static DistanceMatrix<Self> {
        static MATRIX: OnceLock<DistanceMatrix<CoarseSolver>> = OnceLock::new();
        MATRIX.get_or_init(|| {
            let mut matrix = DistanceMatrix::new();
            let _ = matrix.register(ShapeType::Custom(4), ShapeType::Ball, blob_ball::<Self>);
            matrix
        })
    }
}

#[test]
fn custom_solver_strategy() {
    let blob = Blob { id: 4 };
    let ball = Ball::new(1.0);
    let id = Isometry::identity();
    let pos2 = Isometry::translation(0.0, 0.0, 5.0);
    let request = DistanceRequest::default();

    let mut result = DistanceResult::new();
    let dist = query::distance_with_solver::<CoarseSolver>(
        &id, &blob, &pos2, &ball, None, &request, &mut result,
    );
    assert_eq!(dist, 3.0);

    let capsule = SharedShape::capsule([0.0, 0.0, -1.0].into(), [0.0, 0.0, 1.0].into(), 0.5);
    let mut result = DistanceResult::new();
    let dist = query::distance_with_solver(
        &id,
        &*capsule,
        &pos2,
        &ball,
        Some(&CoarseSolver),
        &request,
        &mut result,
    );
    assert_relative_eq!(dist, 2.5, epsilon = 0.1);
}

use nphase3d::math::{Isometry, Point, Vector};
use nphase3d::query::{
    self, DistanceRequest, DistanceResult, GilbertSolver, GjkSolver, NarrowPhaseSolver,
    SolverType, UNKNOWN_DISTANCE,
};
use nphase3d::shape::{Ball, Cuboid, HalfSpace, Shape, ShapeType, SharedShape};
use std::thread;

use crate::common::Blob;

fn both_solvers() -> [DistanceRequest; 2] {
    [
        DistanceRequest::new(SolverType::Gjk),
        DistanceRequest::new(SolverType::Gilbert),
    ]
}

#[test]
fn default_request_uses_gjk_without_points() {
    let request = DistanceRequest::default();
    assert_eq!(request.solver_type, SolverType::Gjk);
    assert!(!request.enable_nearest_points);
}

#[test]
fn ball_ball_closed_form() {
    let ball1 = Ball::new(1.0);
    let ball2 = Ball::new(0.5);
    let pos1 = Isometry::translation(1.0, 1.0, 0.0);
    let pos2 = Isometry::translation(1.0, 5.0, 0.0);

    for request in both_solvers() {
        let request = request.with_nearest_points();
        let mut result = DistanceResult::new();
        let dist = query::distance(&pos1, &ball1, &pos2, &ball2, &request, &mut result);

        assert_eq!(dist, 2.5);
        assert_eq!(result.min_distance, 2.5);
        assert_eq!(result.shape_types, Some((ShapeType::Ball, ShapeType::Ball)));
        assert_eq!(
            result.nearest_points,
            Some([Point::new(1.0, 2.0, 0.0), Point::new(1.0, 4.5, 0.0)])
        );
    }
}

#[test]
fn ball_halfspace_in_both_orders() {
    let ball = Ball::new(1.0);
    let hs = HalfSpace::new(Vector::y(), 0.0);
    let ball_pos = Isometry::translation(2.0, 5.0, -1.0);
    let hs_pos = Isometry::identity();
    let request = DistanceRequest::default().with_nearest_points();

    let mut result = DistanceResult::new();
    let dist = query::distance(&ball_pos, &ball, &hs_pos, &hs, &request, &mut result);
    assert_eq!(dist, 4.0);
    assert_eq!(
        result.nearest_points,
        Some([Point::new(2.0, 4.0, -1.0), Point::new(2.0, 0.0, -1.0)])
    );
    assert_eq!(result.shape_types, Some((ShapeType::Ball, ShapeType::HalfSpace)));

    let mut result = DistanceResult::new();
    let dist = query::distance(&hs_pos, &hs, &ball_pos, &ball, &request, &mut result);
    assert_eq!(dist, 4.0);
    assert_eq!(
        result.nearest_points,
        Some([Point::new(2.0, 0.0, -1.0), Point::new(2.0, 4.0, -1.0)])
    );
    assert_eq!(result.shape_types, Some((ShapeType::HalfSpace, ShapeType::Ball)));
}

#[test]
fn penetrating_shapes_have_no_nearest_points() {
    let cuboid = Cuboid::new(Vector::repeat(1.0));
    let hs = HalfSpace::new(Vector::z(), 0.5);
    let request = DistanceRequest::default().with_nearest_points();
    let mut result = DistanceResult::new();

    let dist = query::distance(
        &Isometry::identity(),
        &cuboid,
        &Isometry::identity(),
        &hs,
        &request,
        &mut result,
    );
    assert_eq!(dist, 0.0);
    assert_eq!(result.min_distance, 0.0);
    assert_eq!(result.nearest_points, None);
}

#[test]
fn halfspace_halfspace() {
    let below = HalfSpace::new(Vector::y(), 0.0);
    let above = HalfSpace::new(-Vector::y(), -2.0);
    let tilted = HalfSpace::new(Vector::new(0.0, -1.0, 0.001), -2.0);
    let id = Isometry::identity();
    let request = DistanceRequest::default().with_nearest_points();

    let mut result = DistanceResult::new();
    assert_eq!(query::distance(&id, &below, &id, &above, &request, &mut result), 2.0);
    assert_eq!(
        result.nearest_points,
        Some([Point::origin(), Point::new(0.0, 2.0, 0.0)])
    );

    let mut result = DistanceResult::new();
    assert_eq!(query::distance(&id, &below, &id, &tilted, &request, &mut result), 0.0);

    // Moving `above` down makes both half-spaces overlap.
    let mut result = DistanceResult::new();
    let pos = Isometry::translation(0.0, -3.0, 0.0);
    assert_eq!(query::distance(&id, &below, &pos, &above, &request, &mut result), 0.0);
}

#[test]
fn unsupported_pairs_return_the_sentinel_in_both_orders() {
    let blob = Blob { id: 3 };
    let ball = Ball::new(1.0);
    let compound =
        SharedShape::compound(vec![(Isometry::identity(), SharedShape::ball(1.0))]).unwrap();
    let id = Isometry::identity();

    let pairs: [(&dyn Shape, &dyn Shape); 4] = [
        (&blob, &ball),
        (&ball, &blob),
        (&blob, &*compound),
        (&*compound, &blob),
    ];

    for request in both_solvers() {
        for (g1, g2) in pairs {
            let mut result = DistanceResult::new();
            let dist = query::distance(&id, g1, &id, g2, &request, &mut result);
            assert_eq!(dist, UNKNOWN_DISTANCE);
            assert_eq!(result, DistanceResult::new());
        }
    }
}

#[test]
fn result_accumulates_the_minimum_over_queries() {
    let ball = Ball::new(1.0);
    let id = Isometry::identity();
    let request = DistanceRequest::default();
    let mut result = DistanceResult::new();

    let far = Isometry::translation(10.0, 0.0, 0.0);
    let near = Isometry::translation(3.0, 0.0, 0.0);

    assert_eq!(query::distance(&id, &ball, &near, &ball, &request, &mut result), 1.0);
    assert_eq!(query::distance(&id, &ball, &far, &ball, &request, &mut result), 8.0);
    assert_eq!(result.min_distance, 1.0);
}

#[test]
fn supplied_solver_is_used() {
    let cuboid = Cuboid::new(Vector::repeat(1.0));
    let id = Isometry::identity();
    let pos2 = Isometry::translation(5.0, 0.5, 0.0);
    let request = DistanceRequest::default();
    let solver = GjkSolver {
        max_iterations: 50,
        ..GjkSolver::default()
    };

    let mut result = DistanceResult::new();
    let dist = query::distance_with_solver(
        &id,
        &cuboid,
        &pos2,
        &cuboid,
        Some(&solver),
        &request,
        &mut result,
    );
    assert_relative_eq!(dist, 3.0, epsilon = 1.0e-4);

    // The strategy of the request is ignored when the solver type is explicit.
    let gilbert_request = DistanceRequest::new(SolverType::Gilbert);
    let mut result = DistanceResult::new();
    let dist = query::distance_with_solver::<GjkSolver>(
        &id,
        &cuboid,
        &pos2,
        &cuboid,
        None,
        &gilbert_request,
        &mut result,
    );
    assert_relative_eq!(dist, 3.0, epsilon = 1.0e-4);
}

#[test]
fn tables_are_built_once() {
    assert!(core::ptr::eq(
        GjkSolver::distance_matrix(),
        GjkSolver::distance_matrix()
    ));
    assert!(core::ptr::eq(
        GilbertSolver::distance_matrix(),
        GilbertSolver::distance_matrix()
    ));
}

#[test]
fn concurrent_first_use() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let solver_type = if i % 2 == 0 {
                    SolverType::Gjk
                } else {
                    SolverType::Gilbert
                };
                let ball = Ball::new(1.0);
                let cuboid = Cuboid::new(Vector::repeat(1.0));
                let mut result = DistanceResult::new();

                query::distance(
                    &Isometry::identity(),
                    &ball,
                    &Isometry::translation(0.0, 0.0, 4.0),
                    &cuboid,
                    &DistanceRequest::new(solver_type),
                    &mut result,
                )
            })
        })
        .collect();

    for handle in handles {
        let dist = handle.join().unwrap();
        assert_relative_eq!(dist, 2.0, epsilon = 1.0e-2);
    }
}

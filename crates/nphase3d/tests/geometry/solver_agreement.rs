use nphase3d::math::{Isometry, Point, Real, Vector};
use nphase3d::query::{self, DistanceRequest, DistanceResult, SolverType};
use nphase3d::shape::{Ball, Capsule, Cuboid, Shape};
use oorandom::Rand32;

use crate::common::{rand_in, rand_isometry, rand_vector};

fn random_convex(rng: &mut Rand32) -> Box<dyn Shape> {
    match rng.rand_range(0..3) {
        0 => Box::new(Ball::new(rand_in(rng, 0.2, 1.5))),
        1 => Box::new(Cuboid::new(rand_vector(rng, 1.5).abs() + Vector::repeat(0.1))),
        _ => {
            let half_segment = rand_vector(rng, 1.0);
            Box::new(Capsule::new(
                Point::from(half_segment),
                Point::from(-half_segment),
                rand_in(rng, 0.2, 1.0),
            ))
        }
    }
}

fn distance(
    solver_type: SolverType,
    pos1: &Isometry<Real>,
    g1: &dyn Shape,
    pos2: &Isometry<Real>,
    g2: &dyn Shape,
) -> Real {
    let mut result = DistanceResult::new();
    let request = DistanceRequest::new(solver_type);
    query::distance(pos1, g1, pos2, g2, &request, &mut result)
}

#[test]
fn gjk_and_gilbert_agree_on_separated_shapes() {
    let mut rng = Rand32::new(2024);

    for _ in 0..200 {
        let g1 = random_convex(&mut rng);
        let g2 = random_convex(&mut rng);
        let pos1 = rand_isometry(&mut rng);
        let pos2 = rand_isometry(&mut rng);

        let gjk = distance(SolverType::Gjk, &pos1, &*g1, &pos2, &*g2);
        if gjk < 0.5 {
            // Both solvers may disagree on which side of their tolerance nearly touching
            // shapes lie.
            continue;
        }

        let gilbert = distance(SolverType::Gilbert, &pos1, &*g1, &pos2, &*g2);
        assert_relative_eq!(gjk, gilbert, epsilon = 5.0e-2, max_relative = 2.0e-2);
    }
}

/// Distance between a cuboid and a ball, by clamping the ball center onto the box.
fn cuboid_ball_distance(
    pos1: &Isometry<Real>,
    cuboid: &Cuboid,
    pos2: &Isometry<Real>,
    ball: &Ball,
) -> Real {
    let center = pos1.inverse_transform_point(&Point::from(pos2.translation.vector));
    let clamped = center
        .coords
        .sup(&-cuboid.half_extents)
        .inf(&cuboid.half_extents);
    ((center.coords - clamped).norm() - ball.radius).max(0.0)
}

#[test]
fn both_strategies_match_the_cuboid_ball_closed_form() {
    let mut rng = Rand32::new(31);

    for _ in 0..500 {
        let cuboid = Cuboid::new(rand_vector(&mut rng, 2.0).abs() + Vector::repeat(0.1));
        let ball = Ball::new(rand_in(&mut rng, 0.1, 2.0));
        let pos1 = rand_isometry(&mut rng);
        let pos2 = rand_isometry(&mut rng);
        let expected = cuboid_ball_distance(&pos1, &cuboid, &pos2, &ball);

        for solver_type in [SolverType::Gjk, SolverType::Gilbert] {
            let dist = distance(solver_type, &pos1, &cuboid, &pos2, &ball);
            assert_relative_eq!(dist, expected, epsilon = 2.0e-2, max_relative = 2.0e-3);
        }
    }
}

#[test]
fn both_strategies_detect_overlaps() {
    let mut rng = Rand32::new(77);

    for _ in 0..50 {
        let g1 = random_convex(&mut rng);
        let g2 = random_convex(&mut rng);
        let pos = rand_isometry(&mut rng);

        // Both shapes contain a ball of radius 0.1 centered at the origin of their local-space.
        let shift = rand_vector(&mut rng, 0.05);
        let pos2 = Isometry::from_parts((pos.translation.vector + shift).into(), pos.rotation);

        for solver_type in [SolverType::Gjk, SolverType::Gilbert] {
            assert_eq!(distance(solver_type, &pos, &*g1, &pos2, &*g2), 0.0);
        }
    }
}

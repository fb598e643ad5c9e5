use nphase3d::math::{Isometry, Point, Vector};
use nphase3d::na::UnitQuaternion;
use nphase3d::shape::HalfSpace;
use oorandom::Rand32;

use crate::common::{rand_isometry, rand_vector};

#[test]
fn point_queries_follow_the_plane_equation() {
    let hs = HalfSpace::new(Vector::new(0.0, 0.0, 1.0), 2.0);
    let above = Point::new(3.0, -1.0, 5.0);
    let below = Point::new(0.0, 7.0, -1.0);

    assert_eq!(hs.signed_distance(&above), 3.0);
    assert_eq!(hs.signed_distance(&below), -3.0);
    assert_eq!(hs.distance(&below), 3.0);
    assert_eq!(hs.signed_distance(&Point::new(1.0, 1.0, 2.0)), 0.0);
}

#[test]
fn signed_distance_is_exactly_the_plane_equation() {
    let mut rng = Rand32::new(0);

    for _ in 0..100 {
        let hs = HalfSpace::new(rand_vector(&mut rng, 1.0), rng.rand_float() * 10.0);
        let p = Point::from(rand_vector(&mut rng, 20.0));
        let expected = hs.normal.dot(&p.coords) - hs.offset;

        assert_eq!(hs.signed_distance(&p), expected);
        assert_eq!(hs.distance(&p), expected.abs());
    }
}

#[test]
fn constructors() {
    let hs = HalfSpace::from_coefficients(2.0, 0.0, 0.0, 8.0);
    assert_eq!(hs.normal.into_inner(), Vector::x());
    assert_eq!(hs.offset, 4.0);

    let hs = HalfSpace::from_coefficients(0.0, 0.0, 0.0, 8.0);
    assert_eq!(hs, HalfSpace::default());
}

#[test]
fn identity_transform_is_a_no_op() {
    let hs = HalfSpace::new(Vector::new(1.0, 2.0, -3.0), 1.5);
    assert_eq!(hs.transform_by(&Isometry::identity()), hs);
}

#[test]
fn translation_along_the_normal_shifts_the_offset() {
    let hs = HalfSpace::new(Vector::y(), 1.0);
    let moved = hs.transform_by(&Isometry::translation(4.0, 2.0, -1.0));
    assert_eq!(moved.normal, hs.normal);
    assert_eq!(moved.offset, 3.0);
}

#[test]
fn rotation_rotates_the_normal() {
    let hs = HalfSpace::new(Vector::x(), 2.0);
    let rot = UnitQuaternion::from_axis_angle(&Vector::z_axis(), core::f32::consts::FRAC_PI_2);
    let moved = hs.transform_by(&Isometry::from_parts(Vector::zeros().into(), rot));
    assert_relative_eq!(moved.normal.into_inner(), Vector::y(), epsilon = 1.0e-6);
    assert_relative_eq!(moved.offset, 2.0);
}

#[test]
fn transforms_compose() {
    let mut rng = Rand32::new(42);

    for _ in 0..50 {
        let hs = HalfSpace::new(rand_vector(&mut rng, 1.0), rng.rand_float() * 5.0);
        let t1 = rand_isometry(&mut rng);
        let t2 = rand_isometry(&mut rng);

        let sequential = hs.transform_by(&t1).transform_by(&t2);
        let composed = hs.transform_by(&(t2 * t1));
        assert_relative_eq!(sequential, composed, epsilon = 1.0e-3);
    }
}

#[test]
fn transformed_points_keep_their_signed_distance() {
    let mut rng = Rand32::new(7);

    for _ in 0..50 {
        let hs = HalfSpace::new(rand_vector(&mut rng, 1.0), rng.rand_float());
        let pos = rand_isometry(&mut rng);
        let p = Point::from(rand_vector(&mut rng, 5.0));

        let moved = hs.transform_by(&pos);
        assert_relative_eq!(
            moved.signed_distance(&(pos * p)),
            hs.signed_distance(&p),
            epsilon = 1.0e-3
        );
    }
}

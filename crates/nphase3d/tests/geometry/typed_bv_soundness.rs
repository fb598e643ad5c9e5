use nphase3d::bounding_volume::{compute_typed_bv, BvType};
use nphase3d::math::{Isometry, Point, Real, Vector};
use nphase3d::shape::{Ball, Capsule, Cuboid, HalfSpace, Shape, SharedShape, SupportMap};
use oorandom::Rand32;

use crate::common::{rand_in, rand_isometry, rand_vector, Blob};

const NUM_SAMPLES: usize = 200;

/// Points of a convex shape at `pos`: its support points pulled slightly toward `center`.
fn convex_samples(
    rng: &mut Rand32,
    shape: &dyn SupportMap,
    pos: &Isometry<Real>,
    center: &Point<Real>,
) -> Vec<Point<Real>> {
    let center = pos * center;
    (0..NUM_SAMPLES)
        .map(|_| {
            let support = shape.support_point(pos, &rand_vector(rng, 1.0));
            center + (support - center) * 0.99
        })
        .collect()
}

fn assert_all_contained(shape: &dyn Shape, pos: &Isometry<Real>, points: &[Point<Real>]) {
    for bv_type in BvType::ALL {
        let Some(bv) = compute_typed_bv(shape, pos, bv_type) else {
            continue;
        };

        for pt in points {
            assert!(
                bv.contains_local_point(pt),
                "{:?} of {:?} does not contain {}",
                bv_type,
                shape.shape_type(),
                pt
            );
        }
    }
}

fn random_primitives(rng: &mut Rand32) -> Vec<(Box<dyn SupportMap>, SharedShape, Point<Real>)> {
    let radius = rand_in(rng, 0.1, 2.0);
    let half_extents = rand_vector(rng, 2.0).abs() + Vector::repeat(0.05);
    let a = Point::from(rand_vector(rng, 2.0));
    let b = Point::from(rand_vector(rng, 2.0));
    let capsule = Capsule::new(a, b, radius);

    vec![
        (
            Box::new(Ball::new(radius)),
            SharedShape::ball(radius),
            Point::origin(),
        ),
        (
            Box::new(Cuboid::new(half_extents)),
            SharedShape::cuboid(half_extents.x, half_extents.y, half_extents.z),
            Point::origin(),
        ),
        (Box::new(capsule), SharedShape::new(capsule), capsule.center()),
    ]
}

#[test]
fn primitive_bounding_volumes_contain_the_shape() {
    let mut rng = Rand32::new(1234);

    for _ in 0..20 {
        for (support_map, shape, center) in random_primitives(&mut rng) {
            let pos = rand_isometry(&mut rng);
            let points = convex_samples(&mut rng, &*support_map, &pos, &center);
            assert_all_contained(&*shape, &pos, &points);
        }
    }
}

#[test]
fn cuboid_bounding_volumes_contain_its_vertices() {
    let mut rng = Rand32::new(99);

    for _ in 0..20 {
        let cuboid = Cuboid::new(rand_vector(&mut rng, 3.0).abs() + Vector::repeat(0.05));
        let pos = rand_isometry(&mut rng);
        let points: Vec<_> = cuboid
            .vertices()
            .into_iter()
            .map(|v| pos * (v * 0.99))
            .collect();
        assert_all_contained(&cuboid, &pos, &points);
    }
}

#[test]
fn compound_bounding_volumes_contain_every_part() {
    let mut rng = Rand32::new(5678);

    for _ in 0..10 {
        let mut parts = vec![];
        let mut samples = vec![];
        let pos = rand_isometry(&mut rng);

        for (support_map, shape, center) in random_primitives(&mut rng) {
            let delta = rand_isometry(&mut rng);
            samples.extend(convex_samples(&mut rng, &*support_map, &(pos * delta), &center));
            parts.push((delta, shape));
        }

        let compound = SharedShape::compound(parts).unwrap();
        assert_all_contained(&*compound, &pos, &samples);
    }
}

#[test]
fn compound_kdops_are_not_supported() {
    let compound =
        SharedShape::compound(vec![(Isometry::identity(), SharedShape::ball(1.0))]).unwrap();

    for bv_type in [BvType::Kdop16, BvType::Kdop18, BvType::Kdop24] {
        assert!(compute_typed_bv(&*compound, &Isometry::identity(), bv_type).is_none());
    }
    assert!(compute_typed_bv(&*compound, &Isometry::identity(), BvType::Kios).is_some());
}

#[test]
fn custom_shapes_have_no_typed_bounding_volume() {
    let blob = Blob { id: 0 };
    for bv_type in BvType::ALL {
        assert!(compute_typed_bv(&blob, &Isometry::identity(), bv_type).is_none());
    }
}

#[test]
fn halfspace_bounding_volumes_contain_inner_points() {
    let mut rng = Rand32::new(31);

    for i in 0..50 {
        // Every few iterations, use an axis or diagonal normal so that some bounds are tight.
        let normal = match i % 4 {
            0 => Vector::new(0.0, -1.0, 0.0),
            1 => Vector::new(1.0, 0.0, -1.0),
            2 => Vector::new(-1.0, 1.0, 1.0),
            _ => rand_vector(&mut rng, 1.0),
        };
        let hs = HalfSpace::new(normal, rand_in(&mut rng, -3.0, 3.0));
        let pos = Isometry::translation(
            rand_in(&mut rng, -5.0, 5.0),
            rand_in(&mut rng, -5.0, 5.0),
            rand_in(&mut rng, -5.0, 5.0),
        );
        let world = hs.transform_by(&pos);

        let points: Vec<_> = (0..NUM_SAMPLES)
            .map(|_| {
                let pt = Point::from(rand_vector(&mut rng, 20.0));
                let dist = world.signed_distance(&pt);
                if dist > -0.1 {
                    pt - *world.normal * (dist + 0.5)
                } else {
                    pt
                }
            })
            .collect();

        assert_all_contained(&hs, &pos, &points);
    }
}

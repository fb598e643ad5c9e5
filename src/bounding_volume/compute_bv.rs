use crate::bounding_volume::{Aabb, BoundingSphere, Kdop16, Kdop18, Kdop24, Kios, Obb, ObbRss, Rss};
use crate::math::{Isometry, Point, Real};
use crate::shape::{Shape, TypedShape};

/// Fitting of a bounding volume of type `Bv` to a shape.
///
/// The returned volume always contains the shape transformed by `pos`. It is tight when the
/// geometry permits, and conservative otherwise.
pub trait ComputeBv<Bv> {
    /// Computes a bounding volume of `self` transformed by `pos`.
    fn compute_bv(&self, pos: &Isometry<Real>) -> Bv;
}

impl<S: ComputeBv<Obb> + ComputeBv<Rss>> ComputeBv<ObbRss> for S {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> ObbRss {
        ObbRss {
            obb: <S as ComputeBv<Obb>>::compute_bv(self, pos),
            rss: <S as ComputeBv<Rss>>::compute_bv(self, pos),
        }
    }
}

impl<S: ComputeBv<BoundingSphere> + ComputeBv<Obb>> ComputeBv<Kios> for S {
    #[inline]
    fn compute_bv(&self, pos: &Isometry<Real>) -> Kios {
        Kios::new(
            <S as ComputeBv<BoundingSphere>>::compute_bv(self, pos),
            <S as ComputeBv<Obb>>::compute_bv(self, pos),
        )
    }
}

/// The bounding volume representations a shape can be fitted with at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum BvType {
    /// An axis-aligned bounding box.
    Aabb,
    /// A bounding sphere.
    BoundingSphere,
    /// An oriented bounding box.
    Obb,
    /// A rectangle swept sphere.
    Rss,
    /// An oriented bounding box and a rectangle swept sphere.
    ObbRss,
    /// An intersection of spheres and of an oriented bounding box.
    Kios,
    /// A discrete oriented polytope with 8 slabs.
    Kdop16,
    /// A discrete oriented polytope with 9 slabs.
    Kdop18,
    /// A discrete oriented polytope with 12 slabs.
    Kdop24,
}

impl BvType {
    /// Every bounding volume representation.
    pub const ALL: [BvType; 9] = [
        BvType::Aabb,
        BvType::BoundingSphere,
        BvType::Obb,
        BvType::Rss,
        BvType::ObbRss,
        BvType::Kios,
        BvType::Kdop16,
        BvType::Kdop18,
        BvType::Kdop24,
    ];
}

/// A bounding volume of any of the supported representations.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum TypedBv {
    Aabb(Aabb),
    BoundingSphere(BoundingSphere),
    Obb(Obb),
    Rss(Rss),
    ObbRss(ObbRss),
    Kios(Kios),
    Kdop16(Kdop16),
    Kdop18(Kdop18),
    Kdop24(Kdop24),
}

impl TypedBv {
    /// The representation of this bounding volume.
    pub fn bv_type(&self) -> BvType {
        match self {
            TypedBv::Aabb(_) => BvType::Aabb,
            TypedBv::BoundingSphere(_) => BvType::BoundingSphere,
            TypedBv::Obb(_) => BvType::Obb,
            TypedBv::Rss(_) => BvType::Rss,
            TypedBv::ObbRss(_) => BvType::ObbRss,
            TypedBv::Kios(_) => BvType::Kios,
            TypedBv::Kdop16(_) => BvType::Kdop16,
            TypedBv::Kdop18(_) => BvType::Kdop18,
            TypedBv::Kdop24(_) => BvType::Kdop24,
        }
    }

    /// Does this volume contain a point expressed in the same coordinate frame as `self`?
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        match self {
            TypedBv::Aabb(bv) => bv.contains_local_point(point),
            TypedBv::BoundingSphere(bv) => bv.contains_local_point(point),
            TypedBv::Obb(bv) => bv.contains_local_point(point),
            TypedBv::Rss(bv) => bv.contains_local_point(point),
            TypedBv::ObbRss(bv) => bv.contains_local_point(point),
            TypedBv::Kios(bv) => bv.contains_local_point(point),
            TypedBv::Kdop16(bv) => bv.contains_local_point(point),
            TypedBv::Kdop18(bv) => bv.contains_local_point(point),
            TypedBv::Kdop24(bv) => bv.contains_local_point(point),
        }
    }
}

#[inline]
fn fit<Bv, S: ComputeBv<Bv>>(shape: &S, pos: &Isometry<Real>) -> Bv {
    shape.compute_bv(pos)
}

fn fit_any<S>(shape: &S, pos: &Isometry<Real>, bv_type: BvType) -> TypedBv
where
    S: ComputeBv<Aabb>
        + ComputeBv<BoundingSphere>
        + ComputeBv<Obb>
        + ComputeBv<Rss>
        + ComputeBv<Kdop16>
        + ComputeBv<Kdop18>
        + ComputeBv<Kdop24>,
{
    match bv_type {
        BvType::Aabb => TypedBv::Aabb(fit(shape, pos)),
        BvType::BoundingSphere => TypedBv::BoundingSphere(fit(shape, pos)),
        BvType::Obb => TypedBv::Obb(fit(shape, pos)),
        BvType::Rss => TypedBv::Rss(fit(shape, pos)),
        BvType::ObbRss => TypedBv::ObbRss(fit(shape, pos)),
        BvType::Kios => TypedBv::Kios(fit(shape, pos)),
        BvType::Kdop16 => TypedBv::Kdop16(fit(shape, pos)),
        BvType::Kdop18 => TypedBv::Kdop18(fit(shape, pos)),
        BvType::Kdop24 => TypedBv::Kdop24(fit(shape, pos)),
    }
}

/// Fits a bounding volume of the given representation to `shape` transformed by `pos`.
///
/// Returns `None` if this pair of shape and representation is not supported: custom shapes,
/// and discrete oriented polytopes of compound shapes.
pub fn compute_typed_bv(
    shape: &dyn Shape,
    pos: &Isometry<Real>,
    bv_type: BvType,
) -> Option<TypedBv> {
    match shape.as_typed_shape() {
        TypedShape::Ball(s) => Some(fit_any(s, pos, bv_type)),
        TypedShape::Cuboid(s) => Some(fit_any(s, pos, bv_type)),
        TypedShape::Capsule(s) => Some(fit_any(s, pos, bv_type)),
        TypedShape::HalfSpace(s) => Some(fit_any(s, pos, bv_type)),
        TypedShape::Compound(s) => match bv_type {
            BvType::Aabb => Some(TypedBv::Aabb(s.compute_bv(pos))),
            BvType::BoundingSphere => Some(TypedBv::BoundingSphere(s.compute_bv(pos))),
            BvType::Obb => Some(TypedBv::Obb(s.compute_bv(pos))),
            BvType::Rss => Some(TypedBv::Rss(s.compute_bv(pos))),
            BvType::ObbRss => Some(TypedBv::ObbRss(s.compute_bv(pos))),
            BvType::Kios => Some(TypedBv::Kios(s.compute_bv(pos))),
            BvType::Kdop16 | BvType::Kdop18 | BvType::Kdop24 => None,
        },
        TypedShape::Custom(_) => None,
    }
}

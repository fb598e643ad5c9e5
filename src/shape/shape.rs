use crate::bounding_volume::{Aabb, BoundingSphere, ComputeBv};
use crate::math::{Isometry, Point, Real};
use crate::shape::{Ball, Capsule, Compound, Cuboid, HalfSpace, LocalBounds, SupportMap};
use downcast_rs::{impl_downcast, DowncastSync};

/// The maximum number of user-defined shape types a dispatch table can index.
pub const MAX_CUSTOM_SHAPE_TYPES: usize = 16;

/// The number of shape types a dispatch table can index: the built-in types
/// followed by [`MAX_CUSTOM_SHAPE_TYPES`] custom slots.
pub const NUM_SHAPE_TYPES: usize = ShapeType::NUM_BUILTIN + MAX_CUSTOM_SHAPE_TYPES;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// Enum representing the type of a shape.
///
/// This is the key of the dispatch tables: every shape reports its type, and the
/// pair of types of two shapes selects the routine used to query them.
pub enum ShapeType {
    /// A ball shape.
    Ball,
    /// A cuboid shape.
    Cuboid,
    /// A capsule shape.
    Capsule,
    /// A shape representing a full half-space.
    HalfSpace,
    /// A Compound shape.
    Compound,
    /// A custom user-defined shape type.
    ///
    /// Only identifiers smaller than [`MAX_CUSTOM_SHAPE_TYPES`] can be registered
    /// in a dispatch table.
    Custom(u8),
}

impl ShapeType {
    /// The number of built-in shape types.
    pub const NUM_BUILTIN: usize = 5;

    /// The built-in shape types, in index order.
    pub const BUILTIN: [ShapeType; Self::NUM_BUILTIN] = [
        ShapeType::Ball,
        ShapeType::Cuboid,
        ShapeType::Capsule,
        ShapeType::HalfSpace,
        ShapeType::Compound,
    ];

    /// The dense index of this shape type in a dispatch table.
    ///
    /// Returns `None` for custom types with an identifier out of the indexable range.
    #[inline]
    pub fn index(self) -> Option<usize> {
        match self {
            ShapeType::Ball => Some(0),
            ShapeType::Cuboid => Some(1),
            ShapeType::Capsule => Some(2),
            ShapeType::HalfSpace => Some(3),
            ShapeType::Compound => Some(4),
            ShapeType::Custom(id) if (id as usize) < MAX_CUSTOM_SHAPE_TYPES => {
                Some(Self::NUM_BUILTIN + id as usize)
            }
            ShapeType::Custom(_) => None,
        }
    }
}

/// Whether a shape is a single primitive or a tree-structured aggregate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ObjectKind {
    /// A single geometric primitive.
    #[default]
    Primitive,
    /// An aggregate of shapes organized hierarchically.
    Hierarchy,
}

#[derive(Copy, Clone, Debug)]
/// Enum representing the shape with its actual type
pub enum TypedShape<'a> {
    /// A ball shape.
    Ball(&'a Ball),
    /// A cuboid shape.
    Cuboid(&'a Cuboid),
    /// A capsule shape.
    Capsule(&'a Capsule),
    /// A shape representing a full half-space.
    HalfSpace(&'a HalfSpace),
    /// A Compound shape.
    Compound(&'a Compound),
    /// A custom user-defined shape with a type identified by a number.
    Custom(u8),
}

/// Trait implemented by shapes usable by nphase.
pub trait Shape: DowncastSync {
    /// Computes the AABB of this shape.
    fn compute_local_aabb(&self) -> Aabb;

    /// Computes the AABB of this shape with the given position.
    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.compute_local_aabb().transform_by(position)
    }

    /// Computes the bounding-sphere of this shape.
    fn compute_local_bounding_sphere(&self) -> BoundingSphere {
        self.compute_local_aabb().bounding_sphere()
    }

    /// Computes the local bounds cached when the geometry of this shape is established.
    fn compute_local_bounds(&self) -> LocalBounds {
        LocalBounds::from_aabb(self.compute_local_aabb())
    }

    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// Whether this shape is a primitive or a hierarchy of shapes.
    fn object_kind(&self) -> ObjectKind {
        ObjectKind::Primitive
    }

    /// Gets the underlying shape as an enum.
    fn as_typed_shape(&self) -> TypedShape<'_>;

    /// Converts this shape into its support mapping, if it has any.
    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        None
    }
}

impl_downcast!(sync Shape);

impl dyn Shape {
    /// Converts this abstract shape to a ball, if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a half-space, if it is one.
    pub fn as_halfspace(&self) -> Option<&HalfSpace> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a compound shape, if it is one.
    pub fn as_compound(&self) -> Option<&Compound> {
        self.downcast_ref()
    }
}

impl Shape for Ball {
    fn compute_local_aabb(&self) -> Aabb {
        self.local_aabb()
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.compute_bv(position)
    }

    fn compute_local_bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(Point::origin(), self.radius)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Ball
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Ball(self)
    }

    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }
}

impl Shape for Cuboid {
    fn compute_local_aabb(&self) -> Aabb {
        self.local_aabb()
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.compute_bv(position)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Cuboid
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Cuboid(self)
    }

    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }
}

impl Shape for Capsule {
    fn compute_local_aabb(&self) -> Aabb {
        self.local_aabb()
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.compute_bv(position)
    }

    fn compute_local_bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center(), self.half_height() + self.radius)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Capsule
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Capsule(self)
    }

    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }
}

impl Shape for HalfSpace {
    fn compute_local_aabb(&self) -> Aabb {
        self.compute_bv(&Isometry::identity())
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        // The generic path would rotate the unbounded extents of the local AABB.
        self.compute_bv(position)
    }

    fn compute_local_bounding_sphere(&self) -> BoundingSphere {
        self.compute_bv(&Isometry::identity())
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::HalfSpace
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::HalfSpace(self)
    }
}

impl Shape for Compound {
    fn compute_local_aabb(&self) -> Aabb {
        *self.local_aabb()
    }

    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        self.compute_bv(position)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Compound
    }

    fn object_kind(&self) -> ObjectKind {
        ObjectKind::Hierarchy
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Compound(self)
    }
}

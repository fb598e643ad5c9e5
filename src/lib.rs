/*!
nphase
========

**nphase** is a 3-dimensional narrow-phase geometric library written with
the rust programming language. It provides:

* a distance-query dispatcher routing a pair of shapes to a routine chosen by
  their shape types and by the convex solver strategy requested,
* a bounding-volume fitting protocol computing, for every shape and every
  supported bounding-volume representation, a region containing the shape.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![allow(clippy::type_complexity)] // Complains about routine signatures that are fairly simple.
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate alloc;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Point3, Translation3, UnitVector3, Vector3};
    use na::{UnitQuaternion, U3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The dimension of the space multiplied by two.
    pub const TWO_DIM: usize = DIM * 2;

    /// The dimension of the ambient space.
    pub type Dim = U3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation matrix type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}

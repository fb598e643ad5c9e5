//! Non-persistent geometric queries.
//!
//! [`distance()`] computes the distance between two shapes. The routine used for a given pair
//! of shapes is looked up in a [`DistanceMatrix`], indexed by the types of both shapes. There
//! is one table per convex solver strategy ([`NarrowPhaseSolver`]), built on first use.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are the routines registered in the
//! dispatch tables, and the specialized computations they rely on.

pub use self::distance::{distance, distance_with_matrix, distance_with_solver};
pub use self::distance_matrix::{DistanceContext, DistanceFn, DistanceMatrix};
pub use self::distance_request::{DistanceRequest, DistanceResult, UNKNOWN_DISTANCE};
pub use self::error::DispatchError;
pub use self::gilbert::GilbertSolver;
pub use self::gjk::GjkSolver;
pub use self::narrow_phase_solver::{ConvexClosestPoints, NarrowPhaseSolver, SolverType};

mod distance;
mod distance_matrix;
mod distance_request;
mod error;
pub mod gilbert;
pub mod gjk;
mod narrow_phase_solver;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::distance::*;
}

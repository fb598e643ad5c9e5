//! The GJK algorithm for distance computation.

pub use self::cso_point::CSOPoint;
pub use self::gjk::{closest_points, eps_tol, GjkSolver};
pub use self::johnson_simplex::JohnsonSimplex;

mod cso_point;
#[allow(clippy::module_inception)]
mod gjk;
mod johnson_simplex;

//! Vectors, hyperplanes, and Gaussian elimination over systems of linear equations.
//!
//! Layering (leaf first)
//! - `vector`: fixed-dimension `Vector` with arithmetic, products, projections.
//! - `hyperplane`: `Hyperplane` (`n·x = k`) plus the `Line`/`Plane` wrappers.
//! - `system`: `LinearSystem` row operations, triangular form, RREF, solutions.
//! - `random`: reproducible random systems for benches and randomized tests.
//!
//! Numerics
//! - Near-zero tests use an explicit threshold (`NumCfg::eps_zero`, default `1e-10`).
//! - Dot products are rounded to 10 places, displayed values to 3 places.
//! - There is no global precision state; tolerances travel with the call.

pub mod cfg;
pub mod error;
pub mod hyperplane;
pub mod random;
pub mod system;
mod util;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::NumCfg;
pub use error::{LinsysError, Result};
pub use hyperplane::{
    first_nonzero_index, first_nonzero_index_eps, Hyperplane, Intersection, Line, Plane,
};
pub use system::{LinearSystem, Parametrization, Solution, SolutionKind};
pub use vector::{AngleUnit, Vector};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::NumCfg;
    pub use crate::error::{LinsysError, Result};
    pub use crate::hyperplane::{Hyperplane, Intersection, Line, Plane};
    pub use crate::system::{LinearSystem, Parametrization, Solution, SolutionKind};
    pub use crate::vector::{AngleUnit, Vector};
}

//! Hyperplanes `n · x = k` and their fixed-dimension wrappers.
//!
//! - `Hyperplane`: normal vector, constant term, and a basepoint derived once at
//!   construction. Values are immutable; "changing" a row means building a new one.
//! - `Line` (R²) and `Plane` (R³): thin newtypes that pin the dimension.
//! - `first_nonzero_index`: the pivot finder shared with the elimination engine.
//!
//! Equality is geometric: two hyperplanes are equal when they describe the same
//! point set, not when their coefficients match.

mod display;
mod line;
mod plane;

pub use line::{Intersection, Line};
pub use plane::Plane;

use nalgebra::DVector;

use crate::cfg::EPS_ZERO;
use crate::error::Result;
use crate::util::is_near_zero;
use crate::vector::Vector;

/// Index of the first coordinate of `v` not within `EPS_ZERO` of zero.
///
/// `None` means the vector has no pivot (all coordinates near zero).
#[inline]
pub fn first_nonzero_index(v: &Vector) -> Option<usize> {
    first_nonzero_index_eps(v, EPS_ZERO)
}

#[inline]
pub fn first_nonzero_index_eps(v: &Vector, eps: f64) -> Option<usize> {
    v.iter().position(|x| !is_near_zero(x, eps))
}

/// Hyperplane `normal_vector · x = constant_term`.
///
/// Invariants:
/// - `basepoint` is `None` iff the normal vector has no pivot.
/// - Otherwise `basepoint[i] = k / n[i]` at the pivot `i`, zero elsewhere.
#[derive(Clone, Debug)]
pub struct Hyperplane {
    normal_vector: Vector,
    constant_term: f64,
    basepoint: Option<Vector>,
}

impl Hyperplane {
    pub fn new(normal_vector: Vector, constant_term: f64) -> Self {
        Self::new_eps(normal_vector, constant_term, EPS_ZERO)
    }

    /// Like `new`, with an explicit near-zero threshold for the basepoint pivot.
    pub fn new_eps(normal_vector: Vector, constant_term: f64, eps: f64) -> Self {
        let basepoint = basepoint_of(&normal_vector, constant_term, eps);
        Self {
            normal_vector,
            constant_term,
            basepoint,
        }
    }

    /// Degenerate hyperplane `0 · x = 0` in the given dimension.
    pub fn zero(dimension: usize) -> Result<Self> {
        Ok(Self::new(Vector::zeros(dimension)?, 0.0))
    }

    /// Shorthand for `Hyperplane::new(Vector::new(coefficients)?, constant_term)`.
    pub fn from_coefficients(coefficients: impl Into<Vec<f64>>, constant_term: f64) -> Result<Self> {
        Ok(Self::new(Vector::new(coefficients)?, constant_term))
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.normal_vector.dimension()
    }

    #[inline]
    pub fn normal_vector(&self) -> &Vector {
        &self.normal_vector
    }

    #[inline]
    pub fn constant_term(&self) -> f64 {
        self.constant_term
    }

    #[inline]
    pub fn basepoint(&self) -> Option<&Vector> {
        self.basepoint.as_ref()
    }

    /// The normal vector has no pivot (`0 · x = k`).
    #[inline]
    pub fn has_zero_normal(&self) -> bool {
        self.basepoint.is_none()
    }

    /// Parallel normal vectors (a zero normal is parallel to anything).
    pub fn is_parallel(&self, other: &Hyperplane) -> bool {
        self.normal_vector.is_parallel(&other.normal_vector)
    }

    /// Membership test `|n·p - k| < eps`. Points of another dimension never lie on the hyperplane.
    pub fn contains_eps(&self, point: &Vector, eps: f64) -> bool {
        point.dimension() == self.dimension()
            && is_near_zero(
                self.normal_vector.as_dvector().dot(point.as_dvector()) - self.constant_term,
                eps,
            )
    }
}

fn basepoint_of(normal_vector: &Vector, constant_term: f64, eps: f64) -> Option<Vector> {
    let i = first_nonzero_index_eps(normal_vector, eps)?;
    let mut coords = DVector::zeros(normal_vector.dimension());
    coords[i] = constant_term / normal_vector[i];
    Some(Vector::from_dvector(coords))
}

impl PartialEq for Hyperplane {
    fn eq(&self, other: &Self) -> bool {
        if self.dimension() != other.dimension() {
            return false;
        }
        match (&self.basepoint, &other.basepoint) {
            (None, None) => true,
            (Some(p), Some(q)) => {
                self.is_parallel(other)
                    && matches!(p.minus(q), Ok(d) if d.is_orthogonal(&self.normal_vector))
            }
            _ => false,
        }
    }
}

//! Planes in R³.

use std::fmt;
use std::ops::Deref;

use nalgebra::DVector;

use super::Hyperplane;
use crate::error::{LinsysError, Result};
use crate::vector::Vector;

/// Plane `a·x + b·y + c·z = k`.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane(Hyperplane);

impl Plane {
    pub const DIMENSION: usize = 3;

    /// Fails with `DimensionMismatch` unless `normal_vector` is three-dimensional.
    pub fn new(normal_vector: Vector, constant_term: f64) -> Result<Self> {
        Self::try_from(Hyperplane::new(normal_vector, constant_term))
    }

    pub fn from_coefficients(a: f64, b: f64, c: f64, k: f64) -> Self {
        Self(Hyperplane::new(
            Vector::from_dvector(DVector::from_vec(vec![a, b, c])),
            k,
        ))
    }

    #[inline]
    pub fn as_hyperplane(&self) -> &Hyperplane {
        &self.0
    }

    #[inline]
    pub fn into_hyperplane(self) -> Hyperplane {
        self.0
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self(Hyperplane::new(
            Vector::from_dvector(DVector::zeros(Self::DIMENSION)),
            0.0,
        ))
    }
}

impl TryFrom<Hyperplane> for Plane {
    type Error = LinsysError;
    fn try_from(h: Hyperplane) -> Result<Self> {
        if h.dimension() != Self::DIMENSION {
            return Err(LinsysError::DimensionMismatch {
                expected: Self::DIMENSION,
                found: h.dimension(),
            });
        }
        Ok(Self(h))
    }
}

impl From<Plane> for Hyperplane {
    fn from(p: Plane) -> Self {
        p.0
    }
}

impl PartialEq<Plane> for Hyperplane {
    fn eq(&self, other: &Plane) -> bool {
        *self == other.0
    }
}

impl PartialEq<Hyperplane> for Plane {
    fn eq(&self, other: &Hyperplane) -> bool {
        self.0 == *other
    }
}

impl Deref for Plane {
    type Target = Hyperplane;
    fn deref(&self) -> &Hyperplane {
        &self.0
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

//! Lines in R² and their pairwise intersection.

use std::fmt;
use std::ops::Deref;

use nalgebra::DVector;

use super::Hyperplane;
use crate::cfg::DISPLAY_PLACES;
use crate::error::{LinsysError, Result};
use crate::util::round_to;
use crate::vector::Vector;

/// Line `a·x + b·y = k`.
#[derive(Clone, Debug, PartialEq)]
pub struct Line(Hyperplane);

/// Outcome of `Line::intersect_with`.
#[derive(Clone, Debug, PartialEq)]
pub enum Intersection {
    /// Both lines are the same point set.
    Coincident(Line),
    /// Unique intersection point (rounded to `DISPLAY_PLACES`).
    Point(Vector),
    /// Parallel and distinct.
    Empty,
}

impl Line {
    pub const DIMENSION: usize = 2;

    /// Fails with `DimensionMismatch` unless `normal_vector` is two-dimensional.
    pub fn new(normal_vector: Vector, constant_term: f64) -> Result<Self> {
        Self::try_from(Hyperplane::new(normal_vector, constant_term))
    }

    pub fn from_coefficients(a: f64, b: f64, k: f64) -> Self {
        Self(Hyperplane::new(
            Vector::from_dvector(DVector::from_vec(vec![a, b])),
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

    /// Direction `(b, -a)` along the line for normal `(a, b)`.
    pub fn direction_vector(&self) -> Vector {
        let n = self.0.normal_vector();
        Vector::from_dvector(DVector::from_vec(vec![n[1], -n[0]]))
    }

    /// Intersection by Cramer's rule.
    ///
    /// Returns `Coincident` for equal lines and `Empty` for distinct parallel ones.
    pub fn intersect_with(&self, other: &Line) -> Intersection {
        self.intersect_with_places(other, DISPLAY_PLACES)
    }

    pub fn intersect_with_places(&self, other: &Line, places: u32) -> Intersection {
        if self == other {
            return Intersection::Coincident(self.clone());
        }
        if self.0.is_parallel(&other.0) {
            return Intersection::Empty;
        }
        let (a, b) = (self.0.normal_vector()[0], self.0.normal_vector()[1]);
        let (c, d) = (other.0.normal_vector()[0], other.0.normal_vector()[1]);
        let k1 = self.0.constant_term();
        let k2 = other.0.constant_term();
        let det = a * d - b * c;
        let x = round_to((d * k1 - b * k2) / det, places);
        let y = round_to((a * k2 - c * k1) / det, places);
        Intersection::Point(Vector::from_dvector(DVector::from_vec(vec![x, y])))
    }
}

impl Default for Line {
    fn default() -> Self {
        Self(Hyperplane::new(
            Vector::from_dvector(DVector::zeros(Self::DIMENSION)),
            0.0,
        ))
    }
}

impl TryFrom<Hyperplane> for Line {
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

impl From<Line> for Hyperplane {
    fn from(l: Line) -> Self {
        l.0
    }
}

impl PartialEq<Line> for Hyperplane {
    fn eq(&self, other: &Line) -> bool {
        *self == other.0
    }
}

impl PartialEq<Hyperplane> for Line {
    fn eq(&self, other: &Hyperplane) -> bool {
        self.0 == *other
    }
}

impl Deref for Line {
    type Target = Hyperplane;
    fn deref(&self) -> &Hyperplane {
        &self.0
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

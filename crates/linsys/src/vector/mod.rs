//! Fixed-dimension real vectors.
//!
//! - `Vector` wraps a non-empty `DVector<f64>`; the dimension never changes and
//!   every operation returns a fresh value.
//! - `dot` rounds to `cfg::DOT_PLACES` so later zero tests (orthogonality,
//!   parallelism) are not fooled by floating noise.
//! - Equality is exact coordinate equality. Values that went through different
//!   arithmetic may compare unequal; compare with a tolerance when that matters.

use std::fmt;
use std::ops::Index;

use nalgebra::{DVector, Vector3};

use crate::cfg::{DOT_PLACES, EPS_ZERO};
use crate::error::{LinsysError, Result};
use crate::util::{is_near_zero, round_to};

/// Unit for `Vector::angle_with`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// Real vector of fixed dimension `>= 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    coords: DVector<f64>,
}

impl Vector {
    /// Build from coordinates; fails with `EmptyInput` on an empty sequence.
    pub fn new(coords: impl Into<Vec<f64>>) -> Result<Self> {
        let coords = coords.into();
        if coords.is_empty() {
            return Err(LinsysError::EmptyInput);
        }
        Ok(Self {
            coords: DVector::from_vec(coords),
        })
    }

    /// Zero vector of the given dimension.
    pub fn zeros(dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(LinsysError::EmptyInput);
        }
        Ok(Self::from_dvector(DVector::zeros(dimension)))
    }

    /// Callers guarantee `coords` is non-empty.
    #[inline]
    pub(crate) fn from_dvector(coords: DVector<f64>) -> Self {
        debug_assert!(!coords.is_empty(), "vector dimension must be >= 1");
        Self { coords }
    }

    #[inline]
    pub(crate) fn as_dvector(&self) -> &DVector<f64> {
        &self.coords
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn coordinates(&self) -> &[f64] {
        self.coords.as_slice()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.coords.iter().copied()
    }

    #[inline]
    fn check_same_dimension(&self, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(LinsysError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }

    pub fn plus(&self, v: &Vector) -> Result<Vector> {
        self.check_same_dimension(v)?;
        Ok(Self::from_dvector(&self.coords + &v.coords))
    }

    pub fn minus(&self, v: &Vector) -> Result<Vector> {
        self.check_same_dimension(v)?;
        Ok(Self::from_dvector(&self.coords - &v.coords))
    }

    pub fn times_scalar(&self, c: f64) -> Vector {
        Self::from_dvector(&self.coords * c)
    }

    /// Euclidean norm, computed on coordinates scaled by the largest magnitude
    /// so huge or tiny entries neither overflow nor underflow.
    pub fn magnitude(&self) -> f64 {
        match self.scaled() {
            Some((scale, unit_max)) => scale * unit_max.norm(),
            None => 0.0,
        }
    }

    /// Unit vector in the same direction; `ZeroVector` only if every coordinate is 0.
    pub fn normalized(&self) -> Result<Vector> {
        let (_, unit_max) = self.scaled().ok_or(LinsysError::ZeroVector)?;
        let norm = unit_max.norm();
        Ok(Self::from_dvector(unit_max / norm))
    }

    /// `(max |x_i|, self / max |x_i|)`, or `None` for the zero vector.
    fn scaled(&self) -> Option<(f64, DVector<f64>)> {
        let scale = self.coords.amax();
        if scale == 0.0 {
            return None;
        }
        Some((scale, &self.coords / scale))
    }

    /// Inner product rounded to `DOT_PLACES` decimal places.
    pub fn dot(&self, v: &Vector) -> Result<f64> {
        self.dot_rounded(v, DOT_PLACES)
    }

    /// Inner product rounded to `places` decimal places.
    pub fn dot_rounded(&self, v: &Vector, places: u32) -> Result<f64> {
        self.check_same_dimension(v)?;
        Ok(round_to(self.coords.dot(&v.coords), places))
    }

    /// Angle between `self` and `v`; `ZeroVector` if either operand is zero.
    pub fn angle_with(&self, v: &Vector, unit: AngleUnit) -> Result<f64> {
        let u1 = self.normalized()?;
        let u2 = v.normalized()?;
        // The rounded dot of unit vectors stays in [-1, 1]; clamp anyway for acos.
        let radians = u1.dot(&u2)?.clamp(-1.0, 1.0).acos();
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        })
    }

    /// Every coordinate is below `EPS_ZERO` in magnitude.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.is_zero_eps(EPS_ZERO)
    }

    #[inline]
    pub fn is_zero_eps(&self, eps: f64) -> bool {
        self.coords.iter().all(|&x| is_near_zero(x, eps))
    }

    /// Zero vectors are parallel to everything; otherwise the angle must be exactly 0 or π.
    ///
    /// Vectors of different dimension are never parallel.
    pub fn is_parallel(&self, v: &Vector) -> bool {
        if self.dimension() != v.dimension() {
            return false;
        }
        if self.is_zero() || v.is_zero() {
            return true;
        }
        matches!(
            self.angle_with(v, AngleUnit::Radians),
            Ok(angle) if angle == 0.0 || angle == std::f64::consts::PI
        )
    }

    /// The rounded dot product is exactly zero. Different dimensions are never orthogonal.
    pub fn is_orthogonal(&self, v: &Vector) -> bool {
        matches!(self.dot(v), Ok(d) if d == 0.0)
    }

    /// Projection onto `basis`: `(self·û) û`.
    ///
    /// Fails with `NoUniqueComponent` when `basis` is the zero vector.
    pub fn component_parallel_to(&self, basis: &Vector) -> Result<Vector> {
        let unit_basis = basis.normalized().map_err(|e| match e {
            LinsysError::ZeroVector => LinsysError::NoUniqueComponent,
            other => other,
        })?;
        self.check_same_dimension(&unit_basis)?;
        // Unrounded weight; rounding here would leak into the orthogonal part.
        let weight = self.coords.dot(&unit_basis.coords);
        Ok(unit_basis.times_scalar(weight))
    }

    /// `self - component_parallel_to(basis)`.
    pub fn component_orthogonal_to(&self, basis: &Vector) -> Result<Vector> {
        let projection = self.component_parallel_to(basis)?;
        self.minus(&projection)
    }

    /// Cross product in R³. Two-dimensional operands get a zero third coordinate.
    pub fn cross(&self, v: &Vector) -> Result<Vector> {
        let a = self.embed_3d()?;
        let b = v.embed_3d()?;
        let c = a.cross(&b);
        Ok(Self::from_dvector(DVector::from_column_slice(c.as_slice())))
    }

    fn embed_3d(&self) -> Result<Vector3<f64>> {
        match self.coordinates() {
            &[x, y] => Ok(Vector3::new(x, y, 0.0)),
            &[x, y, z] => Ok(Vector3::new(x, y, z)),
            _ => Err(LinsysError::DimensionUnsupported(self.dimension())),
        }
    }

    pub fn area_of_parallelogram_with(&self, v: &Vector) -> Result<f64> {
        Ok(self.cross(v)?.magnitude())
    }

    pub fn area_of_triangle_with(&self, v: &Vector) -> Result<f64> {
        Ok(self.area_of_parallelogram_with(v)? / 2.0)
    }
}

impl Index<usize> for Vector {
    type Output = f64;
    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.coords[i]
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = LinsysError;
    fn try_from(coords: Vec<f64>) -> Result<Self> {
        Self::new(coords)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, x) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests;

//! Solution classification and parametrization of the solution set.
//!
//! From the RREF:
//! - a row `0 = k` with `k` nonzero means no solution;
//! - one pivot per variable means a unique solution;
//! - otherwise every free (pivot-less) column contributes one direction vector.

use std::fmt::{self, Write};

use nalgebra::DVector;
use tracing::debug;

use super::LinearSystem;
use crate::cfg::DISPLAY_PLACES;
use crate::error::{LinsysError, Result};
use crate::util::round_to;
use crate::vector::Vector;

/// Cardinality of a solution set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolutionKind {
    Unique,
    Infinite,
    Inconsistent,
}

/// Solution set of a `LinearSystem`.
#[derive(Clone, Debug, PartialEq)]
pub enum Solution {
    Unique(Vector),
    Infinite(Parametrization),
    Inconsistent,
}

impl Solution {
    pub fn kind(&self) -> SolutionKind {
        match self {
            Solution::Unique(_) => SolutionKind::Unique,
            Solution::Infinite(_) => SolutionKind::Infinite,
            Solution::Inconsistent => SolutionKind::Inconsistent,
        }
    }
}

/// Affine solution set `basepoint + Σ tᵢ·direction_vectors[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Parametrization {
    basepoint: Vector,
    direction_vectors: Vec<Vector>,
}

impl Parametrization {
    /// Every direction vector must share the basepoint's dimension.
    pub fn new(basepoint: Vector, direction_vectors: Vec<Vector>) -> Result<Self> {
        if let Some(bad) = direction_vectors
            .iter()
            .find(|d| d.dimension() != basepoint.dimension())
        {
            return Err(LinsysError::DimensionMismatch {
                expected: basepoint.dimension(),
                found: bad.dimension(),
            });
        }
        Ok(Self {
            basepoint,
            direction_vectors,
        })
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.basepoint.dimension()
    }

    #[inline]
    pub fn basepoint(&self) -> &Vector {
        &self.basepoint
    }

    #[inline]
    pub fn direction_vectors(&self) -> &[Vector] {
        &self.direction_vectors
    }

    /// Point for parameter values `t` (one per direction vector).
    pub fn point_at(&self, t: &[f64]) -> Result<Vector> {
        if t.len() != self.direction_vectors.len() {
            return Err(LinsysError::DimensionMismatch {
                expected: self.direction_vectors.len(),
                found: t.len(),
            });
        }
        let mut p = self.basepoint.as_dvector().clone();
        for (d, &ti) in self.direction_vectors.iter().zip(t) {
            p += d.as_dvector() * ti;
        }
        Ok(Vector::from_dvector(p))
    }
}

/// One line per coordinate, e.g. `x_1 = 2 - 0.5 t_1 + t_2`.
impl fmt::Display for Parametrization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.dimension() {
            if i > 0 {
                f.write_char('\n')?;
            }
            write!(f, "x_{} = {}", i + 1, round_to(self.basepoint[i], DISPLAY_PLACES))?;
            for (j, d) in self.direction_vectors.iter().enumerate() {
                let c = round_to(d[i], DISPLAY_PLACES);
                if c == 0.0 {
                    continue;
                }
                let sign = if c < 0.0 { '-' } else { '+' };
                write!(f, " {sign} ")?;
                if c.abs() != 1.0 {
                    write!(f, "{} ", c.abs())?;
                }
                write!(f, "t_{}", j + 1)?;
            }
        }
        Ok(())
    }
}

impl LinearSystem {
    /// Solve via RREF.
    pub fn compute_solution(&self) -> Solution {
        let rref = self.compute_rref();
        if rref.has_inconsistent_row() {
            debug!(kind = ?SolutionKind::Inconsistent, "classified system");
            return Solution::Inconsistent;
        }

        let dimension = rref.dimension();
        let pivots = rref.indices_of_first_nonzero_terms_in_each_row();
        let mut is_pivot_column = vec![false; dimension];
        let mut basepoint = DVector::zeros(dimension);
        for (row, pivot) in pivots.iter().enumerate() {
            if let Some(column) = *pivot {
                is_pivot_column[column] = true;
                basepoint[column] = rref[row].constant_term() / rref.coefficient(row, column);
            }
        }
        let basepoint = Vector::from_dvector(basepoint);

        let free_columns: Vec<usize> = (0..dimension).filter(|&c| !is_pivot_column[c]).collect();
        if free_columns.is_empty() {
            debug!(kind = ?SolutionKind::Unique, "classified system");
            return Solution::Unique(basepoint);
        }

        let direction_vectors = free_columns
            .iter()
            .map(|&free| {
                let mut d = DVector::zeros(dimension);
                d[free] = 1.0;
                for (row, pivot) in pivots.iter().enumerate() {
                    if let Some(column) = *pivot {
                        d[column] = -rref.coefficient(row, free) / rref.coefficient(row, column);
                    }
                }
                Vector::from_dvector(d)
            })
            .collect();

        debug!(
            kind = ?SolutionKind::Infinite,
            free = free_columns.len(),
            "classified system"
        );
        Solution::Infinite(Parametrization {
            basepoint,
            direction_vectors,
        })
    }

    /// Cardinality of the solution set.
    pub fn classify(&self) -> SolutionKind {
        self.compute_solution().kind()
    }
}

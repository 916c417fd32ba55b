//! Systems of linear equations and Gaussian elimination.
//!
//! Purpose
//! - Hold an ordered list of same-dimension hyperplanes (row `i` = equation `i`).
//! - Provide the three elementary row operations, forward elimination to
//!   triangular form, back substitution to RREF, and solution classification.
//!
//! Conventions
//! - Row operations replace whole `Hyperplane` values; rows are never mutated in place.
//! - `compute_triangular_form` / `compute_rref` work on a clone; `self` is untouched.
//! - Zero tests use `NumCfg::eps_zero` from the system's own configuration.
//! - Out-of-range row indices are errors (`RowOutOfRange`), not silent no-ops.

mod elim;
mod solve;

pub use solve::{Parametrization, Solution, SolutionKind};

use std::fmt;
use std::ops::Index;

use crate::cfg::NumCfg;
use crate::error::{LinsysError, Result};
use crate::hyperplane::{first_nonzero_index_eps, Hyperplane};
use crate::util::is_near_zero;
use crate::vector::Vector;

/// Ordered system of linear equations sharing one dimension.
#[derive(Clone, Debug)]
pub struct LinearSystem {
    planes: Vec<Hyperplane>,
    dimension: usize,
    cfg: NumCfg,
}

impl LinearSystem {
    /// Fails with `EmptyInput` for no rows and `DimensionMismatch` for mixed dimensions.
    pub fn new<I, P>(planes: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Hyperplane>,
    {
        let planes: Vec<Hyperplane> = planes.into_iter().map(Into::into).collect();
        let dimension = planes.first().ok_or(LinsysError::EmptyInput)?.dimension();
        if let Some(bad) = planes.iter().find(|p| p.dimension() != dimension) {
            return Err(LinsysError::DimensionMismatch {
                expected: dimension,
                found: bad.dimension(),
            });
        }
        Ok(Self {
            planes,
            dimension,
            cfg: NumCfg::default(),
        })
    }

    /// Replace the numeric configuration used by elimination and classification.
    ///
    /// Rows rebuilt by row operations detect a zero normal with `cfg.eps_zero`,
    /// while hyperplanes built outside the system use `cfg::EPS_ZERO`. Under a
    /// looser threshold a rebuilt row may have no basepoint and so compare
    /// unequal to the same coefficients constructed directly.
    #[inline]
    pub fn with_cfg(mut self, cfg: NumCfg) -> Self {
        self.cfg = cfg;
        self
    }

    #[inline]
    pub fn cfg(&self) -> NumCfg {
        self.cfg
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of equations.
    #[inline]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Always false for a constructed system; present for `len` symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    #[inline]
    pub fn planes(&self) -> &[Hyperplane] {
        &self.planes
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Hyperplane> {
        self.planes.iter()
    }

    #[inline]
    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.planes.len() {
            return Err(LinsysError::RowOutOfRange {
                row,
                len: self.planes.len(),
            });
        }
        Ok(())
    }

    /// Replace equation `row`; the new row must share the system's dimension.
    pub fn set_row(&mut self, row: usize, plane: impl Into<Hyperplane>) -> Result<()> {
        self.check_row(row)?;
        let plane = plane.into();
        if plane.dimension() != self.dimension {
            return Err(LinsysError::DimensionMismatch {
                expected: self.dimension,
                found: plane.dimension(),
            });
        }
        self.planes[row] = plane;
        Ok(())
    }

    pub fn swap_rows(&mut self, row1: usize, row2: usize) -> Result<()> {
        self.check_row(row1)?;
        self.check_row(row2)?;
        self.planes.swap(row1, row2);
        Ok(())
    }

    /// Replace `row` by `coefficient · row`.
    ///
    /// A coefficient within `eps_zero` of zero is rejected with `ZeroCoefficient`:
    /// it would turn the equation into `0 = 0`, which is not an elementary operation.
    pub fn multiply_coefficient_and_row(&mut self, coefficient: f64, row: usize) -> Result<()> {
        self.check_row(row)?;
        if is_near_zero(coefficient, self.cfg.eps_zero) {
            return Err(LinsysError::ZeroCoefficient);
        }
        self.planes[row] = self.scaled_row(row, coefficient);
        Ok(())
    }

    /// Replace `row_to_be_added_to` by `row_to_be_added_to + coefficient · row_to_add`.
    pub fn add_multiple_times_row_to_row(
        &mut self,
        coefficient: f64,
        row_to_add: usize,
        row_to_be_added_to: usize,
    ) -> Result<()> {
        self.check_row(row_to_add)?;
        self.check_row(row_to_be_added_to)?;
        self.planes[row_to_be_added_to] =
            self.combined_row(coefficient, row_to_add, row_to_be_added_to, None);
        Ok(())
    }

    /// Row indices are checked by the caller.
    fn scaled_row(&self, row: usize, coefficient: f64) -> Hyperplane {
        let p = &self.planes[row];
        Hyperplane::new_eps(
            p.normal_vector().times_scalar(coefficient),
            p.constant_term() * coefficient,
            self.cfg.eps_zero,
        )
    }

    /// `target + coefficient · source`; row indices are checked by the caller.
    ///
    /// `cleared_column` is set to exactly zero afterwards (elimination residue).
    fn combined_row(
        &self,
        coefficient: f64,
        source: usize,
        target: usize,
        cleared_column: Option<usize>,
    ) -> Hyperplane {
        let s = &self.planes[source];
        let t = &self.planes[target];
        let mut normal =
            t.normal_vector().as_dvector() + s.normal_vector().as_dvector() * coefficient;
        if let Some(column) = cleared_column {
            normal[column] = 0.0;
        }
        Hyperplane::new_eps(
            Vector::from_dvector(normal),
            t.constant_term() + s.constant_term() * coefficient,
            self.cfg.eps_zero,
        )
    }

    #[inline]
    fn coefficient(&self, row: usize, column: usize) -> f64 {
        self.planes[row].normal_vector()[column]
    }

    #[inline]
    fn is_zero(&self, x: f64) -> bool {
        is_near_zero(x, self.cfg.eps_zero)
    }

    /// First row at or below `from_row` with a nonzero coefficient in `column`.
    pub fn search_row_with_nonzero_coefficient(&self, from_row: usize, column: usize) -> Option<usize> {
        if column >= self.dimension {
            return None;
        }
        (from_row..self.planes.len()).find(|&row| !self.is_zero(self.coefficient(row, column)))
    }

    /// Pivot column of every row; `None` for rows whose normal vector is zero.
    pub fn indices_of_first_nonzero_terms_in_each_row(&self) -> Vec<Option<usize>> {
        self.planes
            .iter()
            .map(|p| first_nonzero_index_eps(p.normal_vector(), self.cfg.eps_zero))
            .collect()
    }

    /// Some row reads `0 = k` with `k` nonzero.
    pub fn has_inconsistent_row(&self) -> bool {
        self.planes.iter().any(|p| {
            first_nonzero_index_eps(p.normal_vector(), self.cfg.eps_zero).is_none()
                && !self.is_zero(p.constant_term())
        })
    }
}

impl Index<usize> for LinearSystem {
    type Output = Hyperplane;
    #[inline]
    fn index(&self, row: usize) -> &Hyperplane {
        &self.planes[row]
    }
}

impl<'a> IntoIterator for &'a LinearSystem {
    type Item = &'a Hyperplane;
    type IntoIter = std::slice::Iter<'a, Hyperplane>;
    fn into_iter(self) -> Self::IntoIter {
        self.planes.iter()
    }
}

/// Row-wise geometric equality; the numeric configuration is not compared.
impl PartialEq for LinearSystem {
    fn eq(&self, other: &Self) -> bool {
        self.planes == other.planes
    }
}

impl fmt::Display for LinearSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Linear System:")?;
        for (i, p) in self.planes.iter().enumerate() {
            write!(f, "\nEquation {}: {}", i + 1, p)?;
        }
        Ok(())
    }
}

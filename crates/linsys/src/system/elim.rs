//! Forward elimination (triangular form) and back substitution (RREF).

use tracing::{debug, trace};

use super::LinearSystem;

impl LinearSystem {
    /// Row-echelon form of a copy of `self`.
    ///
    /// A pivot cursor walks the columns left to right and never moves back. For
    /// each row: find a nonzero entry at the cursor (swapping up a lower row if
    /// needed, advancing the cursor if the column is exhausted), clear that column
    /// in every row below, then advance. Rows that end up with a zero normal are
    /// redundant (`0 = 0`) or inconsistent (`0 = k`); see `has_inconsistent_row`.
    pub fn compute_triangular_form(&self) -> LinearSystem {
        let mut system = self.clone();
        let num_equations = system.len();
        let num_variables = system.dimension();
        let mut column = 0usize;
        let mut swaps = 0usize;
        let mut eliminations = 0usize;

        for row in 0..num_equations {
            while column < num_variables {
                if system.is_zero(system.coefficient(row, column)) {
                    match system.search_row_with_nonzero_coefficient(row + 1, column) {
                        Some(found) => {
                            trace!(row, column, found, "swap pivot row");
                            system.planes.swap(row, found);
                            swaps += 1;
                        }
                        None => {
                            trace!(row, column, "column exhausted");
                            column += 1;
                            continue;
                        }
                    }
                }
                eliminations += system.clear_column(row, column, row + 1..num_equations);
                column += 1;
                break;
            }
        }

        debug!(
            equations = num_equations,
            variables = num_variables,
            swaps,
            eliminations,
            "triangular form"
        );
        system
    }

    /// Reduced row-echelon form of a copy of `self`.
    ///
    /// Starts from the triangular form; walking the pivot rows bottom-up, each
    /// pivot is scaled to 1 and its column is cleared in every row above.
    pub fn compute_rref(&self) -> LinearSystem {
        let mut system = self.compute_triangular_form();
        let pivots = system.indices_of_first_nonzero_terms_in_each_row();
        let mut eliminations = 0usize;

        for (row, pivot) in pivots.iter().enumerate().rev() {
            let Some(column) = *pivot else {
                continue;
            };
            let scale = 1.0 / system.coefficient(row, column);
            system.planes[row] = system.scaled_row(row, scale);
            eliminations += system.clear_column(row, column, 0..row);
        }

        debug!(
            equations = system.len(),
            pivots = pivots.iter().flatten().count(),
            eliminations,
            "reduced row-echelon form"
        );
        system
    }

    /// Clear `column` in `rows` using the pivot at (`pivot_row`, `column`).
    ///
    /// Returns the number of rows that were changed.
    fn clear_column(
        &mut self,
        pivot_row: usize,
        column: usize,
        rows: std::ops::Range<usize>,
    ) -> usize {
        let pivot = self.coefficient(pivot_row, column);
        let mut changed = 0;
        for row in rows {
            let current = self.coefficient(row, column);
            if self.is_zero(current) {
                continue;
            }
            let coefficient = -current / pivot;
            trace!(pivot_row, row, column, coefficient, "eliminate");
            self.planes[row] = self.combined_row(coefficient, pivot_row, row, Some(column));
            changed += 1;
        }
        changed
    }
}

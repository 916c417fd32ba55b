//! Equation rendering, e.g. `x_1 - 2.5x_2 + x_3 = 4`.
//!
//! Rules
//! - Coefficients and the constant are rounded to `DISPLAY_PLACES`.
//! - Terms whose rounded coefficient is zero are skipped.
//! - A coefficient of magnitude 1 prints without its numeral.
//! - The leading term (first pivot) carries only its sign; later terms use `+ `/`- `.
//! - A normal vector without printable terms renders as `0 = k`.

use std::fmt::{self, Write};

use super::{first_nonzero_index, Hyperplane};
use crate::cfg::DISPLAY_PLACES;
use crate::util::round_to;

fn write_coefficient<W: Write>(out: &mut W, coefficient: f64, is_initial_term: bool) -> fmt::Result {
    let c = round_to(coefficient, DISPLAY_PLACES);
    if c < 0.0 {
        out.write_char('-')?;
    }
    if c > 0.0 && !is_initial_term {
        out.write_char('+')?;
    }
    if !is_initial_term {
        out.write_char(' ')?;
    }
    if c.abs() != 1.0 {
        write!(out, "{}", c.abs())?;
    }
    Ok(())
}

impl fmt::Display for Hyperplane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.normal_vector();
        let mut wrote_term = false;
        if let Some(initial_index) = first_nonzero_index(n) {
            for (i, coefficient) in n.iter().enumerate() {
                if round_to(coefficient, DISPLAY_PLACES) == 0.0 {
                    continue;
                }
                if wrote_term {
                    f.write_char(' ')?;
                }
                wrote_term = true;
                write_coefficient(f, coefficient, i == initial_index)?;
                write!(f, "x_{}", i + 1)?;
            }
        }
        // no pivot, or every coefficient vanished after rounding
        if !wrote_term {
            f.write_char('0')?;
        }
        write!(f, " = {}", round_to(self.constant_term(), DISPLAY_PLACES))
    }
}

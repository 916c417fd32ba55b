//! Tolerance defaults and the `NumCfg` bundle.
//!
//! Policy
//! - Defaults are fixed constants. Callers that need different thresholds pass a
//!   `NumCfg` (or a bare `eps`) explicitly; nothing is stored process-wide.

/// Magnitude below which a coefficient counts as zero (pivot search, basepoints).
pub const EPS_ZERO: f64 = 1e-10;
/// Decimal places kept by `Vector::dot` to absorb floating noise before zero tests.
pub const DOT_PLACES: u32 = 10;
/// Decimal places used for rendering equations and for line intersections.
pub const DISPLAY_PLACES: u32 = 3;

/// Numeric configuration (tolerances and rounding).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumCfg {
    pub eps_zero: f64,
    pub dot_places: u32,
    pub display_places: u32,
}

impl Default for NumCfg {
    fn default() -> Self {
        Self {
            eps_zero: EPS_ZERO,
            dot_places: DOT_PLACES,
            display_places: DISPLAY_PLACES,
        }
    }
}

impl NumCfg {
    /// Same rounding, different near-zero threshold.
    #[inline]
    pub fn with_eps_zero(self, eps_zero: f64) -> Self {
        Self { eps_zero, ..self }
    }
}

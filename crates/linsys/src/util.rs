//! Small numeric helpers: near-zero test and decimal rounding.

#[inline]
pub(crate) fn is_near_zero(x: f64, eps: f64) -> bool {
    x.abs() < eps
}

/// Round half away from zero to `places` decimal places.
///
/// Values whose scaled form overflows are returned unchanged.
#[inline]
pub(crate) fn round_to(x: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    let scaled = x * scale;
    if !scaled.is_finite() {
        return x;
    }
    // `+ 0.0` folds a negative zero into positive zero.
    scaled.round() / scale + 0.0
}

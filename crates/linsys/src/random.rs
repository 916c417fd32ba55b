//! Reproducible random systems for benchmarks and randomized tests.
//!
//! Model
//! - Coefficients are uniform in `[-coeff_bound, coeff_bound]`, optionally
//!   rounded to integers (integer systems keep elimination results readable).
//! - `draw_consistent_system` first draws a solution `x` and sets each constant
//!   to `n·x`, so the system is guaranteed to be consistent.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::DVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{LinsysError, Result};
use crate::hyperplane::Hyperplane;
use crate::system::LinearSystem;
use crate::vector::Vector;

/// Shape and coefficient distribution of a random system.
#[derive(Clone, Copy, Debug)]
pub struct SystemCfg {
    pub equations: usize,
    pub dimension: usize,
    /// Coefficients (and constants) lie in `[-coeff_bound, coeff_bound]`.
    pub coeff_bound: f64,
    /// Round every drawn value to the nearest integer.
    pub integer_coeffs: bool,
}

impl Default for SystemCfg {
    fn default() -> Self {
        Self {
            equations: 4,
            dimension: 3,
            coeff_bound: 10.0,
            integer_coeffs: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn next(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }

    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

fn draw_value<R: Rng>(rng: &mut R, cfg: &SystemCfg) -> f64 {
    let bound = cfg.coeff_bound.abs().max(f64::MIN_POSITIVE);
    let x = rng.gen_range(-bound..=bound);
    if cfg.integer_coeffs {
        x.round() + 0.0
    } else {
        x
    }
}

/// Random vector of `cfg.dimension` coordinates.
pub fn draw_vector<R: Rng>(rng: &mut R, cfg: &SystemCfg) -> Result<Vector> {
    if cfg.dimension == 0 {
        return Err(LinsysError::EmptyInput);
    }
    let coords = DVector::from_fn(cfg.dimension, |_, _| draw_value(&mut *rng, cfg));
    Ok(Vector::from_dvector(coords))
}

/// Random system with independent random constants (usually inconsistent when
/// there are more equations than variables).
pub fn draw_system(cfg: SystemCfg, tok: ReplayToken) -> Result<LinearSystem> {
    let mut rng = tok.to_std_rng();
    let planes = (0..cfg.equations)
        .map(|_| {
            let n = draw_vector(&mut rng, &cfg)?;
            Ok(Hyperplane::new(n, draw_value(&mut rng, &cfg)))
        })
        .collect::<Result<Vec<_>>>()?;
    LinearSystem::new(planes)
}

/// Random system together with a point that satisfies every equation.
pub fn draw_consistent_system(cfg: SystemCfg, tok: ReplayToken) -> Result<(LinearSystem, Vector)> {
    let mut rng = tok.to_std_rng();
    let solution = draw_vector(&mut rng, &cfg)?;
    let planes = (0..cfg.equations)
        .map(|_| {
            let n = draw_vector(&mut rng, &cfg)?;
            let k = n.as_dvector().dot(solution.as_dvector());
            Ok(Hyperplane::new(n, k))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((LinearSystem::new(planes)?, solution))
}

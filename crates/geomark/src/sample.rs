//! Approximately normal samples from a uniform source.
//!
//! The sum of [`IRWIN_HALL_TERMS`] uniform `[0, 1)` draws has mean 6 and
//! variance 1, so shifting it by 6 gives an approximate standard normal.
//! This is an approximation: results are bounded to `mu ± 6 sigma` and the
//! tails are lighter than a true normal distribution. Do not use it where
//! tail probabilities matter.

use rand::{Rng, distr::Distribution};
use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// Number of uniform draws consumed per sample.
pub const IRWIN_HALL_TERMS: usize = 12;

/// One approximately `Normal(mu, sigma²)` sample, consuming exactly
/// [`IRWIN_HALL_TERMS`] draws from `rng`.
pub fn next_double_norm<R: Rng + ?Sized>(rng: &mut R, mu: f64, sigma: f64) -> f64 {
    let sum: f64 = (0..IRWIN_HALL_TERMS).map(|_| rng.random::<f64>()).sum();
    (sum - 6.0) * sigma + mu
}

/// [`next_double_norm`] with fixed parameters, usable as a
/// [`Distribution`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrwinHall {
    mu: f64,
    sigma: f64,
}

impl IrwinHall {
    pub fn new(mu: f64, sigma: f64) -> Result<Self, GeoError> {
        Ok(Self {
            mu: GeoError::check_finite("mu", mu)?,
            sigma: GeoError::check_sigma("sigma", sigma)?,
        })
    }

    /// `mu = 0`, `sigma = 1`.
    pub const fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
        }
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Closed interval every sample falls into.
    pub fn bounds(&self) -> (f64, f64) {
        let half_width = 6.0 * self.sigma;
        (self.mu - half_width, self.mu + half_width)
    }
}

impl Default for IrwinHall {
    fn default() -> Self {
        Self::standard()
    }
}

impl Distribution<f64> for IrwinHall {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        next_double_norm(rng, self.mu, self.sigma)
    }
}

use std::io::{Error, ErrorKind};

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::streams::SignalSource;

/// Simulated altitude sensor: a fixed true level observed through additive
/// Gaussian noise.
///
/// Produces `max_samples` values of `level + N(0, noise_std)` from a seeded
/// generator, so the same seed always yields the same sequence.
#[derive(Debug)]
pub struct GaussianLevelGenerator {
    seed: u64,
    rng: StdRng,
    level: f64,
    noise: Normal<f64>,
    noise_std: f64,
    max_samples: Option<usize>,
    produced: usize,
}

impl GaussianLevelGenerator {
    pub fn new(
        level: f64,
        noise_std: f64,
        max_samples: Option<usize>,
        seed: u64,
    ) -> Result<Self, Error> {
        if !level.is_finite() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "level must be a finite number",
            ));
        }
        if !noise_std.is_finite() || noise_std < 0.0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "noise_std must be finite and >= 0",
            ));
        }
        let noise = Normal::new(0.0, noise_std)
            .map_err(|e| Error::new(ErrorKind::InvalidInput, e.to_string()))?;

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            level,
            noise,
            noise_std,
            max_samples,
            produced: 0,
        })
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn noise_std(&self) -> f64 {
        self.noise_std
    }
}

impl SignalSource for GaussianLevelGenerator {
    fn has_more_samples(&self) -> bool {
        self.max_samples.is_none_or(|max| self.produced < max)
    }

    fn next_sample(&mut self) -> Option<f64> {
        if !self.has_more_samples() {
            return None;
        }
        self.produced += 1;
        Some(self.level + self.noise.sample(&mut self.rng))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}

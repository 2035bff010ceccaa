//! Gaussian perturbation of action parameters.
//!
//! The sampler is the only source of non-determinism in a render. It owns its
//! generator, so each render (or each thread rendering in parallel) should get
//! its own instance; share one only if reproducibility across renders does not
//! matter.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draws perturbed values around a nominal parameter.
#[derive(Debug, Clone)]
pub struct Sampler<R: RngCore = ChaCha8Rng> {
    rng: R,
    draws: u64,
}

impl<R: RngCore> Sampler<R> {
    /// Wraps a caller-supplied generator.
    pub fn new(rng: R) -> Self {
        Self { rng, draws: 0 }
    }

    /// Returns `nominal` when `std_dev <= 0`, otherwise one draw from
    /// `N(nominal, std_dev²)`.
    ///
    /// The deterministic path never touches the generator.
    pub fn sample(&mut self, nominal: f64, std_dev: f64) -> f64 {
        if std_dev <= 0.0 {
            return nominal;
        }
        nominal + std_dev * self.standard_normal()
    }

    /// Number of Gaussian draws taken so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Consumes the sampler, handing back the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Box-Muller transform over two uniform draws.
    fn standard_normal(&mut self) -> f64 {
        self.draws += 1;
        let u1: f64 = self.rng.random::<f64>().max(1e-300); // avoid ln(0)
        let u2: f64 = self.rng.random();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }
}

impl Sampler<ChaCha8Rng> {
    /// Reproducible sampler: identical seeds yield identical sequences.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Sampler seeded from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

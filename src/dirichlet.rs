use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Gamma};
use statrs::function::gamma::ln_gamma;

use crate::prior::{Prior, PriorError, Result};

/// Symmetric Dirichlet prior over the weight vector of an ensemble.
///
/// With concentration `alpha` and `k` members carrying normalized weights
/// `w_i`, the log density is
///
/// ```text
/// ln G(k a) - k ln G(a) + (a - 1) sum(ln w_i)
/// ```
///
/// `alpha = 1` is flat over the simplex, `alpha > 1` pulls toward equal
/// weights, `alpha < 1` concentrates mass on a few members. Weights are
/// taken as already normalized by the engine that owns them.
pub struct DirichletPrior<F> {
    alpha: f64,
    weight: F,
}

impl<F> DirichletPrior<F> {
    /// Create a symmetric Dirichlet prior with the given concentration and
    /// an accessor that reads one structure's weight.
    ///
    /// Fails with [`PriorError::InvalidConfiguration`] unless `alpha` is
    /// finite and positive.
    pub fn new(alpha: f64, weight: F) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(PriorError::InvalidConfiguration(format!(
                "concentration must be finite and positive, got {alpha}"
            )));
        }
        debug!("dirichlet prior with concentration {alpha}");
        Ok(DirichletPrior { alpha, weight })
    }

    /// Concentration parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Draw one normalized weight vector for `k` members from the prior,
    /// via `k` independent Gamma(alpha, 1) draws normalized by their sum.
    pub fn sample_weights<R: Rng + ?Sized>(&self, k: usize, rng: &mut R) -> Result<Vec<f64>> {
        if k == 0 {
            return Err(PriorError::InvalidArguments(
                "cannot draw weights for an empty ensemble".into(),
            ));
        }
        let gamma = Gamma::new(self.alpha, 1.0).map_err(|err| {
            PriorError::InvalidConfiguration(format!("gamma construction failed: {err}"))
        })?;
        let mut weights: Vec<f64> = (0..k).map(|_| gamma.sample(rng)).collect();
        let total: f64 = weights.iter().sum();
        for weight in &mut weights {
            *weight /= total;
        }
        Ok(weights)
    }
}

impl<S, F> Prior<S> for DirichletPrior<F>
where
    F: Fn(&S) -> f64,
{
    type Arg = f64;

    fn extract_arg(&self, structure: &S) -> Result<f64> {
        Ok((self.weight)(structure))
    }

    fn logp(&self, args: &[f64]) -> Result<f64> {
        if args.is_empty() {
            return Err(PriorError::InvalidArguments(
                "dirichlet prior needs at least one weight".into(),
            ));
        }
        let k = args.len() as f64;
        let mut ln_weights = 0.0;
        for &weight in args {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(PriorError::InvalidArguments(format!(
                    "weights must be finite and positive, got {weight}"
                )));
            }
            ln_weights += weight.ln();
        }
        Ok(ln_gamma(k * self.alpha) - k * ln_gamma(self.alpha) + (self.alpha - 1.0) * ln_weights)
    }
}

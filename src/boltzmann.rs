use log::debug;

use crate::prior::{Prior, PriorError, Result};

/// Boltzmann prior over candidate ensembles.
///
/// Favors low-energy ensembles: with per-structure energies `E_i` the log
/// probability is `-beta * sum(E_i)`, up to the normalization constant over
/// ensemble space, which cancels during reweighting and is not computed.
///
/// The structure type stays opaque; the caller supplies an accessor that
/// reads one structure's energy.
pub struct BoltzmannPrior<F> {
    beta: f64,
    energy: F,
}

impl<F> BoltzmannPrior<F> {
    /// Create a Boltzmann prior with inverse temperature `beta` and the
    /// given energy accessor.
    ///
    /// Fails with [`PriorError::InvalidConfiguration`] unless `beta` is
    /// finite and positive.
    pub fn new(beta: f64, energy: F) -> Result<Self> {
        if !beta.is_finite() || beta <= 0.0 {
            return Err(PriorError::InvalidConfiguration(format!(
                "inverse temperature must be finite and positive, got {beta}"
            )));
        }
        debug!("boltzmann prior with inverse temperature {beta}");
        Ok(BoltzmannPrior { beta, energy })
    }

    /// Inverse temperature.
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl<S, F> Prior<S> for BoltzmannPrior<F>
where
    F: Fn(&S) -> f64,
{
    type Arg = f64;

    fn extract_arg(&self, structure: &S) -> Result<f64> {
        Ok((self.energy)(structure))
    }

    /// `-beta` times the total energy. An infinite energy gives `-inf`;
    /// NaN energies are rejected.
    fn logp(&self, args: &[f64]) -> Result<f64> {
        let mut total = 0.0;
        for &energy in args {
            if energy.is_nan() {
                return Err(PriorError::InvalidArguments(
                    "structure energy is NaN".into(),
                ));
            }
            total += energy;
        }
        Ok(-self.beta * total)
    }
}

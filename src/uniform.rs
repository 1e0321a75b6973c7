use log::debug;

use crate::prior::{Prior, PriorError, Result};

/// Uniform prior across the space of candidate ensembles.
///
/// Every one of the `n` candidate ensembles is equally probable a priori,
/// so the log probability is the constant `ln(1/n)` no matter which
/// structures make up the ensemble.
#[derive(Debug, Clone)]
pub struct UniformPrior {
    n: u64,
    logp: f64,
}

impl UniformPrior {
    /// Create a uniform prior over `n` candidate ensembles.
    ///
    /// Fails with [`PriorError::InvalidConfiguration`] if `n` is zero:
    /// `ln(1/0)` diverges and is not a log probability.
    pub fn new(n: u64) -> Result<Self> {
        if n == 0 {
            return Err(PriorError::InvalidConfiguration(
                "number of candidate ensembles must be at least 1".into(),
            ));
        }
        debug!("uniform prior over {n} candidate ensembles");
        Ok(UniformPrior {
            n,
            logp: -(n as f64).ln(),
        })
    }

    /// Number of candidate ensembles.
    pub fn n(&self) -> u64 {
        self.n
    }
}

impl<S> Prior<S> for UniformPrior {
    type Arg = ();

    /// A uniform prior needs nothing from a structure.
    fn extract_arg(&self, _structure: &S) -> Result<()> {
        Ok(())
    }

    /// The stored `ln(1/n)`, whatever the length or contents of `args`.
    fn logp(&self, _args: &[()]) -> Result<f64> {
        Ok(self.logp)
    }
}

//! Core abstraction for priors over candidate ensembles.
//!
//! Provides the `Prior` trait which defines the interface every prior
//! distribution must implement, and the error type shared by all variants.

use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PriorError {
    /// An operation was invoked on the bare contract instead of a
    /// concrete prior. This is an integration error, not a runtime
    /// condition, and is never recoverable.
    #[error("Prior operation is not implemented")]
    NotImplemented,
    /// The prior was constructed with parameters for which its density
    /// has no sensible value.
    #[error("Invalid prior configuration: {0}")]
    InvalidConfiguration(String),
    /// The argument sequence passed to `logp` cannot be assigned a
    /// log probability by this prior.
    #[error("Invalid ensemble arguments: {0}")]
    InvalidArguments(String),
}

pub type Result<T> = std::result::Result<T, PriorError>;

/// Prior distribution over candidate ensembles.
///
/// A reweighting engine constructs a concrete prior once, then for each
/// candidate structure calls [`extract_arg`](Prior::extract_arg) to pull out
/// whatever per-structure value the prior needs, collects those values into
/// an ordered sequence (one element per ensemble member), and finally calls
/// [`logp`](Prior::logp) with that sequence to obtain a single log
/// probability for the whole ensemble.
///
/// The trait is generic over the engine's structure type `S`, which stays
/// fully opaque here; variants that do need to look inside a structure take
/// an accessor closure at construction instead of constraining `S`.
///
/// Both operations are pure functions of their inputs and the prior's fixed
/// configuration. Nothing is mutated after construction, so a single
/// instance can be shared across threads without coordination.
///
/// The provided method bodies return [`PriorError::NotImplemented`]; the
/// trait by itself is a capability definition and every concrete variant
/// must override both operations.
pub trait Prior<S> {
    /// Per-structure argument consumed by [`logp`](Prior::logp). Variants
    /// that need nothing from a structure use `()`.
    type Arg;

    /// Derive the argument this prior needs from a single structure.
    ///
    /// Must not mutate the structure. Called once per ensemble member.
    fn extract_arg(&self, _structure: &S) -> Result<Self::Arg> {
        Err(PriorError::NotImplemented)
    }

    /// Log probability (natural log, possibly `-inf`) of the ensemble
    /// described by `args`, in the order the engine built the sequence.
    ///
    /// The contract places no constraint on `args`; each variant defines
    /// and validates its own expected shape.
    fn logp(&self, _args: &[Self::Arg]) -> Result<f64> {
        Err(PriorError::NotImplemented)
    }

    /// Extract the argument of every structure in order and evaluate
    /// [`logp`](Prior::logp) on the collected sequence.
    fn score_ensemble(&self, structures: &[S]) -> Result<f64> {
        let args: Vec<Self::Arg> = structures
            .iter()
            .map(|structure| self.extract_arg(structure))
            .try_collect()?;
        self.logp(&args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Undefined;

    impl Prior<u32> for Undefined {
        type Arg = ();
    }

    #[test]
    fn bare_contract_is_not_implemented() {
        assert!(matches!(
            Undefined.extract_arg(&7),
            Err(PriorError::NotImplemented)
        ));
        assert!(matches!(Undefined.logp(&[]), Err(PriorError::NotImplemented)));
        assert!(matches!(
            Undefined.score_ensemble(&[1, 2, 3]),
            Err(PriorError::NotImplemented)
        ));
    }
}

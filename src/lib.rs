//! Prior distributions over candidate structural ensembles, for use by
//! Bayesian reweighting engines that score ensembles against experimental
//! data. Log probabilities are natural logarithms and sum across priors.

pub(crate) mod boltzmann;
pub(crate) mod dirichlet;
pub(crate) mod prior;
pub(crate) mod uniform;

pub use boltzmann::BoltzmannPrior;
pub use dirichlet::DirichletPrior;
pub use prior::{Prior, PriorError, Result};
pub use uniform::UniformPrior;

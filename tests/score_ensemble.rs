use anyhow::Result;
use approx::assert_abs_diff_eq;
use ensemble_priors::{BoltzmannPrior, DirichletPrior, Prior, PriorError, UniformPrior};

/// Stand-in for the reweighting engine's candidate structure type. The
/// priors never see these fields directly, only through accessors.
struct Conformer {
    energy: f64,
    weight: f64,
}

fn ensemble() -> Vec<Conformer> {
    vec![
        Conformer {
            energy: 1.0,
            weight: 0.4,
        },
        Conformer {
            energy: 2.5,
            weight: 0.3,
        },
        Conformer {
            energy: 4.0,
            weight: 0.2,
        },
        Conformer {
            energy: 6.5,
            weight: 0.1,
        },
    ]
}

/// What a scoring engine does with a prior: pull the per-structure argument
/// out of every member in order, then evaluate the collected sequence.
fn engine_score<S, P: Prior<S>>(prior: &P, structures: &[S]) -> ensemble_priors::Result<f64> {
    let args: Vec<P::Arg> = structures
        .iter()
        .map(|structure| prior.extract_arg(structure))
        .collect::<ensemble_priors::Result<_>>()?;
    prior.logp(&args)
}

#[test]
fn uniform_prior_scores_any_ensemble_the_same() -> Result<()> {
    let conformers = ensemble();
    let prior = UniformPrior::new(conformers.len() as u64)?;

    let logp = engine_score(&prior, &conformers)?;
    assert_abs_diff_eq!(logp, -(4f64.ln()), epsilon = 1e-12);
    // the hand-rolled engine loop and the provided plumbing agree
    assert_abs_diff_eq!(prior.score_ensemble(&conformers)?, logp);
    // and an ensemble of a different size changes nothing
    assert_abs_diff_eq!(engine_score(&prior, &conformers[..2])?, logp);
    Ok(())
}

#[test]
fn energy_prior_prefers_the_relaxed_ensemble() -> Result<()> {
    let conformers = ensemble();
    let prior = BoltzmannPrior::new(0.7, |c: &Conformer| c.energy)?;

    let relaxed = engine_score(&prior, &conformers[..2])?;
    let strained = engine_score(&prior, &conformers[2..])?;
    assert_abs_diff_eq!(relaxed, -0.7 * 3.5, epsilon = 1e-12);
    assert!(relaxed > strained);
    Ok(())
}

#[test]
fn log_probabilities_sum_across_priors() -> Result<()> {
    let conformers = ensemble();
    let uniform = UniformPrior::new(conformers.len() as u64)?;
    let boltzmann = BoltzmannPrior::new(0.5, |c: &Conformer| c.energy)?;
    let dirichlet = DirichletPrior::new(1.0, |c: &Conformer| c.weight)?;

    let combined = uniform.score_ensemble(&conformers)?
        + boltzmann.score_ensemble(&conformers)?
        + dirichlet.score_ensemble(&conformers)?;

    // -ln 4  +  -0.5 * 14.0  +  ln G(4)
    let expected = -(4f64.ln()) - 7.0 + 6f64.ln();
    assert_abs_diff_eq!(combined, expected, epsilon = 1e-9);
    Ok(())
}

#[test]
fn misconfigured_priors_fail_before_scoring() {
    assert!(matches!(
        UniformPrior::new(0),
        Err(PriorError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        BoltzmannPrior::new(-1.0, |c: &Conformer| c.energy),
        Err(PriorError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        DirichletPrior::new(0.0, |c: &Conformer| c.weight),
        Err(PriorError::InvalidConfiguration(_))
    ));
}

#[test]
fn malformed_arguments_surface_unchanged() -> Result<()> {
    let dirichlet = DirichletPrior::new(2.0, |c: &Conformer| c.weight)?;
    let degenerate = [Conformer {
        energy: 0.0,
        weight: 0.0,
    }];
    assert!(matches!(
        dirichlet.score_ensemble(&degenerate),
        Err(PriorError::InvalidArguments(_))
    ));
    Ok(())
}

use anyhow::{Context, Result};
use ensemble_priors::{BoltzmannPrior, DirichletPrior, Prior, UniformPrior};
use rand::rngs::SmallRng;
use rand::SeedableRng;

struct Conformer {
    energy: f64,
    weight: f64,
}

fn main() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(42);

    let dirichlet = DirichletPrior::new(1.5, |c: &Conformer| c.weight)
        .context("building dirichlet prior")?;

    // Draw a weight vector from the prior and pair it with made-up energies
    // to get a small candidate ensemble.
    let weights = dirichlet.sample_weights(4, &mut rng)?;
    let conformers: Vec<Conformer> = weights
        .iter()
        .enumerate()
        .map(|(i, &weight)| Conformer {
            energy: 1.0 + 1.5 * i as f64,
            weight,
        })
        .collect();

    let uniform =
        UniformPrior::new(conformers.len() as u64).context("building uniform prior")?;
    let boltzmann =
        BoltzmannPrior::new(0.8, |c: &Conformer| c.energy).context("building boltzmann prior")?;

    let logp_uniform = uniform.score_ensemble(&conformers)?;
    let logp_boltzmann = boltzmann.score_ensemble(&conformers)?;
    let logp_dirichlet = dirichlet.score_ensemble(&conformers)?;

    println!("uniform:   {logp_uniform:.6}");
    println!("boltzmann: {logp_boltzmann:.6}");
    println!("dirichlet: {logp_dirichlet:.6}");
    println!(
        "combined:  {:.6}",
        logp_uniform + logp_boltzmann + logp_dirichlet
    );
    Ok(())
}

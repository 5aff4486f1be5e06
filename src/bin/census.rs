//! Monte Carlo fate census over perturbed expansion models.
//!
//! Usage: census [realisations] [seed]

use omega_core::{CensusConfig, FateScenario, ModelParameters};
use omega_sim::run_census;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("omega_sim=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let defaults = CensusConfig::default();
    let config = CensusConfig {
        realisations: args
            .next()
            .map(|a| a.parse::<u32>())
            .transpose()?
            .unwrap_or(defaults.realisations),
        seed: args
            .next()
            .map(|a| a.parse::<u64>())
            .transpose()?
            .unwrap_or(defaults.seed),
        ..defaults
    };

    let census = run_census(&ModelParameters::default(), &config)?;

    println!(
        "FATE CENSUS: {} of {} realisations classified (seed {}, {} rejected)",
        census.classified, config.realisations, config.seed, census.rejected
    );
    for scenario in FateScenario::ALL {
        let pct = census.fraction(scenario) * 100.0;
        let bar = "#".repeat((pct * 0.4) as usize);
        println!("  {:22} {:>5.1}% {}", scenario.name(), pct, bar);
    }
    println!("mean stability {:.3}", census.mean_stability);
    if let Some(dominant) = census.dominant() {
        println!("dominant fate  {}", dominant.name());
    }
    Ok(())
}

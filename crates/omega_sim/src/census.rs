//! Monte Carlo census of fates across perturbed expansion models.
//!
//! Each realisation draws its own ChaCha8 stream from `seed + index`, so a
//! census is reproducible and a single realisation can be replayed alone.

use std::collections::HashMap;

use omega_core::{CensusConfig, FateScenario, ModelParameters, OmegaResult};
use omega_physics::{CosmologyModel, fate};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::sampler::simulate;

/// Tally of fate scenarios over a census
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FateCensus {
    /// Realisations that were classified
    pub classified: u32,
    /// Realisations whose model or trace was rejected
    pub rejected: u32,
    pub counts: HashMap<FateScenario, u32>,
    /// Mean stability score of the classified realisations
    pub mean_stability: f64,
}

impl FateCensus {
    pub fn count(&self, scenario: FateScenario) -> u32 {
        self.counts.get(&scenario).copied().unwrap_or(0)
    }

    /// Share of classified realisations that ended in `scenario`
    pub fn fraction(&self, scenario: FateScenario) -> f64 {
        if self.classified == 0 {
            return 0.0;
        }
        self.count(scenario) as f64 / self.classified as f64
    }

    /// Most common scenario; ties go to the earlier entry of `FateScenario::ALL`
    pub fn dominant(&self) -> Option<FateScenario> {
        FateScenario::ALL
            .into_iter()
            .filter(|s| self.count(*s) > 0)
            .fold(None, |best: Option<FateScenario>, s| match best {
                Some(b) if self.count(b) >= self.count(s) => Some(b),
                _ => Some(s),
            })
    }
}

/// Perturb the base parameters for one realisation
pub fn perturb(
    base: &ModelParameters,
    config: &CensusConfig,
    rng: &mut impl Rng,
) -> ModelParameters {
    let w_offset = rng.gen_range(-config.w_spread..=config.w_spread);
    let mut scale = |value: f64| {
        let factor = 1.0 + rng.gen_range(-config.density_spread..=config.density_spread);
        (value * factor).max(0.0)
    };
    ModelParameters {
        omega_matter: scale(base.omega_matter),
        omega_radiation: scale(base.omega_radiation),
        omega_lambda: scale(base.omega_lambda),
        dark_energy_w: base.dark_energy_w + w_offset,
        ..base.clone()
    }
}

/// Classify `config.realisations` perturbed models.
///
/// Realisations whose parameters or traces are rejected are counted in
/// `rejected` and left out of the tally.
pub fn run_census(base: &ModelParameters, config: &CensusConfig) -> OmegaResult<FateCensus> {
    base.validate()?;
    config.validate()?;

    let mut counts: HashMap<FateScenario, u32> = HashMap::new();
    let mut classified = 0u32;
    let mut rejected = 0u32;
    let mut stability_sum = 0.0;

    for i in 0..config.realisations {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed.wrapping_add(i as u64));
        let params = perturb(base, config, &mut rng);

        let outcome = CosmologyModel::new(params).and_then(|model| {
            let trace = simulate(&model, config.t_start, config.t_end, config.steps)?;
            fate::predict_fate(&trace)
        });

        match outcome {
            Ok(prediction) => {
                *counts.entry(prediction.scenario).or_insert(0) += 1;
                stability_sum += prediction.stability_score;
                classified += 1;
            }
            Err(e) => {
                warn!(realisation = i, "realisation rejected: {e}");
                rejected += 1;
            }
        }
    }

    let mean_stability = if classified > 0 {
        stability_sum / classified as f64
    } else {
        0.0
    };

    info!(
        seed = config.seed,
        classified,
        rejected,
        mean_stability,
        "fate census complete"
    );

    Ok(FateCensus {
        classified,
        rejected,
        counts,
        mean_stability,
    })
}

use omega_core::error::ensure_positive_time;
use omega_core::{
    ANALYSIS_HORIZON, ANALYSIS_START, ANALYSIS_STEPS, AtomicClockDrift, CLOCK_DRIFT_YEARS,
    EvolutionTrace, FatePrediction, OmegaError, OmegaResult, PERCEPTION_YEARS,
    ResonanceBreakdown, SummaryStats, TimePerception,
};
use omega_physics::{CosmologyModel, fate, projection};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::sampler::simulate;

/// Everything the engine can say about the model as seen from one "now"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullAnalysis {
    /// Evaluation time (s)
    pub now: f64,
    /// Trace from 1 s to 1000 * now
    pub trace: EvolutionTrace,
    pub fate: FatePrediction,
    pub summary: SummaryStats,
    pub resonance: ResonanceBreakdown,
    /// Over the next billion years
    pub perception: TimePerception,
    /// Over the next year
    pub clock_drift: AtomicClockDrift,
}

/// Run every query against the model for a single "now"
pub fn full_analysis(model: &CosmologyModel, now: f64) -> OmegaResult<FullAnalysis> {
    ensure_positive_time("now", now)?;
    let t_end = ANALYSIS_HORIZON * now;
    if t_end <= ANALYSIS_START {
        return Err(OmegaError::domain(format!(
            "now ({now} s) is too early: the analysis trace must end after {ANALYSIS_START} s"
        )));
    }

    let trace = simulate(model, ANALYSIS_START, t_end, ANALYSIS_STEPS)?;
    let fate = fate::predict_fate(&trace)?;
    let summary = projection::summary_stats(model, now)?;
    let resonance = projection::resonance_breakdown(model, now)?;
    let perception = projection::time_perception(model, now, PERCEPTION_YEARS)?;
    let clock_drift = projection::atomic_clock_drift(model, now, CLOCK_DRIFT_YEARS)?;

    info!(
        now,
        scenario = fate.scenario.name(),
        stability = fate.stability_score,
        years_to_percent = summary.years_to_percent,
        "full analysis complete"
    );

    Ok(FullAnalysis {
        now,
        trace,
        fate,
        summary,
        resonance,
        perception,
        clock_drift,
    })
}

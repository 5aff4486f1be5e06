use omega_core::error::{ensure_finite, ensure_sample_range};
use omega_core::{EvolutionTrace, OmegaResult, SamplePoint};
use omega_physics::{CosmologyModel, DriftEstimator};
use tracing::{debug, warn};

/// Evaluate every field of a sample at time t
pub fn sample_at(model: &CosmologyModel, t: f64) -> OmegaResult<SamplePoint> {
    let drift = DriftEstimator::new(model);
    Ok(SamplePoint {
        time: t,
        scale_factor: ensure_finite("scale factor", model.scale_factor(t)?)?,
        omega: model.omega_at_time(t)?,
        d_omega: drift.first_derivative(t)?,
        d2_omega: drift.second_derivative(t)?,
    })
}

/// Sample the model at `steps + 1` log-uniformly spaced times from
/// `t_start` to `t_end` inclusive.
///
/// Either the whole trace is valid or an error is returned; a sample that
/// would contain NaN or infinity fails the run.
pub fn simulate(
    model: &CosmologyModel,
    t_start: f64,
    t_end: f64,
    steps: usize,
) -> OmegaResult<EvolutionTrace> {
    if let Err(e) = ensure_sample_range(t_start, t_end, steps) {
        warn!("rejected simulation range: {e}");
        return Err(e);
    }

    let log_start = t_start.log10();
    let d_log = (t_end.log10() - log_start) / steps as f64;

    let mut samples = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        // Pin the endpoints so rounding in the log/exp round trip cannot move them
        let t = match i {
            0 => t_start,
            i if i == steps => t_end,
            i => 10f64.powf(log_start + i as f64 * d_log),
        };
        samples.push(sample_at(model, t)?);
    }

    let trace = EvolutionTrace::from_samples(samples)?;
    debug!(t_start, t_end, steps, samples = trace.len(), "evolution trace built");
    Ok(trace)
}

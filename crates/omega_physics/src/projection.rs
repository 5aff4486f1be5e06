//! Derived queries evaluated directly on the model at a chosen "now".
//!
//! None of these look at an evolution trace.

use omega_core::error::{ensure_finite, ensure_positive_time};
use omega_core::{
    AtomicClockDrift, CLOCK_PRECISION, NEGLIGIBLE_DRIFT, OmegaError, OmegaResult,
    RESONANCE_FRACTION, ResonanceBreakdown, SECONDS_PER_YEAR, SummaryStats, TimePerception,
};

use crate::cosmology::CosmologyModel;
use crate::drift::DriftEstimator;

/// Resonance horizon from omega and its drift at one instant
pub fn resonance_from_rates(omega: f64, drift: f64) -> ResonanceBreakdown {
    if drift.abs() < NEGLIGIBLE_DRIFT {
        return ResonanceBreakdown {
            breakdown: false,
            time_to_breakdown: f64::INFINITY,
        };
    }
    let critical = RESONANCE_FRACTION * omega;
    ResonanceBreakdown {
        breakdown: true,
        time_to_breakdown: critical / drift.abs(),
    }
}

/// Clock drift between two omega readings
pub fn clock_drift_from_omegas(omega_now: f64, omega_later: f64) -> AtomicClockDrift {
    let frequency_ratio = omega_later / omega_now;
    AtomicClockDrift {
        frequency_ratio,
        percent_change: (frequency_ratio - 1.0) * 100.0,
        detectable: (frequency_ratio - 1.0).abs() > CLOCK_PRECISION,
    }
}

/// Time until omega's drift exceeds 1% of its current value
pub fn resonance_breakdown(model: &CosmologyModel, t0: f64) -> OmegaResult<ResonanceBreakdown> {
    let omega = model.omega_at_time(t0)?;
    let drift = DriftEstimator::new(model).first_derivative(t0)?;
    Ok(resonance_from_rates(omega, drift))
}

/// Ratio of perceived to elapsed time over `years` starting at t0
pub fn time_perception(model: &CosmologyModel, t0: f64, years: f64) -> OmegaResult<TimePerception> {
    let (now, later) = omega_pair(model, t0, years)?;
    Ok(TimePerception {
        omega_ratio: ensure_finite("omega ratio", later / now)?,
        perception_ratio: ensure_finite("perception ratio", now / later)?,
    })
}

/// Fractional frequency change of an omega-locked clock over `years`
pub fn atomic_clock_drift(
    model: &CosmologyModel,
    t0: f64,
    years: f64,
) -> OmegaResult<AtomicClockDrift> {
    let (now, later) = omega_pair(model, t0, years)?;
    let drift = clock_drift_from_omegas(now, later);
    ensure_finite("frequency ratio", drift.frequency_ratio)?;
    Ok(drift)
}

/// Omega, its derivatives and the normalised drift at t0
pub fn summary_stats(model: &CosmologyModel, t0: f64) -> OmegaResult<SummaryStats> {
    let drift = DriftEstimator::new(model);
    let omega = model.omega_at_time(t0)?;
    let d_omega = drift.first_derivative(t0)?;
    let d2_omega = drift.second_derivative(t0)?;

    let normalized_drift = ensure_finite("normalized drift", d_omega / omega)?;
    let years_to_percent = if normalized_drift.abs() < NEGLIGIBLE_DRIFT {
        f64::INFINITY
    } else {
        RESONANCE_FRACTION / normalized_drift.abs() / SECONDS_PER_YEAR
    };

    Ok(SummaryStats {
        omega,
        d_omega,
        d2_omega,
        normalized_drift,
        years_to_percent,
    })
}

fn omega_pair(model: &CosmologyModel, t0: f64, years: f64) -> OmegaResult<(f64, f64)> {
    ensure_positive_time("t0", t0)?;
    if !years.is_finite() {
        return Err(OmegaError::domain(format!("years must be finite, got {years}")));
    }
    let later = t0 + years * SECONDS_PER_YEAR;
    ensure_positive_time("t0 + offset", later)?;
    let omega_now = model.omega_at_time(t0)?;
    if omega_now == 0.0 {
        return Err(OmegaError::domain(format!("omega vanishes at t0 = {t0}")));
    }
    Ok((omega_now, model.omega_at_time(later)?))
}

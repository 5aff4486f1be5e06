use omega_core::error::{ensure_finite, ensure_positive_time};
use omega_core::{FINITE_DIFFERENCE_FRACTION, OmegaError, OmegaResult};

use crate::cosmology::CosmologyModel;

/// Time derivatives of omega for a borrowed model.
///
/// The first derivative is closed-form:
///   dH/dt = -H^2 * N(a) / D(a)
///   N(a) = 1.5 Om a^-3 + 2 Or a^-4 + 1.5 (1+w) OL a^(-3(1+w))
///   D(a) = Om a^-3 + Or a^-4 + OL a^(-3(1+w))
/// The second derivative is a central difference of the first with a step
/// proportional to t, which keeps the relative error uniform across decades.
#[derive(Debug, Clone, Copy)]
pub struct DriftEstimator<'a> {
    model: &'a CosmologyModel,
}

impl<'a> DriftEstimator<'a> {
    pub fn new(model: &'a CosmologyModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &'a CosmologyModel {
        self.model
    }

    /// dH/dt at time t (1/s^2)
    pub fn hubble_rate(&self, t: f64) -> OmegaResult<f64> {
        let h = self.model.hubble_at_time(t)?;
        let a = self.model.scale_factor_unchecked(t);
        let [m, r, l] = self.model.density_terms(a);
        let w = self.model.params().dark_energy_w;

        let denominator = m + r + l;
        if denominator == 0.0 {
            return Err(OmegaError::domain(format!(
                "expansion denominator vanishes at t = {t}"
            )));
        }
        let numerator = 1.5 * m + 2.0 * r + 1.5 * (1.0 + w) * l;
        ensure_finite("dH/dt", -h * h * numerator / denominator)
    }

    /// d omega / dt at time t (Hz/s)
    pub fn first_derivative(&self, t: f64) -> OmegaResult<f64> {
        let rate = self.hubble_rate(t)?;
        ensure_finite("d omega/dt", self.model.omega_from_hubble(rate))
    }

    /// d^2 omega / dt^2 at time t (Hz/s^2), central difference with dt = 0.01 t
    pub fn second_derivative(&self, t: f64) -> OmegaResult<f64> {
        ensure_positive_time("t", t)?;
        let dt = FINITE_DIFFERENCE_FRACTION * t;
        if dt == 0.0 || t - dt <= 0.0 {
            return Err(OmegaError::domain(format!(
                "finite-difference step {dt} leaves no room below t = {t}"
            )));
        }
        let ahead = self.first_derivative(t + dt)?;
        let behind = self.first_derivative(t - dt)?;
        ensure_finite("d2 omega/dt2", (ahead - behind) / (2.0 * dt))
    }
}

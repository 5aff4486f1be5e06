use omega_core::error::{ensure_finite, ensure_positive_time};
use omega_core::{ModelParameters, OmegaResult};
use tracing::{debug, warn};

/// Friedmann expansion model evaluated at arbitrary times.
///
/// The scale factor uses the matter-dominated approximation
/// a(t) = (t / t_ref)^(2/3), so a(t_ref) = 1 exactly. Omega is a linear
/// rescaling of the Hubble parameter with the ratio fixed by the reference
/// epoch. The model is immutable and can be shared between callers.
#[derive(Debug, Clone)]
pub struct CosmologyModel {
    params: ModelParameters,
    omega_per_hubble: f64,
}

impl CosmologyModel {
    pub fn new(params: ModelParameters) -> OmegaResult<Self> {
        if let Err(e) = params.validate() {
            warn!("rejected model parameters: {e}");
            return Err(e);
        }
        let omega_per_hubble = params.reference_omega / params.hubble_now;
        debug!(
            h_ref = params.hubble_now,
            omega_m = params.omega_matter,
            omega_r = params.omega_radiation,
            omega_l = params.omega_lambda,
            w = params.dark_energy_w,
            "cosmology model built"
        );
        Ok(Self {
            params,
            omega_per_hubble,
        })
    }

    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// Scale factor relative to the reference epoch
    pub fn scale_factor(&self, t: f64) -> OmegaResult<f64> {
        ensure_positive_time("t", t)?;
        Ok(self.scale_factor_unchecked(t))
    }

    pub(crate) fn scale_factor_unchecked(&self, t: f64) -> f64 {
        (t / self.params.reference_time).powf(2.0 / 3.0)
    }

    /// Density terms [matter a^-3, radiation a^-4, dark energy a^(-3(1+w))]
    pub(crate) fn density_terms(&self, a: f64) -> [f64; 3] {
        let p = &self.params;
        [
            p.omega_matter * a.powi(-3),
            p.omega_radiation * a.powi(-4),
            p.omega_lambda * a.powf(-3.0 * (1.0 + p.dark_energy_w)),
        ]
    }

    /// H(t) = H_ref * sqrt(sum of density terms)
    pub fn hubble_at_time(&self, t: f64) -> OmegaResult<f64> {
        ensure_positive_time("t", t)?;
        let a = self.scale_factor_unchecked(t);
        let [m, r, l] = self.density_terms(a);
        ensure_finite("hubble", self.params.hubble_now * (m + r + l).sqrt())
    }

    /// Linear H -> omega conversion fixed at construction
    pub fn omega_from_hubble(&self, hubble: f64) -> f64 {
        hubble * self.omega_per_hubble
    }

    pub fn omega_at_time(&self, t: f64) -> OmegaResult<f64> {
        let h = self.hubble_at_time(t)?;
        ensure_finite("omega", self.omega_from_hubble(h))
    }
}

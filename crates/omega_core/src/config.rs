use serde::{Deserialize, Serialize};

use crate::constants::{CAESIUM_HYPERFINE_HZ, HUBBLE_NOW, PRESENT_AGE};
use crate::error::{OmegaError, OmegaResult, ensure_sample_range};

/// Expansion model configuration.
///
/// Set once when a model is built and never changed afterwards. The density
/// fractions are not required to sum to one, but each must be non-negative
/// so the expansion formula stays real.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelParameters {
    /// Reference expansion rate H_ref (1/s)
    pub hubble_now: f64,
    /// Matter density fraction
    pub omega_matter: f64,
    /// Radiation density fraction
    pub omega_radiation: f64,
    /// Dark energy density fraction
    pub omega_lambda: f64,
    /// Dark energy equation-of-state exponent (-1 = cosmological constant)
    pub dark_energy_w: f64,
    /// Epoch where the scale factor is exactly 1 (s)
    pub reference_time: f64,
    /// Omega at the reference epoch (Hz); fixes the omega/H ratio
    pub reference_omega: f64,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            hubble_now: HUBBLE_NOW,
            omega_matter: 0.3149,
            omega_radiation: 0.0001,
            omega_lambda: 0.685,
            dark_energy_w: -1.0,
            reference_time: PRESENT_AGE,
            reference_omega: CAESIUM_HYPERFINE_HZ,
        }
    }
}

impl ModelParameters {
    /// Validate parameters before a model is built from them.
    pub fn validate(&self) -> OmegaResult<()> {
        let fields = [
            ("hubbleNow", self.hubble_now),
            ("omegaMatter", self.omega_matter),
            ("omegaRadiation", self.omega_radiation),
            ("omegaLambda", self.omega_lambda),
            ("darkEnergyW", self.dark_energy_w),
            ("referenceTime", self.reference_time),
            ("referenceOmega", self.reference_omega),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(OmegaError::domain(format!("{name} must be finite, got {value}")));
            }
        }
        for (name, value) in [
            ("omegaMatter", self.omega_matter),
            ("omegaRadiation", self.omega_radiation),
            ("omegaLambda", self.omega_lambda),
        ] {
            if value < 0.0 {
                return Err(OmegaError::domain(format!("{name} must be >= 0, got {value}")));
            }
        }
        if self.omega_matter + self.omega_radiation + self.omega_lambda == 0.0 {
            return Err(OmegaError::domain(
                "at least one density fraction must be positive",
            ));
        }
        if self.hubble_now <= 0.0 {
            return Err(OmegaError::domain(format!(
                "hubbleNow must be > 0, got {}",
                self.hubble_now
            )));
        }
        if self.reference_time <= 0.0 {
            return Err(OmegaError::domain(format!(
                "referenceTime must be > 0, got {}",
                self.reference_time
            )));
        }
        Ok(())
    }

    /// Sum of the three density fractions
    pub fn total_density(&self) -> f64 {
        self.omega_matter + self.omega_radiation + self.omega_lambda
    }
}

/// Monte Carlo fate census configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CensusConfig {
    /// Random seed for deterministic perturbations
    pub seed: u64,
    /// Number of perturbed models to classify
    pub realisations: u32,
    /// Half-width of the uniform offset applied to the dark energy exponent
    pub w_spread: f64,
    /// Half-width of the relative factor applied to each density fraction
    pub density_spread: f64,
    /// First sample time of each realisation's trace (s)
    pub t_start: f64,
    /// Last sample time of each realisation's trace (s)
    pub t_end: f64,
    /// Sample intervals per trace
    pub steps: usize,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            realisations: 100,
            w_spread: 0.3,
            density_spread: 0.2,
            t_start: 1.0,
            t_end: 1000.0 * PRESENT_AGE,
            steps: 200,
        }
    }
}

impl CensusConfig {
    pub fn validate(&self) -> OmegaResult<()> {
        if self.realisations == 0 {
            return Err(OmegaError::domain("realisations must be >= 1"));
        }
        for (name, spread) in [
            ("wSpread", self.w_spread),
            ("densitySpread", self.density_spread),
        ] {
            if !spread.is_finite() || spread < 0.0 {
                return Err(OmegaError::domain(format!(
                    "{name} must be finite and >= 0, got {spread}"
                )));
            }
        }
        ensure_sample_range(self.t_start, self.t_end, self.steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_flat_and_valid() {
        let p = ModelParameters::default();
        assert!(p.validate().is_ok());
        assert!((p.total_density() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_density_rejected() {
        let p = ModelParameters {
            omega_radiation: -0.1,
            ..ModelParameters::default()
        };
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("omegaRadiation"), "{err}");
    }

    #[test]
    fn test_non_positive_reference_rejected() {
        let p = ModelParameters {
            reference_time: 0.0,
            ..ModelParameters::default()
        };
        assert!(matches!(p.validate(), Err(OmegaError::Domain(_))));

        let p = ModelParameters {
            hubble_now: -1.0,
            ..ModelParameters::default()
        };
        assert!(matches!(p.validate(), Err(OmegaError::Domain(_))));
    }

    #[test]
    fn test_non_finite_rejected() {
        let p = ModelParameters {
            dark_energy_w: f64::NAN,
            ..ModelParameters::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_census_config_validation() {
        assert!(CensusConfig::default().validate().is_ok());
        let bad = CensusConfig {
            realisations: 0,
            ..CensusConfig::default()
        };
        assert!(bad.validate().is_err());
        let bad = CensusConfig {
            w_spread: -0.1,
            ..CensusConfig::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_census_config_rejects_bad_sample_range() {
        let bad = [
            CensusConfig {
                steps: 0,
                ..CensusConfig::default()
            },
            CensusConfig {
                t_start: 10.0,
                t_end: 1.0,
                ..CensusConfig::default()
            },
            CensusConfig {
                t_start: -1.0,
                ..CensusConfig::default()
            },
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(OmegaError::Domain(_))),
                "{config:?}"
            );
        }
    }

    #[test]
    fn test_zero_universe_rejected() {
        let p = ModelParameters {
            omega_matter: 0.0,
            omega_radiation: 0.0,
            omega_lambda: 0.0,
            ..ModelParameters::default()
        };
        assert!(p.validate().is_err());
    }
}

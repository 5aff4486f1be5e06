use serde::{Deserialize, Serialize};

use crate::error::{OmegaError, OmegaResult};

/// One evaluation of the model at a single time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Seconds since the origin
    pub time: f64,
    pub scale_factor: f64,
    /// Omega (Hz)
    pub omega: f64,
    /// d omega / dt (Hz/s)
    pub d_omega: f64,
    /// d^2 omega / dt^2 (Hz/s^2)
    pub d2_omega: f64,
}

/// Log-spaced sequence of samples produced by a single simulation run.
///
/// Times are strictly increasing. A trace is never edited after it is
/// built; a new run produces a new trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SamplePoint>", into = "Vec<SamplePoint>")]
pub struct EvolutionTrace {
    samples: Vec<SamplePoint>,
}

impl EvolutionTrace {
    /// Wrap samples, rejecting sequences whose times do not strictly increase.
    pub fn from_samples(samples: Vec<SamplePoint>) -> OmegaResult<Self> {
        if let Some(w) = samples.windows(2).find(|w| w[1].time <= w[0].time) {
            return Err(OmegaError::domain(format!(
                "trace times must strictly increase: {} then {}",
                w[0].time, w[1].time
            )));
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[SamplePoint] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&SamplePoint> {
        self.samples.first()
    }

    /// Terminal sample, the one fate classification looks at
    pub fn last(&self) -> Option<&SamplePoint> {
        self.samples.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SamplePoint> {
        self.samples.iter()
    }
}

impl TryFrom<Vec<SamplePoint>> for EvolutionTrace {
    type Error = OmegaError;

    fn try_from(samples: Vec<SamplePoint>) -> OmegaResult<Self> {
        Self::from_samples(samples)
    }
}

impl From<EvolutionTrace> for Vec<SamplePoint> {
    fn from(trace: EvolutionTrace) -> Self {
        trace.samples
    }
}

impl<'a> IntoIterator for &'a EvolutionTrace {
    type Item = &'a SamplePoint;
    type IntoIter = std::slice::Iter<'a, SamplePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Qualitative long-term behaviour of omega
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FateScenario {
    EternalExpansion,
    AsymptoticExpansion,
    BigCrunch,
    Bounce,
    SteadyState,
}

impl FateScenario {
    pub const ALL: [FateScenario; 5] = [
        Self::EternalExpansion,
        Self::AsymptoticExpansion,
        Self::BigCrunch,
        Self::Bounce,
        Self::SteadyState,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::EternalExpansion => "Eternal Expansion",
            Self::AsymptoticExpansion => "Asymptotic Expansion",
            Self::BigCrunch => "Big Crunch",
            Self::Bounce => "Bounce",
            Self::SteadyState => "Steady State",
        }
    }

    /// How stable the scenario is, 0 (collapse) to 1 (steady)
    pub fn stability(&self) -> f64 {
        match self {
            Self::EternalExpansion => 0.3,
            Self::AsymptoticExpansion => 0.7,
            Self::BigCrunch => 0.1,
            Self::Bounce => 0.5,
            Self::SteadyState => 0.9,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::EternalExpansion => {
                "Omega keeps rising at a non-decreasing rate; the drift never settles."
            }
            Self::AsymptoticExpansion => {
                "Omega is rising but decelerating towards a limiting value."
            }
            Self::BigCrunch => "Omega is falling at an accelerating rate and heads to zero.",
            Self::Bounce => "Omega is falling but the fall is slowing; it may turn around.",
            Self::SteadyState => "Omega is effectively constant.",
        }
    }
}

/// Fate of the model inferred from the terminal sample of a trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatePrediction {
    pub scenario: FateScenario,
    /// Seconds until omega reaches zero at the current rate (falling scenarios only)
    pub time_to_halt: Option<f64>,
    pub stability_score: f64,
    pub description: String,
}

/// Horizon at which omega's drift exceeds a fixed fraction of its value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResonanceBreakdown {
    pub breakdown: bool,
    /// Seconds; +inf when the drift is negligible
    pub time_to_breakdown: f64,
}

/// How a duration would feel to an observer clocked by omega
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePerception {
    /// omega(t0 + dt) / omega(t0)
    pub omega_ratio: f64,
    /// omega(t0) / omega(t0 + dt)
    pub perception_ratio: f64,
}

/// Frequency change an atomic clock would record over an interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtomicClockDrift {
    pub frequency_ratio: f64,
    pub percent_change: f64,
    /// Whether the change exceeds current clock precision
    pub detectable: bool,
}

/// Point statistics of omega and its drift at one time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub omega: f64,
    pub d_omega: f64,
    pub d2_omega: f64,
    /// d_omega / omega (1/s)
    pub normalized_drift: f64,
    /// Years until omega changes by 1% at the current rate
    pub years_to_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time: f64) -> SamplePoint {
        SamplePoint {
            time,
            scale_factor: 1.0,
            omega: 1.0,
            d_omega: 0.0,
            d2_omega: 0.0,
        }
    }

    #[test]
    fn test_trace_rejects_unordered_times() {
        assert!(EvolutionTrace::from_samples(vec![sample(1.0), sample(2.0)]).is_ok());
        assert!(EvolutionTrace::from_samples(vec![sample(2.0), sample(2.0)]).is_err());
        assert!(EvolutionTrace::from_samples(vec![sample(3.0), sample(1.0)]).is_err());
    }

    #[test]
    fn test_trace_accessors() {
        let trace =
            EvolutionTrace::from_samples(vec![sample(1.0), sample(2.0), sample(5.0)]).unwrap();
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.first().unwrap().time, 1.0);
        assert_eq!(trace.last().unwrap().time, 5.0);
        assert_eq!(trace.iter().count(), 3);
        assert!(EvolutionTrace::from_samples(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_trace_deserialization_keeps_time_order() {
        let ordered = r#"[
            {"time": 1.0, "scale_factor": 1.0, "omega": 1.0, "d_omega": 0.0, "d2_omega": 0.0},
            {"time": 5.0, "scale_factor": 1.0, "omega": 1.0, "d_omega": 0.0, "d2_omega": 0.0}
        ]"#;
        let trace: EvolutionTrace = serde_json::from_str(ordered).unwrap();
        assert_eq!(trace.len(), 2);

        let unordered = r#"[
            {"time": 5.0, "scale_factor": 1.0, "omega": 1.0, "d_omega": 0.0, "d2_omega": 0.0},
            {"time": 1.0, "scale_factor": 1.0, "omega": 1.0, "d_omega": 0.0, "d2_omega": 0.0}
        ]"#;
        let err = serde_json::from_str::<EvolutionTrace>(unordered).unwrap_err();
        assert!(err.to_string().contains("strictly increase"), "{err}");
    }

    #[test]
    fn test_trace_serializes_as_sample_list() {
        let trace = EvolutionTrace::from_samples(vec![sample(1.0), sample(2.0)]).unwrap();
        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.starts_with('['), "{json}");
        let back: EvolutionTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trace);
    }

    #[test]
    fn test_scenario_stability_ordering() {
        assert!(
            FateScenario::SteadyState.stability() > FateScenario::AsymptoticExpansion.stability()
        );
        assert!(FateScenario::BigCrunch.stability() < FateScenario::EternalExpansion.stability());
        for s in FateScenario::ALL {
            assert!(!s.name().is_empty());
            assert!(!s.description().is_empty());
        }
    }
}

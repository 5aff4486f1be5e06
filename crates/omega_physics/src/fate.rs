use omega_core::{
    EvolutionTrace, FatePrediction, FateScenario, OmegaError, OmegaResult, SamplePoint,
    STEADY_STATE_DRIFT,
};

/// Classify the long-term fate of omega from its value and first two derivatives.
///
/// Rules, first match wins:
/// - |d omega| < 1e-20 (including exactly zero): steady state
/// - rising, non-decelerating: eternal expansion
/// - rising, decelerating: asymptotic expansion
/// - falling, accelerating: big crunch, with time to halt = -omega / d omega
/// - falling, decelerating: bounce, with the same time to halt
pub fn classify(omega: f64, d_omega: f64, d2_omega: f64) -> FatePrediction {
    let (scenario, time_to_halt) = if d_omega.abs() < STEADY_STATE_DRIFT {
        (FateScenario::SteadyState, None)
    } else if d_omega > 0.0 {
        if d2_omega >= 0.0 {
            (FateScenario::EternalExpansion, None)
        } else {
            (FateScenario::AsymptoticExpansion, None)
        }
    } else if d_omega < 0.0 {
        let halt = -omega / d_omega;
        if d2_omega < 0.0 {
            (FateScenario::BigCrunch, Some(halt))
        } else {
            (FateScenario::Bounce, Some(halt))
        }
    } else {
        // NaN drift
        (FateScenario::SteadyState, None)
    };

    FatePrediction {
        scenario,
        time_to_halt,
        stability_score: scenario.stability(),
        description: scenario.description().to_string(),
    }
}

/// Classify a single sample
pub fn classify_sample(sample: &SamplePoint) -> FatePrediction {
    classify(sample.omega, sample.d_omega, sample.d2_omega)
}

/// Fate of a trace, read from its terminal sample only
pub fn predict_fate(trace: &EvolutionTrace) -> OmegaResult<FatePrediction> {
    trace
        .last()
        .map(classify_sample)
        .ok_or_else(|| OmegaError::domain("cannot predict the fate of an empty trace"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_table() {
        let cases = [
            (1.0, 1.0, FateScenario::EternalExpansion, 0.3, None),
            (1.0, -1.0, FateScenario::AsymptoticExpansion, 0.7, None),
            (-1.0, -1.0, FateScenario::BigCrunch, 0.1, Some(1.0)),
            (-1.0, 1.0, FateScenario::Bounce, 0.5, Some(1.0)),
            (0.0, 0.0, FateScenario::SteadyState, 0.9, None),
        ];
        for (d, d2, scenario, stability, halt) in cases {
            let fate = classify(1.0, d, d2);
            assert_eq!(fate.scenario, scenario, "d={d} d2={d2}");
            assert_eq!(fate.stability_score, stability);
            assert_eq!(fate.time_to_halt, halt);
        }
    }

    #[test]
    fn test_zero_curvature_counts_as_eternal() {
        assert_eq!(classify(1.0, 1.0, 0.0).scenario, FateScenario::EternalExpansion);
        assert_eq!(classify(1.0, -1.0, 0.0).scenario, FateScenario::Bounce);
    }

    #[test]
    fn test_near_zero_drift_is_steady() {
        assert_eq!(classify(1.0, 1e-25, 1.0).scenario, FateScenario::SteadyState);
        assert_eq!(classify(1.0, -1e-25, -1.0).scenario, FateScenario::SteadyState);
        assert_eq!(classify(1.0, 1e-19, 1.0).scenario, FateScenario::EternalExpansion);
    }

    #[test]
    fn test_time_to_halt_scales_with_omega() {
        let fate = classify(10.0, -2.0, -1.0);
        assert_eq!(fate.time_to_halt, Some(5.0));
    }

    #[test]
    fn test_identical_inputs_identical_predictions() {
        assert_eq!(classify(3.0, -0.5, 0.25), classify(3.0, -0.5, 0.25));
    }

    #[test]
    fn test_predict_fate_uses_last_sample() {
        let samples = vec![
            SamplePoint {
                time: 1.0,
                scale_factor: 0.5,
                omega: 1.0,
                d_omega: 1.0,
                d2_omega: 1.0,
            },
            SamplePoint {
                time: 2.0,
                scale_factor: 0.8,
                omega: 1.0,
                d_omega: -1.0,
                d2_omega: -1.0,
            },
        ];
        let trace = EvolutionTrace::from_samples(samples).unwrap();
        assert_eq!(predict_fate(&trace).unwrap().scenario, FateScenario::BigCrunch);
    }

    #[test]
    fn test_predict_fate_rejects_empty_trace() {
        let trace = EvolutionTrace::from_samples(Vec::new()).unwrap();
        assert!(matches!(predict_fate(&trace), Err(OmegaError::Domain(_))));
    }
}

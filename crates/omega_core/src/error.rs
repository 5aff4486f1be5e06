use thiserror::Error;

/// Every failure the engine can report.
///
/// Inputs are validated at each public boundary, so a trace or projection
/// is either fully valid or never produced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OmegaError {
    /// Argument outside the domain of a formula (non-positive time,
    /// empty sample range, zero denominator, invalid parameters).
    #[error("domain error: {0}")]
    Domain(String),

    /// A computed value came out NaN or infinite.
    #[error("numeric overflow: {0}")]
    NumericOverflow(String),
}

impl OmegaError {
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::NumericOverflow(msg.into())
    }
}

pub type OmegaResult<T> = Result<T, OmegaError>;

/// Fail with a domain error unless `t` is a finite, strictly positive time.
pub fn ensure_positive_time(name: &str, t: f64) -> OmegaResult<()> {
    if t.is_finite() && t > 0.0 {
        Ok(())
    } else {
        Err(OmegaError::domain(format!("{name} must be finite and > 0, got {t}")))
    }
}

/// Fail with a domain error unless `[t_start, t_end]` with `steps` intervals
/// is a samplable range: both ends positive, `t_end > t_start`, `steps >= 1`.
pub fn ensure_sample_range(t_start: f64, t_end: f64, steps: usize) -> OmegaResult<()> {
    ensure_positive_time("t_start", t_start)?;
    ensure_positive_time("t_end", t_end)?;
    if t_end <= t_start {
        return Err(OmegaError::domain(format!(
            "t_end ({t_end}) must be greater than t_start ({t_start})"
        )));
    }
    if steps < 1 {
        return Err(OmegaError::domain("steps must be >= 1"));
    }
    Ok(())
}

/// Fail with an overflow error if `value` is NaN or infinite.
pub fn ensure_finite(name: &str, value: f64) -> OmegaResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(OmegaError::overflow(format!("{name} evaluated to {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = OmegaError::domain("t must be > 0");
        assert_eq!(e.to_string(), "domain error: t must be > 0");

        let e = OmegaError::overflow("hubble evaluated to inf");
        assert_eq!(e.to_string(), "numeric overflow: hubble evaluated to inf");
    }

    #[test]
    fn test_positive_time_guard() {
        assert!(ensure_positive_time("t", 1.0).is_ok());
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ensure_positive_time("t", bad),
                Err(OmegaError::Domain(_))
            ));
        }
    }

    #[test]
    fn test_sample_range_guard() {
        assert!(ensure_sample_range(1.0, 10.0, 1).is_ok());
        let bad = [
            (0.0, 10.0, 5),
            (-1.0, 10.0, 5),
            (10.0, 10.0, 5),
            (10.0, 1.0, 5),
            (1.0, f64::NAN, 5),
            (1.0, 10.0, 0),
        ];
        for (start, end, steps) in bad {
            assert!(
                matches!(ensure_sample_range(start, end, steps), Err(OmegaError::Domain(_))),
                "start={start} end={end} steps={steps}"
            );
        }
    }

    #[test]
    fn test_finite_guard() {
        assert_eq!(ensure_finite("x", 2.5), Ok(2.5));
        assert!(matches!(
            ensure_finite("x", f64::NAN),
            Err(OmegaError::NumericOverflow(_))
        ));
    }
}

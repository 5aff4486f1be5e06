// Physical constants and fixed engine thresholds.
// Units throughout the engine:
// - Time: seconds since the origin of the expansion model
// - Hubble parameter: 1/s
// - Omega: Hz, normalised so that omega(t_ref) equals the reference frequency

/// Julian year in seconds (365.25 days)
pub const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 3600.0;

/// One megaparsec in kilometres
pub const KM_PER_MPC: f64 = 3.085_677_581e19;

/// Present-day Hubble constant, 67.4 km/s/Mpc expressed in 1/s
pub const HUBBLE_NOW: f64 = 67.4 / KM_PER_MPC;

/// Present age of the universe (13.8 Gyr) in seconds
pub const PRESENT_AGE: f64 = 13.8e9 * SECONDS_PER_YEAR;

/// Caesium-133 hyperfine transition, the SI second (Hz)
pub const CAESIUM_HYPERFINE_HZ: f64 = 9_192_631_770.0;

/// Central-difference step as a fraction of the evaluation time
pub const FINITE_DIFFERENCE_FRACTION: f64 = 0.01;

/// Below this |d omega/dt| the model is treated as steady
pub const STEADY_STATE_DRIFT: f64 = 1e-20;

/// Below this |d omega/dt| projections treat omega as frozen
pub const NEGLIGIBLE_DRIFT: f64 = 1e-30;

/// Fraction of omega the drift must accumulate before resonance breaks down
pub const RESONANCE_FRACTION: f64 = 0.01;

/// Fractional frequency resolution of the best optical clocks
pub const CLOCK_PRECISION: f64 = 1e-18;

/// First sample time for the full analysis trace (1 s)
pub const ANALYSIS_START: f64 = 1.0;

/// Full analysis simulates out to this multiple of "now"
pub const ANALYSIS_HORIZON: f64 = 1000.0;

/// Sample count for the full analysis trace
pub const ANALYSIS_STEPS: usize = 1000;

/// Offset used by the full analysis for the time-perception projection
pub const PERCEPTION_YEARS: f64 = 1e9;

/// Offset used by the full analysis for the atomic-clock projection
pub const CLOCK_DRIFT_YEARS: f64 = 1.0;

pub mod analysis;
pub mod census;
pub mod sampler;

pub use analysis::{FullAnalysis, full_analysis};
pub use census::{FateCensus, run_census};
pub use sampler::simulate;

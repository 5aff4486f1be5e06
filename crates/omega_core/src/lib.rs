pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::{CensusConfig, ModelParameters};
pub use constants::*;
pub use error::{OmegaError, OmegaResult};
pub use types::*;

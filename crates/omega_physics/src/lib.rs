pub mod cosmology;
pub mod drift;
pub mod fate;
pub mod projection;

pub use cosmology::CosmologyModel;
pub use drift::DriftEstimator;

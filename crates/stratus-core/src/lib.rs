//! stratus-core — domain types for the Stratus scaling engine.
//!
//! Home of the ordered [`FlavorScale`], the tri-state
//! [`ScalabilityParameters`] request, the resolved
//! [`InstanceConfiguration`], the composed [`ScalabilityConfig`] view and
//! [`ScalingStrategy`] classification.
//!
//! Everything here is pure data plus total functions: no I/O, no failure
//! paths, no interior mutability. Values are immutable once built and
//! safe to share across threads without coordination.

pub mod config;
pub mod flavor;
pub mod params;
pub mod strategy;

pub use config::{
    BuildFlavorConfig, DEFAULT_MAX_INSTANCES, FlavorScalingConfig, InstanceScalingConfig,
    ScalabilityConfig, ScalingConstraints,
};
pub use flavor::{FlavorName, FlavorScale};
pub use params::{InstanceConfiguration, ScalabilityParameters};
pub use strategy::ScalingStrategy;

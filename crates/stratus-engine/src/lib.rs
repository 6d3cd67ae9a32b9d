//! stratus-engine — the composed scaling pipeline.
//!
//! [`ScalingEngine`] wires the flavor scale, validator, cost estimator
//! and preset catalog into one facade: validate a request, apply it onto
//! the current configuration, price the result, or pick a preset to
//! start from. [`EngineSettings`] builds an engine from a `stratus.toml`
//! instead of the builtin defaults.

pub mod engine;
pub mod settings;

pub use engine::ScalingEngine;
pub use settings::{EngineSettings, SettingsError, SettingsResult};

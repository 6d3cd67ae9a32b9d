//! stratus-presets — built-in scaling profiles.
//!
//! A fixed, categorized catalog of [`Preset`] configurations
//! (Development, Staging, Production, High Traffic, Cost Optimized) that
//! callers can offer as defaults. Built once, never mutated.

pub mod catalog;

pub use catalog::{Preset, PresetCatalog, PresetCategory, default_presets};

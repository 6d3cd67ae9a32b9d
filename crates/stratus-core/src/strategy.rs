//! Scaling strategy classification.
//!
//! The strategy is a label summarizing which scaling dimensions are
//! active; it is always derivable from the two `enabled` flags of a
//! [`ScalabilityConfig`](crate::config::ScalabilityConfig).

use serde::{Deserialize, Serialize};

use crate::config::ScalabilityConfig;

/// Which scaling dimensions are active for an application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScalingStrategy {
    /// Neither dimension scales: one flavor, one instance count.
    #[default]
    Fixed,
    /// Instance count scales; the flavor is pinned.
    Horizontal,
    /// Flavor scales; the instance count is pinned.
    Vertical,
    /// Both dimensions scale.
    FullAuto,
}

impl ScalingStrategy {
    /// Derive the strategy from a composed configuration.
    pub fn detect(config: &ScalabilityConfig) -> Self {
        Self::from_flags(
            config.flavor_scaling.enabled,
            config.instance_scaling.enabled,
        )
    }

    /// Strategy for a (flavor-scaling, instance-scaling) flag pair.
    ///
    /// Total over both booleans; there is no fallback arm.
    pub fn from_flags(flavor_enabled: bool, instance_enabled: bool) -> Self {
        match (flavor_enabled, instance_enabled) {
            (false, false) => ScalingStrategy::Fixed,
            (false, true) => ScalingStrategy::Horizontal,
            (true, false) => ScalingStrategy::Vertical,
            (true, true) => ScalingStrategy::FullAuto,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScalingStrategy::Fixed => "fixed",
            ScalingStrategy::Horizontal => "horizontal",
            ScalingStrategy::Vertical => "vertical",
            ScalingStrategy::FullAuto => "full-auto",
        }
    }
}

impl std::fmt::Display for ScalingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

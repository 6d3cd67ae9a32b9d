//! Composed scalability configuration.
//!
//! The richer view consumed by cost estimation, presets and strategy
//! classification. Constructed by calling code (or taken from a preset),
//! read-only afterwards; edits replace the value wholesale.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::flavor::{FlavorName, FlavorScale};
use crate::strategy::ScalingStrategy;

/// Documented default ceiling on instance counts when the plan tier
/// supplies none.
pub const DEFAULT_MAX_INSTANCES: u32 = 40;

// ── Scaling dimensions ────────────────────────────────────────────

/// Flavor-dimension bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorScalingConfig {
    pub min_flavor: Option<FlavorName>,
    pub max_flavor: Option<FlavorName>,
    /// Whether the platform may move the flavor between the bounds.
    pub enabled: bool,
}

impl FlavorScalingConfig {
    /// Scaling between two flavors.
    pub fn range(min: impl Into<FlavorName>, max: impl Into<FlavorName>) -> Self {
        Self {
            min_flavor: Some(min.into()),
            max_flavor: Some(max.into()),
            enabled: true,
        }
    }

    /// A single pinned flavor; the dimension does not scale.
    pub fn pinned(flavor: impl Into<FlavorName>) -> Self {
        let flavor = flavor.into();
        Self {
            min_flavor: Some(flavor.clone()),
            max_flavor: Some(flavor),
            enabled: false,
        }
    }
}

/// Instance-count-dimension bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceScalingConfig {
    pub min_instances: Option<u32>,
    pub max_instances: Option<u32>,
    /// Whether the platform may move the count between the bounds.
    pub enabled: bool,
}

impl InstanceScalingConfig {
    /// Scaling between two instance counts.
    pub fn range(min: u32, max: u32) -> Self {
        Self {
            min_instances: Some(min),
            max_instances: Some(max),
            enabled: true,
        }
    }

    /// A single pinned count; the dimension does not scale.
    pub fn pinned(count: u32) -> Self {
        Self {
            min_instances: Some(count),
            max_instances: Some(count),
            enabled: false,
        }
    }
}

/// A named build-flavor option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildFlavorConfig {
    pub flavor: FlavorName,
    pub enabled: bool,
}

// ── Constraints ───────────────────────────────────────────────────

/// Limits supplied by account/plan-tier logic external to this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalingConstraints {
    /// Hard ceiling on any instance count.
    pub max_allowed_instances: u32,
    /// Flavors the current plan may use, smallest first.
    pub allowed_flavors: Vec<FlavorName>,
    pub min_flavor_index: usize,
    pub max_flavor_index: usize,
}

impl ScalingConstraints {
    /// Constraints spanning a whole flavor scale with the default ceiling.
    pub fn for_scale(scale: &FlavorScale) -> Self {
        Self {
            max_allowed_instances: DEFAULT_MAX_INSTANCES,
            allowed_flavors: scale.names().to_vec(),
            min_flavor_index: 0,
            max_flavor_index: scale.len().saturating_sub(1),
        }
    }

    pub fn with_max_allowed_instances(mut self, ceiling: u32) -> Self {
        self.max_allowed_instances = ceiling;
        self
    }
}

impl Default for ScalingConstraints {
    fn default() -> Self {
        Self::for_scale(&FlavorScale::default())
    }
}

// ── Composed configuration ────────────────────────────────────────

/// The composed scalability configuration.
///
/// `strategy` is kept consistent with the two `enabled` flags: the
/// constructors derive it, and [`refresh_strategy`](Self::refresh_strategy)
/// re-derives it after direct edits to the flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalabilityConfig {
    pub strategy: ScalingStrategy,
    pub flavor_scaling: FlavorScalingConfig,
    pub instance_scaling: InstanceScalingConfig,
    /// Named build-flavor options offered to the caller.
    pub build_flavors: HashMap<String, BuildFlavorConfig>,
    pub constraints: ScalingConstraints,
    /// Whether builds run on a dedicated instance instead of the
    /// application's own.
    pub separate_build: bool,
    /// Flavor of the dedicated build instance.
    pub build_flavor: Option<FlavorName>,
}

impl ScalabilityConfig {
    /// Compose a configuration from the two scaling dimensions.
    ///
    /// The strategy is derived from the `enabled` flags so the pair
    /// cannot disagree at construction time.
    pub fn new(
        flavor_scaling: FlavorScalingConfig,
        instance_scaling: InstanceScalingConfig,
    ) -> Self {
        Self {
            strategy: ScalingStrategy::from_flags(
                flavor_scaling.enabled,
                instance_scaling.enabled,
            ),
            flavor_scaling,
            instance_scaling,
            ..Self::default()
        }
    }

    /// Fixed configuration: one flavor, one instance count, no scaling.
    pub fn fixed(flavor: impl Into<FlavorName>, instances: u32) -> Self {
        Self::new(
            FlavorScalingConfig::pinned(flavor),
            InstanceScalingConfig::pinned(instances),
        )
    }

    pub fn with_constraints(mut self, constraints: ScalingConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Run builds on a dedicated instance of the given flavor.
    pub fn with_dedicated_build(mut self, flavor: impl Into<FlavorName>) -> Self {
        self.separate_build = true;
        self.build_flavor = Some(flavor.into());
        self
    }

    /// Offer a named build-flavor option.
    pub fn with_build_flavor_option(
        mut self,
        name: impl Into<String>,
        config: BuildFlavorConfig,
    ) -> Self {
        self.build_flavors.insert(name.into(), config);
        self
    }

    /// Re-derive `strategy` after editing the `enabled` flags directly.
    pub fn refresh_strategy(&mut self) {
        self.strategy = ScalingStrategy::from_flags(
            self.flavor_scaling.enabled,
            self.instance_scaling.enabled,
        );
    }
}

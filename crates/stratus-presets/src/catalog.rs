//! Built-in deployment presets.
//!
//! A fixed catalog of scaling profiles covering the common deployment
//! shapes. Built once at startup, read-only afterwards: the catalog hands
//! out borrowed views and is never mutated or torn down at runtime.

use serde::{Deserialize, Serialize};

use stratus_core::{
    FlavorScalingConfig, InstanceScalingConfig, ScalabilityConfig, ScalingStrategy,
};

/// Deployment profile category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetCategory {
    Development,
    Staging,
    Production,
    HighTraffic,
    CostOptimized,
}

impl PresetCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PresetCategory::Development => "development",
            PresetCategory::Staging => "staging",
            PresetCategory::Production => "production",
            PresetCategory::HighTraffic => "high-traffic",
            PresetCategory::CostOptimized => "cost-optimized",
        }
    }
}

impl std::fmt::Display for PresetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A named, immutable deployment profile usable as a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: PresetCategory,
    pub configuration: ScalabilityConfig,
    /// Application kinds this preset suits; empty means any.
    pub applicable_types: Vec<String>,
    pub tags: Vec<String>,
}

impl Preset {
    /// Strategy of the underlying configuration.
    pub fn strategy(&self) -> ScalingStrategy {
        self.configuration.strategy
    }

    /// Whether this preset suits the given application kind.
    pub fn applies_to(&self, application_type: &str) -> bool {
        self.applicable_types.is_empty()
            || self.applicable_types.iter().any(|t| t == application_type)
    }
}

/// The built-in preset catalog.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// The catalog shipped with the engine.
    pub fn builtin() -> Self {
        Self {
            presets: default_presets(),
        }
    }

    /// All presets, in catalog order.
    pub fn all(&self) -> &[Preset] {
        &self.presets
    }

    /// Look up a preset by id.
    pub fn get(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// All presets in a category.
    pub fn by_category(&self, category: PresetCategory) -> Vec<&Preset> {
        self.presets
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// All presets suiting the given application kind.
    pub fn for_application_type(&self, application_type: &str) -> Vec<&Preset> {
        self.presets
            .iter()
            .filter(|p| p.applies_to(application_type))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The fixed default presets shipped with the engine.
///
/// Strategy labels are derived from the enabled flags by the
/// `ScalabilityConfig` constructors, so each preset's strategy and flags
/// agree by construction.
pub fn default_presets() -> Vec<Preset> {
    vec![
        Preset {
            id: "dev-single".to_string(),
            name: "Development".to_string(),
            description: "One small fixed instance for day-to-day development".to_string(),
            category: PresetCategory::Development,
            configuration: ScalabilityConfig::fixed("XS", 1),
            applicable_types: Vec::new(),
            tags: vec!["dev".to_string(), "single-instance".to_string()],
        },
        Preset {
            id: "staging-mirror".to_string(),
            name: "Staging".to_string(),
            description: "Pinned flavor with a little headroom to absorb review traffic"
                .to_string(),
            category: PresetCategory::Staging,
            configuration: ScalabilityConfig::new(
                FlavorScalingConfig::pinned("S"),
                InstanceScalingConfig::range(1, 2),
            ),
            applicable_types: Vec::new(),
            tags: vec!["staging".to_string(), "pre-production".to_string()],
        },
        Preset {
            id: "production-standard".to_string(),
            name: "Production".to_string(),
            description: "Scales both dimensions with a dedicated build instance".to_string(),
            category: PresetCategory::Production,
            configuration: ScalabilityConfig::new(
                FlavorScalingConfig::range("M", "L"),
                InstanceScalingConfig::range(2, 6),
            )
            .with_dedicated_build("XL"),
            applicable_types: vec!["webservice".to_string()],
            tags: vec!["production".to_string(), "auto-scaling".to_string()],
        },
        Preset {
            id: "high-traffic-burst".to_string(),
            name: "High Traffic".to_string(),
            description: "Wide bounds on both dimensions for spiky, heavy load".to_string(),
            category: PresetCategory::HighTraffic,
            configuration: ScalabilityConfig::new(
                FlavorScalingConfig::range("L", "2XL"),
                InstanceScalingConfig::range(3, 10),
            ),
            applicable_types: vec!["webservice".to_string()],
            tags: vec!["burst".to_string(), "auto-scaling".to_string()],
        },
        Preset {
            id: "cost-optimized-idle".to_string(),
            name: "Cost Optimized".to_string(),
            description: "Single instance that shrinks its flavor when idle".to_string(),
            category: PresetCategory::CostOptimized,
            configuration: ScalabilityConfig::new(
                FlavorScalingConfig::range("pico", "S"),
                InstanceScalingConfig::pinned(1),
            ),
            applicable_types: vec!["worker".to_string(), "cron".to_string()],
            tags: vec!["budget".to_string(), "low-traffic".to_string()],
        },
    ]
}

//! Scaling engine — the composed pipeline behind scaling requests.
//!
//! The `ScalingEngine` owns the collaborator snapshots and exposes the
//! whole flow to callers:
//! - Validates raw request deltas against the flavor scale and plan tier
//! - Applies accepted deltas onto the current configuration
//! - Prices composed configurations as monthly cost ranges
//! - Serves the preset catalog for one-click starting points

use tracing::debug;

use stratus_core::{
    FlavorScale, InstanceConfiguration, ScalabilityConfig, ScalabilityParameters,
    ScalingConstraints, ScalingStrategy,
};
use stratus_costs::{CostEstimate, CostEstimator, FlavorCatalog};
use stratus_presets::{Preset, PresetCatalog};
use stratus_scale::{merge, ValidationResult, Validator};

use crate::settings::{EngineSettings, SettingsResult};

/// One engine per flavor catalog; every operation reads shared snapshots
/// and returns fresh values, so a single engine can serve any number of
/// applications.
#[derive(Debug, Clone)]
pub struct ScalingEngine {
    /// Ordered flavor scale derived from the catalog.
    scale: FlavorScale,
    /// Request validator over the scale and plan-tier constraints.
    validator: Validator,
    /// Cost estimator over the catalog prices.
    estimator: CostEstimator,
    /// The builtin preset catalog.
    presets: PresetCatalog,
}

impl ScalingEngine {
    /// Engine over the builtin flavor catalog and default constraints.
    pub fn new() -> Self {
        Self::for_catalog(FlavorCatalog::builtin())
    }

    /// Engine over a provider-supplied catalog. The flavor scale and the
    /// validator constraints are derived from catalog order.
    pub fn for_catalog(catalog: FlavorCatalog) -> Self {
        let scale = catalog.scale();
        Self {
            validator: Validator::new(scale.clone()),
            estimator: CostEstimator::new(catalog),
            presets: PresetCatalog::builtin(),
            scale,
        }
    }

    /// Replace the plan-tier constraints used by validation.
    pub fn with_constraints(mut self, constraints: ScalingConstraints) -> Self {
        self.validator = self.validator.with_constraints(constraints);
        self
    }

    /// Override the currency stamped on cost estimates.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.estimator = self.estimator.with_currency(currency);
        self
    }

    /// Build an engine from loaded settings.
    pub fn from_settings(settings: &EngineSettings) -> SettingsResult<Self> {
        let mut engine = Self::for_catalog(settings.catalog()?);
        if let Some(ceiling) = settings.max_allowed_instances {
            let constraints = ScalingConstraints::for_scale(&engine.scale)
                .with_max_allowed_instances(ceiling);
            engine = engine.with_constraints(constraints);
        }
        if let Some(currency) = &settings.currency {
            engine = engine.with_currency(currency.clone());
        }
        Ok(engine)
    }

    /// Check a raw request delta before it is applied.
    pub fn validate(&self, params: &ScalabilityParameters) -> ValidationResult {
        let result = self.validator.validate(params);
        debug!(
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "request validated"
        );
        result
    }

    /// Apply a request delta onto the current configuration.
    ///
    /// Reconciliation keeps the untouched side of each dimension
    /// consistent with the requested side; the current configuration is
    /// never mutated.
    pub fn apply(
        &self,
        params: &ScalabilityParameters,
        current: &InstanceConfiguration,
    ) -> InstanceConfiguration {
        merge(params, current, &self.scale)
    }

    /// Price a composed configuration as a monthly cost range.
    pub fn estimate(&self, config: &ScalabilityConfig) -> CostEstimate {
        self.estimator.estimate(config)
    }

    /// The scaling strategy a configuration's enabled flags imply.
    pub fn strategy(&self, config: &ScalabilityConfig) -> ScalingStrategy {
        ScalingStrategy::detect(config)
    }

    /// All builtin presets, in catalog order.
    pub fn presets(&self) -> &[Preset] {
        self.presets.all()
    }

    /// Look up a builtin preset by id.
    pub fn preset(&self, id: &str) -> Option<&Preset> {
        self.presets.get(id)
    }

    /// Builtin presets suiting the given application kind.
    pub fn presets_for_type(&self, application_type: &str) -> Vec<&Preset> {
        self.presets.for_application_type(application_type)
    }

    /// The ordered flavor scale this engine reasons over.
    pub fn scale(&self) -> &FlavorScale {
        &self.scale
    }
}

impl Default for ScalingEngine {
    fn default() -> Self {
        Self::new()
    }
}

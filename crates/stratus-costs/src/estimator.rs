//! Monthly cost estimation for a scalability configuration.
//!
//! The estimator trusts a pre-validated configuration: it never
//! validates, and it produces whatever arithmetic follows from the inputs
//! it was given. For any ordered configuration (min flavor/instances at
//! or below max) the resulting range satisfies `monthly_max >=
//! monthly_min`.

use std::collections::HashMap;

use tracing::warn;

use serde::{Deserialize, Serialize};

use stratus_core::{FlavorName, ScalabilityConfig};

use crate::pricing::FlavorCatalog;

/// Billable hours per month used for monthly projections (24 x 30).
pub const HOURS_PER_MONTH: f64 = 720.0;

/// Currency code applied when none is configured.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// A monthly cost range for a scalability configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    /// Cost per month when running at the minimum bounds.
    pub monthly_min: f64,
    /// Cost per month when running at the maximum bounds.
    pub monthly_max: f64,
    pub currency: String,
    /// Named cost components; always carries `min_cost` and `max_cost`.
    pub breakdown: HashMap<String, f64>,
}

/// Computes monthly cost ranges from flavor prices and instance bounds.
#[derive(Debug, Clone)]
pub struct CostEstimator {
    catalog: FlavorCatalog,
    currency: String,
}

impl CostEstimator {
    /// Estimator over the given catalog snapshot, billing in
    /// [`DEFAULT_CURRENCY`].
    pub fn new(catalog: FlavorCatalog) -> Self {
        Self {
            catalog,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Override the engine-wide currency code. Fixed at construction,
    /// not a per-call knob.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Estimate the monthly cost range for a composed configuration.
    ///
    /// An absent bound borrows its counterpart (a pinned dimension prices
    /// the same at both ends); absent counts default the minimum to 1. A
    /// dedicated build instance, when configured, bills on top of both
    /// bounds and shows up as `build_cost` in the breakdown.
    pub fn estimate(&self, config: &ScalabilityConfig) -> CostEstimate {
        let flavors = &config.flavor_scaling;
        let min_flavor = flavors.min_flavor.as_ref().or(flavors.max_flavor.as_ref());
        let max_flavor = flavors.max_flavor.as_ref().or(flavors.min_flavor.as_ref());

        let counts = &config.instance_scaling;
        let min_instances = counts.min_instances.unwrap_or(1);
        let max_instances = counts.max_instances.unwrap_or(min_instances);

        let mut monthly_min = self.monthly_price(min_flavor) * f64::from(min_instances);
        let mut monthly_max = self.monthly_price(max_flavor) * f64::from(max_instances);

        let mut breakdown = HashMap::new();

        if config.separate_build
            && let Some(build) = &config.build_flavor
        {
            let build_cost = self.monthly_price(Some(build));
            monthly_min += build_cost;
            monthly_max += build_cost;
            breakdown.insert("build_cost".to_string(), build_cost);
        }

        breakdown.insert("min_cost".to_string(), monthly_min);
        breakdown.insert("max_cost".to_string(), monthly_max);

        CostEstimate {
            monthly_min,
            monthly_max,
            currency: self.currency.clone(),
            breakdown,
        }
    }

    /// Monthly price of one instance at `flavor`; zero when no flavor is
    /// set or the catalog has no price for it.
    fn monthly_price(&self, flavor: Option<&FlavorName>) -> f64 {
        let Some(name) = flavor else { return 0.0 };
        match self.catalog.price_per_hour(name) {
            Some(price) => price * HOURS_PER_MONTH,
            None => {
                warn!(flavor = %name, "flavor has no catalog price, estimating as zero");
                0.0
            }
        }
    }
}

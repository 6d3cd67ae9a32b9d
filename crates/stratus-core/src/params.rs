//! Scaling request parameters and the resolved instance configuration.

use serde::{Deserialize, Serialize};

use crate::flavor::FlavorName;

/// A partial scaling request.
///
/// Every field is tri-state: `None` means the caller did not mention the
/// field at all, `Some` is explicit intent — even when the value equals
/// the current one. Reconciliation only auto-adjusts the side the caller
/// left untouched, so the absent/present distinction is load-bearing and
/// must never collapse into a defaulted value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalabilityParameters {
    pub min_flavor: Option<FlavorName>,
    pub max_flavor: Option<FlavorName>,
    pub min_instances: Option<u32>,
    pub max_instances: Option<u32>,
}

impl ScalabilityParameters {
    /// Pin both flavor bounds to a single flavor.
    pub fn fixed_flavor(name: impl Into<FlavorName>) -> Self {
        let name = name.into();
        Self {
            min_flavor: Some(name.clone()),
            max_flavor: Some(name),
            ..Self::default()
        }
    }

    /// Pin both instance-count bounds to a single count.
    pub fn fixed_instances(count: u32) -> Self {
        Self {
            min_instances: Some(count),
            max_instances: Some(count),
            ..Self::default()
        }
    }

    pub fn with_min_flavor(mut self, name: impl Into<FlavorName>) -> Self {
        self.min_flavor = Some(name.into());
        self
    }

    pub fn with_max_flavor(mut self, name: impl Into<FlavorName>) -> Self {
        self.max_flavor = Some(name.into());
        self
    }

    pub fn with_min_instances(mut self, count: u32) -> Self {
        self.min_instances = Some(count);
        self
    }

    pub fn with_max_instances(mut self, count: u32) -> Self {
        self.max_instances = Some(count);
        self
    }

    /// True when no field is present at all.
    pub fn is_empty(&self) -> bool {
        self.min_flavor.is_none()
            && self.max_flavor.is_none()
            && self.min_instances.is_none()
            && self.max_instances.is_none()
    }
}

/// A complete, resolved scaling configuration for an application.
///
/// Assumed ordered on input: `min_flavor <= max_flavor` by scale order and
/// `min_instances <= max_instances`. Never mutated in place — merging a
/// request produces a fresh value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceConfiguration {
    pub min_flavor: FlavorName,
    pub max_flavor: FlavorName,
    pub min_instances: u32,
    pub max_instances: u32,
}

impl InstanceConfiguration {
    pub fn new(
        min_flavor: impl Into<FlavorName>,
        max_flavor: impl Into<FlavorName>,
        min_instances: u32,
        max_instances: u32,
    ) -> Self {
        Self {
            min_flavor: min_flavor.into(),
            max_flavor: max_flavor.into(),
            min_instances,
            max_instances,
        }
    }

    /// Single-flavor, single-count configuration.
    pub fn fixed(flavor: impl Into<FlavorName>, instances: u32) -> Self {
        let flavor = flavor.into();
        Self::new(flavor.clone(), flavor, instances, instances)
    }
}

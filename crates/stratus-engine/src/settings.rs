//! stratus.toml settings parser.
//!
//! Settings tune an engine at construction time: billing currency, the
//! plan-tier instance ceiling and an optional provider flavor catalog.
//! Every field is optional; an empty file yields the builtin defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use stratus_costs::{CatalogError, FlavorCatalog, FlavorDetails};

/// Errors raised while loading engine settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("flavor catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Engine settings, typically loaded from a `stratus.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Currency code stamped on every cost estimate.
    pub currency: Option<String>,
    /// Plan-tier ceiling on instance counts.
    pub max_allowed_instances: Option<u32>,
    /// Provider flavor catalog, smallest flavor first. Replaces the
    /// builtin catalog and its derived scale when present.
    pub flavors: Option<Vec<FlavorDetails>>,
}

impl EngineSettings {
    /// Parse settings from a TOML string.
    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a file path.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The catalog these settings describe: the listed flavors, or the
    /// builtin catalog when none are listed.
    pub fn catalog(&self) -> SettingsResult<FlavorCatalog> {
        match &self.flavors {
            Some(details) => Ok(FlavorCatalog::from_details(details.clone())?),
            None => Ok(FlavorCatalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let settings = EngineSettings::from_toml_str("").unwrap();
        assert!(settings.currency.is_none());
        assert!(settings.max_allowed_instances.is_none());
        assert_eq!(settings.catalog().unwrap(), FlavorCatalog::builtin());
    }

    #[test]
    fn test_parse_full() {
        let toml_str = r#"
currency = "USD"
max_allowed_instances = 12

[[flavors]]
name = "small"
mem_mb = 1024
cpus = 1
disk_gb = 10
price_per_hour = 0.01

[[flavors]]
name = "big"
mem_mb = 4096
cpus = 4
disk_gb = 40
price_per_hour = 0.04
"#;
        let settings = EngineSettings::from_toml_str(toml_str).unwrap();
        assert_eq!(settings.currency.as_deref(), Some("USD"));
        assert_eq!(settings.max_allowed_instances, Some(12));

        let catalog = settings.catalog().unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.scale().is_greater("big", "small"));
    }

    #[test]
    fn test_duplicate_flavor_rejected() {
        let toml_str = r#"
[[flavors]]
name = "small"
mem_mb = 1024
cpus = 1
disk_gb = 10
price_per_hour = 0.01

[[flavors]]
name = "small"
mem_mb = 2048
cpus = 2
disk_gb = 20
price_per_hour = 0.02
"#;
        let settings = EngineSettings::from_toml_str(toml_str).unwrap();
        let err = settings.catalog().unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Catalog(CatalogError::DuplicateFlavor(name)) if name == "small"
        ));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = EngineSettings::from_toml_str("currency = ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_round_trip() {
        let settings = EngineSettings {
            currency: Some("USD".to_string()),
            max_allowed_instances: Some(20),
            flavors: None,
        };
        let toml_str = settings.to_toml_string().unwrap();
        let back = EngineSettings::from_toml_str(&toml_str).unwrap();
        assert_eq!(back.currency.as_deref(), Some("USD"));
        assert_eq!(back.max_allowed_instances, Some(20));
    }
}

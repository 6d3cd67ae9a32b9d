//! Flavor pricing catalog — the per-flavor data supplied by the platform.
//!
//! The catalog is a read-only snapshot passed in by the host application;
//! this core never fetches or caches pricing itself. Entry order defines
//! the flavor scale, smallest first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stratus_core::{FlavorName, FlavorScale};

/// Result type alias for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while building a catalog snapshot.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("flavor catalog is empty")]
    Empty,

    #[error("duplicate flavor name: {0}")]
    DuplicateFlavor(String),
}

/// Size, compute and price data for a single flavor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorDetails {
    pub name: FlavorName,
    /// Memory per instance in MiB.
    pub mem_mb: u32,
    /// Virtual CPUs per instance.
    pub cpus: u32,
    /// Disk per instance in GiB.
    pub disk_gb: u32,
    /// Hourly price per instance.
    pub price_per_hour: f64,
}

/// Read-only snapshot of the flavor catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorCatalog {
    details: Vec<FlavorDetails>,
}

impl FlavorCatalog {
    /// Build a snapshot from provider-supplied entries.
    ///
    /// Order is preserved and defines the flavor scale, smallest first.
    pub fn from_details(details: Vec<FlavorDetails>) -> CatalogResult<Self> {
        if details.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, entry) in details.iter().enumerate() {
            if details[..i].iter().any(|d| d.name == entry.name) {
                return Err(CatalogError::DuplicateFlavor(entry.name.clone()));
            }
        }
        Ok(Self { details })
    }

    /// The built-in catalog: the standard nine-flavor scale with list
    /// prices. Stands in when the platform supplies no catalog of its own.
    pub fn builtin() -> Self {
        // (name, mem MiB, cpus, disk GiB, price per hour)
        let entries = [
            ("pico", 256, 1, 5, 0.004_3),
            ("nano", 512, 1, 10, 0.008_6),
            ("XS", 1_024, 1, 20, 0.017_2),
            ("S", 2_048, 2, 40, 0.034_4),
            ("M", 4_096, 4, 80, 0.068_8),
            ("L", 8_192, 6, 120, 0.137_7),
            ("XL", 16_384, 8, 160, 0.275_4),
            ("2XL", 24_576, 12, 240, 0.413_1),
            ("3XL", 32_768, 16, 320, 0.550_8),
        ];
        let details = entries
            .iter()
            .map(|&(name, mem_mb, cpus, disk_gb, price_per_hour)| FlavorDetails {
                name: name.to_string(),
                mem_mb,
                cpus,
                disk_gb,
                price_per_hour,
            })
            .collect();
        Self { details }
    }

    /// Hourly price for `name`, if the catalog knows it.
    pub fn price_per_hour(&self, name: &str) -> Option<f64> {
        self.get(name).map(|d| d.price_per_hour)
    }

    /// Full details for `name`.
    pub fn get(&self, name: &str) -> Option<&FlavorDetails> {
        self.details.iter().find(|d| d.name == name)
    }

    /// The ordered flavor scale derived from catalog order.
    pub fn scale(&self) -> FlavorScale {
        FlavorScale::new(self.details.iter().map(|d| d.name.clone()))
    }

    /// All entries, smallest flavor first.
    pub fn entries(&self) -> &[FlavorDetails] {
        &self.details
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }
}

impl Default for FlavorCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

//! stratus-costs — flavor pricing and monthly cost estimation.
//!
//! [`FlavorCatalog`] is the read-only per-flavor pricing snapshot
//! supplied by the host application; [`CostEstimator`] turns a composed
//! scalability configuration into a monthly min/max cost range with a
//! named breakdown.

pub mod estimator;
pub mod pricing;

pub use estimator::{CostEstimate, CostEstimator, DEFAULT_CURRENCY, HOURS_PER_MONTH};
pub use pricing::{CatalogError, CatalogResult, FlavorCatalog, FlavorDetails};

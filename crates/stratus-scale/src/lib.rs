//! stratus-scale — reconciliation and validation of scaling requests.
//!
//! Two stages of the request pipeline:
//!
//! - [`merge`] resolves a partial [`ScalabilityParameters`] request
//!   against the current [`InstanceConfiguration`], applying the
//!   auto-expand/auto-contract rules to whichever bound the caller left
//!   untouched.
//! - [`Validator`] checks the raw request against ordering, presence and
//!   plan-tier constraints, collecting every violation into a
//!   [`ValidationResult`] instead of failing fast.
//!
//! Both stages are pure and synchronous; neither ever mutates its inputs.
//!
//! [`ScalabilityParameters`]: stratus_core::ScalabilityParameters
//! [`InstanceConfiguration`]: stratus_core::InstanceConfiguration

pub mod merger;
pub mod validator;

pub use merger::merge;
pub use validator::{ValidationResult, Validator};

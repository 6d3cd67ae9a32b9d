//! Request validation — ordering and presence checks with collected
//! verdicts.
//!
//! Validation runs on the raw request delta, before merging, so malformed
//! requests are rejected without touching the current configuration.
//! Every rule is evaluated independently and every violation is
//! collected; nothing short-circuits.

use serde::{Deserialize, Serialize};

use stratus_core::{FlavorScale, ScalabilityParameters, ScalingConstraints};

/// Outcome of validating a scaling request — a pure value.
///
/// Two severities: errors block submission upstream, warnings are
/// informational and never affect validity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Valid iff no errors were collected. Derived, never stored, so the
    /// flag cannot drift from the error list.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

/// Validates raw scaling requests before they are merged.
///
/// Holds read-only snapshots of the flavor scale and the plan-tier
/// constraints; both come from the host application, never from inside
/// this core.
#[derive(Debug, Clone)]
pub struct Validator {
    scale: FlavorScale,
    constraints: ScalingConstraints,
}

impl Validator {
    /// Validator over the given scale with default constraints.
    pub fn new(scale: FlavorScale) -> Self {
        let constraints = ScalingConstraints::for_scale(&scale);
        Self { scale, constraints }
    }

    /// Replace the plan-tier constraints.
    pub fn with_constraints(mut self, constraints: ScalingConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Check a raw request against ordering and presence rules.
    ///
    /// The three error messages are a compatibility contract with the
    /// platform CLI; downstream tooling string-matches on them.
    pub fn validate(&self, params: &ScalabilityParameters) -> ValidationResult {
        let mut result = ValidationResult::default();

        if params.is_empty() {
            result.error("You should provide at least 1 option");
        }

        if let (Some(min), Some(max)) = (&params.min_flavor, &params.max_flavor)
            && self.scale.is_greater(min, max)
        {
            result.error("min-flavor can't be a greater flavor than max-flavor");
        }

        if let (Some(min), Some(max)) = (params.min_instances, params.max_instances)
            && min > max
        {
            result.error("min-instances can't be greater than max-instances");
        }

        self.check_flavor(&mut result, "min-flavor", params.min_flavor.as_deref());
        self.check_flavor(&mut result, "max-flavor", params.max_flavor.as_deref());
        self.check_count(&mut result, "min-instances", params.min_instances);
        self.check_count(&mut result, "max-instances", params.max_instances);

        result
    }

    fn check_flavor(&self, result: &mut ValidationResult, field: &str, value: Option<&str>) {
        if let Some(name) = value
            && !self.scale.is_valid(name)
        {
            result.warning(format!("{field} \"{name}\" is not in the flavor scale"));
        }
    }

    fn check_count(&self, result: &mut ValidationResult, field: &str, value: Option<u32>) {
        let Some(count) = value else { return };

        if count == 0 {
            result.warning(format!("{field} must be at least 1"));
        } else if count > self.constraints.max_allowed_instances {
            result.warning(format!(
                "{field} exceeds the maximum of {} instances allowed by the current plan",
                self.constraints.max_allowed_instances
            ));
        }
    }
}

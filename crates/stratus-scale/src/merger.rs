//! Reconciliation — merges a scaling request into the current configuration.
//!
//! The same rule shape applies to the flavor pair (ordered by scale
//! index) and the instance-count pair (ordered numerically):
//!
//! ```text
//! new_min = params.min if provided else current.min
//! new_max = params.max if provided else current.max
//!
//! if only min was provided and new_min > new_max:
//!     new_max = new_min          // auto-expand-up
//! if only max was provided and new_max < new_min:
//!     new_min = new_max          // auto-contract-down
//! ```
//!
//! An operator raising one bound expects the untouched bound to get out
//! of the way rather than see the request rejected, so only the side the
//! caller did NOT mention may move, and only in the direction that
//! restores ordering. When both bounds are explicit they pass through
//! unchanged even if inverted — that case belongs to the validator.

use tracing::debug;

use stratus_core::{FlavorName, FlavorScale, InstanceConfiguration, ScalabilityParameters};

/// Merge a partial scaling request into the current configuration.
///
/// Pure and infallible: `current` is never touched and the result is a
/// fresh [`InstanceConfiguration`]. Merging empty parameters returns the
/// current configuration unchanged.
pub fn merge(
    params: &ScalabilityParameters,
    current: &InstanceConfiguration,
    scale: &FlavorScale,
) -> InstanceConfiguration {
    let (min_flavor, max_flavor) = merge_flavor_bounds(params, current, scale);
    let (min_instances, max_instances) = merge_instance_bounds(params, current);

    InstanceConfiguration {
        min_flavor,
        max_flavor,
        min_instances,
        max_instances,
    }
}

fn merge_flavor_bounds(
    params: &ScalabilityParameters,
    current: &InstanceConfiguration,
    scale: &FlavorScale,
) -> (FlavorName, FlavorName) {
    let mut new_min = params
        .min_flavor
        .clone()
        .unwrap_or_else(|| current.min_flavor.clone());
    let mut new_max = params
        .max_flavor
        .clone()
        .unwrap_or_else(|| current.max_flavor.clone());

    if params.min_flavor.is_some()
        && params.max_flavor.is_none()
        && scale.is_greater(&new_min, &new_max)
    {
        debug!(from = %new_max, to = %new_min, "max-flavor follows the raised min");
        new_max = new_min.clone();
    }

    if params.max_flavor.is_some()
        && params.min_flavor.is_none()
        && scale.is_greater(&new_min, &new_max)
    {
        debug!(from = %new_min, to = %new_max, "min-flavor follows the lowered max");
        new_min = new_max.clone();
    }

    (new_min, new_max)
}

fn merge_instance_bounds(
    params: &ScalabilityParameters,
    current: &InstanceConfiguration,
) -> (u32, u32) {
    let mut new_min = params.min_instances.unwrap_or(current.min_instances);
    let mut new_max = params.max_instances.unwrap_or(current.max_instances);

    if params.min_instances.is_some() && params.max_instances.is_none() && new_min > new_max {
        debug!(from = new_max, to = new_min, "max-instances follows the raised min");
        new_max = new_min;
    }

    if params.max_instances.is_some() && params.min_instances.is_none() && new_max < new_min {
        debug!(from = new_min, to = new_max, "min-instances follows the lowered max");
        new_min = new_max;
    }

    (new_min, new_max)
}

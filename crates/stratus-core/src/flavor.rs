//! Ordered flavor scale — named compute sizes and their ordering.
//!
//! Flavor names are not lexically ordered by power ("2XL" sorts before
//! "XL" as a string), so every comparison goes through the position in an
//! explicit catalog sequence instead of string order.

use serde::{Deserialize, Serialize};

/// A named compute-size tier (e.g. "S", "M", "XL").
pub type FlavorName = String;

/// The ordered catalog of flavor names, index 0 = smallest.
///
/// The sequence is fixed once constructed and totally ordered. Lookup and
/// comparison are total functions: unknown names index as `0` and never
/// produce an error at this layer — the validator reports them separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorScale {
    names: Vec<FlavorName>,
}

impl FlavorScale {
    /// Build a scale from a provider-supplied ordered sequence,
    /// smallest flavor first.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FlavorName>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Position of `name` in the scale; `0` when the name is unknown.
    pub fn index_of(&self, name: &str) -> usize {
        self.names.iter().position(|n| n == name).unwrap_or(0)
    }

    /// Whether `a` is a strictly greater flavor than `b`.
    pub fn is_greater(&self, a: &str, b: &str) -> bool {
        self.index_of(a) > self.index_of(b)
    }

    /// Exact, case-sensitive membership check.
    pub fn is_valid(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// The ordered names, smallest first.
    pub fn names(&self) -> &[FlavorName] {
        &self.names
    }

    /// Number of flavors in the scale.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The smallest flavor in the scale, if any.
    pub fn smallest(&self) -> Option<&FlavorName> {
        self.names.first()
    }

    /// The largest flavor in the scale, if any.
    pub fn largest(&self) -> Option<&FlavorName> {
        self.names.last()
    }
}

impl Default for FlavorScale {
    /// The standard nine-step scale, used when the platform catalog
    /// supplies no custom sequence.
    fn default() -> Self {
        Self::new(["pico", "nano", "XS", "S", "M", "L", "XL", "2XL", "3XL"])
    }
}

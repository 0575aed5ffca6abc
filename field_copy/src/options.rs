//! Copy policies
//!
//! The defaults reproduce the permissive behavior: incompatible fields are skipped, a
//! fixed-length destination only needs to be at least as long as the source, and a
//! growable destination is grown as needed. All three are serde-deserializable so a
//! caller can carry them in an existing configuration file.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// What to do with a field whose names match but whose types cannot be copied
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MappingPolicy {
    /// Leave the destination field unchanged
    #[default]
    SkipOnMismatch,
    /// Fail the copy with `Error::FieldMismatch`
    ErrorOnMismatch,
}

/// Length requirement for a fixed-length destination collection
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FixedLengthPolicy {
    /// Destination length must be `>=` the source length; trailing elements are untouched
    #[default]
    AtLeast,
    /// Destination length must equal the source length
    Exact,
}

/// How a growable destination collection reaches the source length
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GrowthPolicy {
    /// Append default elements as needed, then truncate to the source length
    #[default]
    Append,
    /// Destination must already have the source length
    RequireMatch,
}

/// Options for a [`Copier`](crate::Copier)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyOptions {
    /// Field-level mismatch handling
    pub mapping:      MappingPolicy,
    /// Fixed-length destination requirement
    pub fixed_length: FixedLengthPolicy,
    /// Growable destination handling
    pub growth:       GrowthPolicy,
}

impl CopyOptions {
    /// Set the mapping policy
    #[must_use]
    pub const fn with_mapping(mut self, mapping: MappingPolicy) -> Self {
        self.mapping = mapping;
        self
    }

    /// Set the fixed-length policy
    #[must_use]
    pub const fn with_fixed_length(mut self, fixed_length: FixedLengthPolicy) -> Self {
        self.fixed_length = fixed_length;
        self
    }

    /// Set the growth policy
    #[must_use]
    pub const fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Whether a fixed-length destination of `destination_len` can take `source_len` elements
    pub const fn accepts_fixed_length(&self, destination_len: usize, source_len: usize) -> bool {
        match self.fixed_length {
            FixedLengthPolicy::AtLeast => destination_len >= source_len,
            FixedLengthPolicy::Exact => destination_len == source_len,
        }
    }

    /// Whether a growable destination of `destination_len` can take `source_len` elements
    pub const fn accepts_growable_length(&self, destination_len: usize, source_len: usize) -> bool {
        match self.growth {
            GrowthPolicy::Append => true,
            GrowthPolicy::RequireMatch => destination_len == source_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policies_are_permissive() {
        let options = CopyOptions::default();
        assert!(options.accepts_fixed_length(3, 2));
        assert!(!options.accepts_fixed_length(1, 2));
        assert!(options.accepts_growable_length(0, 5));
        assert_eq!(options.mapping, MappingPolicy::SkipOnMismatch);
    }

    #[test]
    fn test_strict_policies() {
        let options = CopyOptions::default()
            .with_fixed_length(FixedLengthPolicy::Exact)
            .with_growth(GrowthPolicy::RequireMatch);
        assert!(!options.accepts_fixed_length(3, 2));
        assert!(options.accepts_fixed_length(2, 2));
        assert!(!options.accepts_growable_length(1, 2));
        assert!(options.accepts_growable_length(2, 2));
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(MappingPolicy::ErrorOnMismatch.to_string(), "error_on_mismatch");
        assert_eq!(GrowthPolicy::RequireMatch.as_ref(), "require_match");
    }
}

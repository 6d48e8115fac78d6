//! Extended values.

use serde::{Deserialize, Serialize};

/// Name prefix marking a value built by [`EnumDomain::convert`].
///
/// [`EnumDomain::convert`]: super::EnumDomain::convert
pub const GENERATED_PREFIX: &str = "Generated_";

/// A named value occupying a numeric slot in a domain.
///
/// Registered values come out of [`EnumDomain::register`]; converted values
/// come out of [`EnumDomain::convert`] and are never indexed.
///
/// [`EnumDomain::register`]: super::EnumDomain::register
/// [`EnumDomain::convert`]: super::EnumDomain::convert
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtendedValue {
    /// Numeric slot in the shared space.
    pub id: i32,

    /// Identifier, unique within the domain unless a conflict was reported.
    pub name: String,
}

impl ExtendedValue {
    /// Create a value. This does not register it anywhere.
    #[must_use]
    pub fn new(name: impl Into<String>, id: i32) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Was this value synthesized from a native value?
    #[must_use]
    pub fn is_generated(&self) -> bool {
        self.name.starts_with(GENERATED_PREFIX)
    }
}

impl std::fmt::Display for ExtendedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}

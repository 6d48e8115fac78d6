//! Declarative extension manifests.
//!
//! An extension can ship its registrations as JSON instead of code:
//!
//! ```json
//! {
//!   "domain": "CustomRarity",
//!   "plugin": "com.example.frost",
//!   "entries": [
//!     {"name": "Frost", "id": 10}
//!   ]
//! }
//! ```
//!
//! Manifests are applied with [`EnumDomain::apply_manifest`].
//!
//! [`EnumDomain::apply_manifest`]: super::EnumDomain::apply_manifest

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One value to register.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub id: i32,
}

/// A set of registrations targeting one domain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionManifest {
    /// Label of the target domain.
    pub domain: String,

    /// Guid of the plugin shipping the manifest, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,

    /// Entries, registered in order.
    #[serde(default)]
    pub entries: Vec<ManifestEntry>,
}

impl ExtensionManifest {
    /// Create an empty manifest for a domain.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            plugin: None,
            entries: Vec::new(),
        }
    }

    /// Attribute the manifest to a plugin.
    #[must_use]
    pub fn for_plugin(mut self, guid: impl Into<String>) -> Self {
        self.plugin = Some(guid.into());
        self
    }

    /// Add an entry (builder pattern).
    #[must_use]
    pub fn with_entry(mut self, name: impl Into<String>, id: i32) -> Self {
        self.entries.push(ManifestEntry {
            name: name.into(),
            id,
        });
        self
    }

    /// Parse a manifest from JSON.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Errors reading or applying a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("malformed manifest: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("manifest targets domain `{found}`, expected `{expected}`")]
    DomainMismatch { expected: String, found: String },
}

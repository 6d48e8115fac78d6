//! Plugin registry.
//!
//! Every plugin is recorded as it is constructed, before any of its content
//! registrations run. Load order is kept.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Identity of a loaded plugin.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Globally unique identifier, e.g. `com.example.frost`.
    pub guid: String,

    /// Display name.
    pub name: String,

    /// Version string as declared by the plugin.
    pub version: String,
}

impl PluginInfo {
    /// Create plugin info.
    pub fn new(
        guid: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}

impl std::fmt::Display for PluginInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.name, self.version, self.guid)
    }
}

/// Plugins in load order, indexed by guid.
#[derive(Clone, Debug, Default)]
pub struct PluginRegistry {
    plugins: Vec<PluginInfo>,
    by_guid: FxHashMap<String, usize>,
}

impl PluginRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a plugin.
    ///
    /// A second plugin with the same guid replaces the first in place, with a
    /// warning; its load position does not change. Returns the replaced info.
    pub fn register(&mut self, info: PluginInfo) -> Option<PluginInfo> {
        if let Some(&index) = self.by_guid.get(&info.guid) {
            tracing::warn!(
                guid = %info.guid,
                previous = %self.plugins[index],
                "plugin guid registered twice",
            );
            return Some(std::mem::replace(&mut self.plugins[index], info));
        }

        tracing::debug!(plugin = %info, "plugin registered");
        self.by_guid.insert(info.guid.clone(), self.plugins.len());
        self.plugins.push(info);
        None
    }

    /// Get a plugin by guid.
    #[must_use]
    pub fn get(&self, guid: &str) -> Option<&PluginInfo> {
        self.by_guid.get(guid).map(|&index| &self.plugins[index])
    }

    /// Check if a guid is registered.
    #[must_use]
    pub fn contains(&self, guid: &str) -> bool {
        self.by_guid.contains_key(guid)
    }

    /// Get the number of registered plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Plugins in load order.
    pub fn iter(&self) -> impl Iterator<Item = &PluginInfo> {
        self.plugins.iter()
    }

    /// Guids in load order.
    pub fn guids(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(|p| p.guid.as_str())
    }
}

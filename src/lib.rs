//! # ccg-ext
//!
//! Extension registries for card game mods.
//!
//! ## Design Principles
//!
//! 1. **Permissive Loading**: Mods are written independently and load in an
//!    order nobody controls. Conflicts are reported, never fatal.
//!
//! 2. **Explicit Domains**: Every extensible enumeration lives in an
//!    `EnumDomain` the caller creates and owns. No hidden global state.
//!
//! 3. **Structured Diagnostics**: Conflicts are `Diagnostic` records with a
//!    kind, not just log lines, so callers and tests can act on them.
//!
//! ## Modules
//!
//! - `enums`: Extensible enumerations (domains, diagnostics, manifests)
//! - `cards`: Custom card definitions, rarity, and registry
//! - `pools`: Merging custom cards into native pool queries
//! - `plugins`: Loaded plugin tracking

pub mod enums;
pub mod cards;
pub mod pools;
pub mod plugins;

// Re-export commonly used types
pub use crate::enums::{
    NativeEnum, ExtendedValue, GENERATED_PREFIX,
    EnumDomain, Registration, DomainConfig,
    Diagnostic, DiagnosticKind, DiagnosticSink, Severity, TracingSink, CollectingSink,
    ExtensionManifest, ManifestEntry, ManifestError,
};

pub use crate::cards::{CardId, ClassId, CardDefinition, CardRegistry, Rarity};

pub use crate::pools::{CardPoolManager, PoolQuery, RarityCondition};

pub use crate::plugins::{PluginInfo, PluginRegistry};

//! Enumeration domains.
//!
//! An `EnumDomain` is the namespace formed by a base enumeration and one
//! extension type. It owns:
//! - the reserved ids, snapshotted from the base enumeration at creation
//! - an id index and a name index over registered values
//! - a sink for registration diagnostics
//!
//! Registration is permissive: conflicts are reported, then the new value
//! overwrites whatever the indexes held. Load order across independently
//! written extensions is not controllable, so nothing here refuses a value.

use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use super::config::DomainConfig;
use super::diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink};
use super::manifest::{ExtensionManifest, ManifestError};
use super::native::NativeEnum;
use super::value::{ExtendedValue, GENERATED_PREFIX};

/// Diagnostics produced by one registration. There are at most three checks.
pub type Diagnostics = SmallVec<[Diagnostic; 3]>;

/// Result of a registration.
#[derive(Clone, Debug)]
pub struct Registration {
    /// The value, already indexed.
    pub value: ExtendedValue,

    /// Conflicts found before the value was indexed.
    pub diagnostics: Diagnostics,
}

impl Registration {
    /// Did the registration go through without any conflict?
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Was a conflict of this kind reported?
    #[must_use]
    pub fn has(&self, kind: DiagnosticKind) -> bool {
        self.diagnostics.iter().any(|d| d.kind == kind)
    }

    /// Discard the diagnostics.
    #[must_use]
    pub fn into_value(self) -> ExtendedValue {
        self.value
    }
}

#[derive(Debug, Default)]
struct Indexes {
    by_id: FxHashMap<i32, ExtendedValue>,
    by_name: FxHashMap<String, ExtendedValue>,
}

/// Registry of extended values for one base enumeration.
///
/// Shareable across threads (`Arc<EnumDomain<N>>`); the indexes sit behind a
/// read-write lock and lookups return owned copies.
///
/// ## Example
///
/// ```
/// use ccg_ext::cards::Rarity;
/// use ccg_ext::enums::EnumDomain;
///
/// let rarities = EnumDomain::<Rarity>::new("CustomRarity");
///
/// let mythic = rarities.register("Mythic", 10);
/// assert_eq!(rarities.lookup_by_id(10), Some(mythic.clone()));
/// assert_eq!(rarities.get_native_equivalent(&mythic), Rarity(10));
/// ```
pub struct EnumDomain<N: NativeEnum> {
    name: String,
    reserved: FxHashSet<i32>,
    indexes: RwLock<Indexes>,
    sink: Arc<dyn DiagnosticSink>,
    _native: PhantomData<fn() -> N>,
}

impl<N: NativeEnum> EnumDomain<N> {
    /// Create a domain that reports through `tracing`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(DomainConfig::new(name))
    }

    /// Create a domain from a configuration.
    ///
    /// The reserved ids are taken from `N::defined()` here and never change.
    #[must_use]
    pub fn with_config(config: DomainConfig) -> Self {
        let reserved = N::defined().iter().map(|v| v.to_raw()).collect();
        Self {
            name: config.name,
            reserved,
            indexes: RwLock::new(Indexes::default()),
            sink: config.sink,
            _native: PhantomData,
        }
    }

    /// Domain label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a value and return it.
    ///
    /// Conflicts go to the sink only; see [`Self::register_reporting`].
    pub fn register(&self, name: impl Into<String>, id: i32) -> ExtendedValue {
        self.register_reporting(name, id).value
    }

    /// Register a value, returning it with any conflicts found.
    ///
    /// Checks, in order: name already registered, id already registered, id
    /// reserved by the base enumeration. Each hit is reported; none of them
    /// stops the value from replacing the current entries in both indexes.
    ///
    /// Diagnostics reach the sink while the write lock is held, so with
    /// concurrent loaders the sink sees conflicts in index write order. A
    /// sink must not call back into the domain.
    pub fn register_reporting(&self, name: impl Into<String>, id: i32) -> Registration {
        self.register_from(ExtendedValue::new(name, id), None)
    }

    fn register_from(&self, value: ExtendedValue, origin: Option<&str>) -> Registration {
        let id = value.id;
        let mut diagnostics = Diagnostics::new();

        let mut indexes = self.indexes.write();

        if let Some(prev) = indexes.by_name.get(&value.name) {
            diagnostics.push(self.diagnostic(DiagnosticKind::NameConflict, &value, Some(prev), origin));
        }
        if let Some(prev) = indexes.by_id.get(&id) {
            diagnostics.push(self.diagnostic(DiagnosticKind::IdConflict, &value, Some(prev), origin));
        }
        if self.reserved.contains(&id) {
            diagnostics.push(self.diagnostic(DiagnosticKind::ReservedIdViolation, &value, None, origin));
        }

        indexes.by_name.insert(value.name.clone(), value.clone());
        indexes.by_id.insert(id, value.clone());

        for diagnostic in &diagnostics {
            self.sink.emit(diagnostic);
        }
        drop(indexes);

        if diagnostics.is_empty() {
            tracing::debug!(domain = %self.name, name = %value.name, id, origin, "registered extended value");
        }

        Registration { value, diagnostics }
    }

    fn diagnostic(
        &self,
        kind: DiagnosticKind,
        value: &ExtendedValue,
        previous: Option<&ExtendedValue>,
        origin: Option<&str>,
    ) -> Diagnostic {
        Diagnostic {
            kind,
            domain: self.name.clone(),
            name: value.name.clone(),
            id: value.id,
            previous: previous.cloned(),
            origin: origin.map(str::to_string),
        }
    }

    /// Register every entry of a manifest, in order.
    ///
    /// Fails without registering anything if the manifest targets another
    /// domain. Conflicts between entries are reported as usual, tagged with
    /// the manifest's plugin.
    pub fn apply_manifest(
        &self,
        manifest: &ExtensionManifest,
    ) -> Result<Vec<Registration>, ManifestError> {
        if manifest.domain != self.name {
            return Err(ManifestError::DomainMismatch {
                expected: self.name.clone(),
                found: manifest.domain.clone(),
            });
        }

        let origin = manifest.plugin.as_deref();
        Ok(manifest
            .entries
            .iter()
            .map(|entry| self.register_from(ExtendedValue::new(entry.name.as_str(), entry.id), origin))
            .collect())
    }

    /// The base enumeration value with the same raw id.
    ///
    /// No check that `value.id` is a defined member: an unreserved id yields
    /// a native value the base enumeration never defined.
    #[must_use]
    pub fn get_native_equivalent(&self, value: &ExtendedValue) -> N {
        N::from_raw(value.id)
    }

    /// Build an unregistered value for a native one.
    ///
    /// The name is `Generated_` followed by the member's canonical name
    /// (empty for undefined members). Neither index is touched.
    #[must_use]
    pub fn convert(&self, native: N) -> ExtendedValue {
        let name = format!("{}{}", GENERATED_PREFIX, native.canonical_name().unwrap_or_default());
        ExtendedValue::new(name, native.to_raw())
    }

    /// Ids of all indexed values, unordered.
    #[must_use]
    pub fn list_ids(&self) -> Vec<i32> {
        self.indexes.read().by_id.keys().copied().collect()
    }

    /// Native equivalents of all values in the id index, unordered.
    #[must_use]
    pub fn list_values_as_native(&self) -> Vec<N> {
        self.indexes
            .read()
            .by_id
            .values()
            .map(|v| self.get_native_equivalent(v))
            .collect()
    }

    /// Names of all indexed values, unordered.
    #[must_use]
    pub fn list_names(&self) -> Vec<String> {
        self.indexes.read().by_name.keys().cloned().collect()
    }

    /// Defined native members followed by extended values.
    ///
    /// Extended values sitting on a reserved id are left out since they
    /// alias a member already listed.
    #[must_use]
    pub fn merged_native_values(&self) -> Vec<N> {
        let mut merged = N::defined().to_vec();
        let indexes = self.indexes.read();
        let mut extended: Vec<i32> = indexes
            .by_id
            .keys()
            .copied()
            .filter(|id| !self.reserved.contains(id))
            .collect();
        extended.sort_unstable();
        merged.extend(extended.into_iter().map(N::from_raw));
        merged
    }

    /// Value currently indexed under `name`, if any.
    #[must_use]
    pub fn lookup_by_name(&self, name: &str) -> Option<ExtendedValue> {
        self.indexes.read().by_name.get(name).cloned()
    }

    /// Value currently indexed under `id`, if any.
    #[must_use]
    pub fn lookup_by_id(&self, id: i32) -> Option<ExtendedValue> {
        self.indexes.read().by_id.get(&id).cloned()
    }

    /// Ids defined natively when the domain was created.
    #[must_use]
    pub fn reserved_ids(&self) -> &FxHashSet<i32> {
        &self.reserved
    }

    /// Is `id` defined by the base enumeration?
    #[must_use]
    pub fn is_reserved(&self, id: i32) -> bool {
        self.reserved.contains(&id)
    }

    /// Number of distinct ids indexed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indexes.read().by_id.len()
    }

    /// Check if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indexes.read().by_id.is_empty()
    }

    /// Drop every registered value. The reserved ids are kept.
    pub fn reset(&self) {
        let mut indexes = self.indexes.write();
        indexes.by_id.clear();
        indexes.by_name.clear();
    }
}

impl<N: NativeEnum> std::fmt::Debug for EnumDomain<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumDomain")
            .field("name", &self.name)
            .field("base", &N::TYPE_NAME)
            .field("reserved", &self.reserved.len())
            .field("registered", &self.len())
            .finish()
    }
}

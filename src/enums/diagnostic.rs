//! Registration diagnostics.
//!
//! Registry conflicts are never fatal. Each one becomes a [`Diagnostic`]
//! that is returned to the caller and handed to the domain's
//! [`DiagnosticSink`].

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::value::ExtendedValue;

/// Kind of registration conflict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// The name was already registered in the domain.
    NameConflict,
    /// The id was already registered in the domain.
    IdConflict,
    /// The id is defined natively by the base enumeration.
    ReservedIdViolation,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DiagnosticKind::NameConflict => "name conflict",
            DiagnosticKind::IdConflict => "id conflict",
            DiagnosticKind::ReservedIdViolation => "reserved id",
        };
        f.write_str(s)
    }
}

/// Diagnostic severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Warning,
}

/// A structured registration diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,

    /// Label of the domain the registration targeted.
    pub domain: String,

    /// Name being registered.
    pub name: String,

    /// Id being registered.
    pub id: i32,

    /// The indexed value that gets shadowed, for name and id conflicts.
    pub previous: Option<ExtendedValue>,

    /// Guid of the plugin whose manifest made the registration, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl Diagnostic {
    /// Registry diagnostics are always warnings.
    #[must_use]
    pub fn severity(&self) -> Severity {
        Severity::Warning
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.kind, &self.previous) {
            (DiagnosticKind::NameConflict, Some(prev)) => write!(
                f,
                "name `{}` conflict in domain {} (id {} replaces id {})",
                self.name, self.domain, self.id, prev.id
            ),
            (DiagnosticKind::IdConflict, Some(prev)) => write!(
                f,
                "id #{} conflict between `{}` and `{}` in domain {}",
                self.id, self.name, prev.name, self.domain
            ),
            (DiagnosticKind::ReservedIdViolation, _) => write!(
                f,
                "id #{} is reserved and can't be set for `{}` in domain {}",
                self.id, self.name, self.domain
            ),
            (kind, None) => write!(
                f,
                "{} for `{}` (id #{}) in domain {}",
                kind, self.name, self.id, self.domain
            ),
        }?;
        match &self.origin {
            Some(origin) => write!(f, " [from {}]", origin),
            None => Ok(()),
        }
    }
}

/// Receiver for registration diagnostics.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Sink that reports through `tracing` at warn level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        tracing::warn!(
            domain = %diagnostic.domain,
            kind = ?diagnostic.kind,
            name = %diagnostic.name,
            id = diagnostic.id,
            origin = diagnostic.origin.as_deref(),
            "{}",
            diagnostic
        );
    }
}

/// Sink that keeps every diagnostic in memory.
///
/// Useful for load reports and for asserting on conflicts in tests.
#[derive(Debug, Default)]
pub struct CollectingSink {
    collected: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything collected so far.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.collected.lock().clone()
    }

    /// Drain everything collected so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.collected.lock())
    }

    /// Kinds of the collected diagnostics, in emission order.
    #[must_use]
    pub fn kinds(&self) -> Vec<DiagnosticKind> {
        self.collected.lock().iter().map(|d| d.kind).collect()
    }

    /// Number of diagnostics collected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collected.lock().len()
    }

    /// Check if nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collected.lock().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.collected.lock().push(diagnostic.clone());
    }
}

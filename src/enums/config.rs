//! Domain configuration.
//!
//! A domain is configured once, when it is created:
//! - `name`: label used in diagnostics (usually the extension type's name)
//! - `sink`: where registration diagnostics go

use std::sync::Arc;

use super::diagnostic::{DiagnosticSink, TracingSink};
use super::native::NativeEnum;

/// Configuration for an [`EnumDomain`](super::EnumDomain).
#[derive(Clone)]
pub struct DomainConfig {
    /// Human-readable domain label.
    pub name: String,

    /// Receiver for registration diagnostics.
    pub sink: Arc<dyn DiagnosticSink>,
}

impl DomainConfig {
    /// Create a configuration reporting through `tracing`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sink: Arc::new(TracingSink),
        }
    }

    /// Label the domain after its base enumeration.
    #[must_use]
    pub fn default_for<N: NativeEnum>() -> Self {
        Self::new(N::TYPE_NAME)
    }

    /// Route diagnostics to a different sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }
}

impl std::fmt::Debug for DomainConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainConfig")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

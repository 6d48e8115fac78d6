//! Extensible enumerations.
//!
//! Lets independently loaded extensions add named values to a base
//! enumeration's numeric space, reporting collisions with each other and
//! with the natively defined values.
//!
//! ## Key Types
//!
//! - `NativeEnum`: Base enumeration backed by `i32` (see `native_enum!`)
//! - `ExtendedValue`: A `(name, id)` pair contributed by an extension
//! - `EnumDomain`: Reserved ids plus id and name indexes for one base type
//! - `Diagnostic`: Structured record of a registration conflict
//! - `ExtensionManifest`: Registrations declared as JSON
//!
//! ## Conflict Policy
//!
//! Nothing is refused. Name conflicts, id conflicts and reserved-id hits are
//! reported to the domain's sink and the later registration shadows the
//! earlier one. Missing lookups are `None`.

pub mod config;
pub mod diagnostic;
pub mod domain;
pub mod manifest;
pub mod native;
pub mod value;

pub use config::DomainConfig;
pub use diagnostic::{
    CollectingSink, Diagnostic, DiagnosticKind, DiagnosticSink, Severity, TracingSink,
};
pub use domain::{Diagnostics, EnumDomain, Registration};
pub use manifest::{ExtensionManifest, ManifestEntry, ManifestError};
pub use native::NativeEnum;
pub use value::{ExtendedValue, GENERATED_PREFIX};

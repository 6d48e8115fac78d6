//! Loaded plugin tracking.

pub mod registry;

pub use registry::{PluginInfo, PluginRegistry};

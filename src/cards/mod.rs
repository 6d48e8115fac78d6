//! Custom cards: definitions, rarity, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for custom card definitions
//! - `ClassId`: Opaque class identifier (games define classes)
//! - `Rarity`: Native rarity enumeration, extensible through `EnumDomain`
//! - `CardDefinition`: Class and rarity of a custom card
//! - `CardRegistry`: Card definition lookup
//!
//! ## Classless Cards
//!
//! Cards can have `class: None`. Those only show up in pool queries that do
//! not filter by class.

pub mod definition;
pub mod rarity;
pub mod registry;

pub use definition::{CardDefinition, CardId, ClassId};
pub use rarity::Rarity;
pub use registry::CardRegistry;

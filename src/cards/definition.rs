//! Custom card definitions.
//!
//! A `CardDefinition` carries what pool queries filter on: the card's class
//! and its rarity. Everything else about a custom card belongs to the game.

use serde::{Deserialize, Serialize};

use super::rarity::Rarity;

/// Unique identifier for a custom card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Class (clan) identifier. Games define which classes exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassId(pub u32);

impl ClassId {
    /// Create a new class ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ClassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Class({})", self.0)
    }
}

/// Custom card definition.
///
/// ## Example
///
/// ```
/// use ccg_ext::cards::{CardDefinition, CardId, ClassId, Rarity};
///
/// let torch = CardDefinition::new(CardId::new(1), "Torch")
///     .with_class(ClassId::new(2))
///     .with_rarity(Rarity::Uncommon);
///
/// assert_eq!(torch.class, Some(ClassId::new(2)));
/// assert!(!torch.is_classless());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Owning class. `None` for classless cards.
    pub class: Option<ClassId>,

    /// Rarity, possibly a mod-registered one.
    pub rarity: Rarity,
}

impl CardDefinition {
    /// Create a classless common card.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            class: None,
            rarity: Rarity::default(),
        }
    }

    /// Set the class (builder pattern).
    #[must_use]
    pub fn with_class(mut self, class: ClassId) -> Self {
        self.class = Some(class);
        self
    }

    /// Set the rarity (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn is_classless(&self) -> bool {
        self.class.is_none()
    }
}

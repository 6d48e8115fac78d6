//! Pool query constraints.
//!
//! A native pool query asks for cards of some class at some rarity. The same
//! constraints are applied to custom cards before they are merged in.

use serde::{Deserialize, Serialize};

use crate::cards::{CardDefinition, ClassId, Rarity};
use crate::enums::NativeEnum;

/// How a card's rarity is compared against the requested one.
///
/// Comparison uses raw rarity values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RarityCondition {
    /// Any rarity passes.
    #[default]
    Any,
    /// Rarity must equal the requested one.
    Exactly,
    /// Rarity must not exceed the requested one.
    AtMost,
    /// Rarity must be at least the requested one.
    AtLeast,
}

impl RarityCondition {
    /// Does `actual` satisfy this condition against `wanted`?
    #[must_use]
    pub fn accepts(self, wanted: Rarity, actual: Rarity) -> bool {
        let (wanted, actual) = (wanted.to_raw(), actual.to_raw());
        match self {
            RarityCondition::Any => true,
            RarityCondition::Exactly => actual == wanted,
            RarityCondition::AtMost => actual <= wanted,
            RarityCondition::AtLeast => actual >= wanted,
        }
    }
}

/// Constraints a custom card must meet to join a pool query result.
///
/// ## Example
///
/// ```
/// use ccg_ext::cards::{CardDefinition, CardId, ClassId, Rarity};
/// use ccg_ext::pools::{PoolQuery, RarityCondition};
///
/// let query = PoolQuery::new()
///     .for_class(ClassId::new(1))
///     .with_rarity(Rarity::Rare, RarityCondition::AtMost);
///
/// let card = CardDefinition::new(CardId::new(1), "Ember")
///     .with_class(ClassId::new(1))
///     .with_rarity(Rarity::Uncommon);
///
/// assert!(query.matches(&card));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolQuery {
    /// Required class. `None` accepts every card, classless ones included.
    pub class: Option<ClassId>,

    /// Requested rarity.
    pub rarity: Rarity,

    /// How `rarity` is applied.
    pub condition: RarityCondition,
}

impl PoolQuery {
    /// A query that accepts every card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one class (builder pattern).
    #[must_use]
    pub fn for_class(mut self, class: ClassId) -> Self {
        self.class = Some(class);
        self
    }

    /// Restrict by rarity (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity, condition: RarityCondition) -> Self {
        self.rarity = rarity;
        self.condition = condition;
        self
    }

    /// Does the card meet every constraint?
    #[must_use]
    pub fn matches(&self, card: &CardDefinition) -> bool {
        let class_ok = match self.class {
            Some(class) => card.class == Some(class),
            None => true,
        };
        class_ok && self.condition.accepts(self.rarity, card.rarity)
    }
}

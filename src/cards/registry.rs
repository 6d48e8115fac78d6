//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every custom card definition contributed by
//! mods and provides lookup by `CardId`.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, ClassId};

/// Registry of custom card definitions.
///
/// ## Example
///
/// ```
/// use ccg_ext::cards::{CardDefinition, CardId, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new(CardId::new(1), "Torch"));
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Torch");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// A card reusing an existing ID replaces it, with a warning. Returns the
    /// replaced definition.
    pub fn register(&mut self, card: CardDefinition) -> Option<CardDefinition> {
        let replaced = self.cards.insert(card.id, card);
        if let Some(old) = &replaced {
            tracing::warn!(
                id = old.id.raw(),
                replaced = %old.name,
                "card ID registered twice; later definition wins",
            );
        }
        replaced
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards belonging to a class.
    pub fn find_by_class(&self, class: ClassId) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().filter(move |c| c.class == Some(class))
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rarity;

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();

        registry.register(CardDefinition::new(CardId::new(1), "Test Card"));

        let found = registry.get(CardId::new(1));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Test Card");

        assert!(registry.get(CardId::new(99)).is_none());
    }

    #[test]
    fn test_duplicate_id_replaces() {
        let mut registry = CardRegistry::new();

        assert!(registry.register(CardDefinition::new(CardId::new(1), "Card A")).is_none());
        let replaced = registry.register(CardDefinition::new(CardId::new(1), "Card B"));

        assert_eq!(replaced.map(|c| c.name), Some("Card A".to_string()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(CardId::new(1)).unwrap().name, "Card B");
    }

    #[test]
    fn test_find_by_class() {
        let mut registry = CardRegistry::new();

        let stygian = ClassId::new(0);
        let umbra = ClassId::new(1);

        registry.register(CardDefinition::new(CardId::new(1), "Siren").with_class(stygian));
        registry.register(CardDefinition::new(CardId::new(2), "Morsel").with_class(umbra));
        registry.register(CardDefinition::new(CardId::new(3), "Tidecaller").with_class(stygian));
        registry.register(CardDefinition::new(CardId::new(4), "Torch"));

        assert_eq!(registry.find_by_class(stygian).count(), 2);
        assert_eq!(registry.find_by_class(umbra).count(), 1);
    }

    #[test]
    fn test_find_with_predicate() {
        let mut registry = CardRegistry::new();

        registry.register(CardDefinition::new(CardId::new(1), "Plain"));
        registry.register(
            CardDefinition::new(CardId::new(2), "Shiny").with_rarity(Rarity::Rare),
        );

        let rare: Vec<_> = registry.find(|c| c.rarity == Rarity::Rare).collect();
        assert_eq!(rare.len(), 1);
        assert_eq!(rare[0].name, "Shiny");
    }

    #[test]
    fn test_contains_and_iter() {
        let mut registry = CardRegistry::new();
        assert!(registry.is_empty());

        registry.register(CardDefinition::new(CardId::new(1), "A"));
        registry.register(CardDefinition::new(CardId::new(2), "B"));

        assert!(registry.contains(CardId::new(1)));
        assert!(!registry.contains(CardId::new(99)));

        let names: Vec<_> = registry.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"A"));
        assert!(names.contains(&"B"));
    }
}

//! Custom card pool membership.
//!
//! Mods assign custom cards to named pools (reward pools, effect pools).
//! Whenever the game resolves a pool, the custom cards that meet the same
//! constraints are merged into its result.

use rustc_hash::FxHashMap;

use crate::cards::{CardDefinition, CardId, CardRegistry};

use super::query::PoolQuery;

/// Pool name to custom card mapping.
///
/// ## Example
///
/// ```
/// use ccg_ext::cards::{CardDefinition, CardId, CardRegistry};
/// use ccg_ext::pools::{CardPoolManager, PoolQuery};
///
/// let mut cards = CardRegistry::new();
/// cards.register(CardDefinition::new(CardId::new(7), "Torch"));
///
/// let mut pools = CardPoolManager::new();
/// pools.add_to_pool(CardId::new(7), "MegaPool");
///
/// let mut result = vec![CardId::new(1)];
/// pools.extend_pool_results("MegaPool", &PoolQuery::new(), &cards, &mut result);
/// assert_eq!(result, vec![CardId::new(1), CardId::new(7)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardPoolManager {
    pools: FxHashMap<String, Vec<CardId>>,
}

impl CardPoolManager {
    /// Create a manager with no pools.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card to a pool. Adding it twice is a no-op.
    pub fn add_to_pool(&mut self, card: CardId, pool: impl Into<String>) {
        let members = self.pools.entry(pool.into()).or_default();
        if !members.contains(&card) {
            members.push(card);
        }
    }

    /// Custom cards in a pool, in insertion order. Empty for unknown pools.
    #[must_use]
    pub fn cards_in_pool(&self, pool: &str) -> &[CardId] {
        self.pools.get(pool).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names of every pool containing the card.
    pub fn pools_for(&self, card: CardId) -> impl Iterator<Item = &str> {
        self.pools
            .iter()
            .filter(move |(_, members)| members.contains(&card))
            .map(|(name, _)| name.as_str())
    }

    /// Number of known pools.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Custom cards of a pool that satisfy the query.
    ///
    /// Pool members missing from `cards` are skipped with a warning.
    pub fn cards_for_pool<'a>(
        &self,
        pool: &str,
        query: &PoolQuery,
        cards: &'a CardRegistry,
    ) -> Vec<&'a CardDefinition> {
        self.cards_for_pool_where(pool, cards, |card| query.matches(card))
    }

    /// Custom cards of a pool accepted by an arbitrary card filter.
    ///
    /// Used where the game filters a pool with its own card filter rather
    /// than a class and rarity. Missing definitions are skipped with a warning.
    pub fn cards_for_pool_where<'a, F>(
        &self,
        pool: &str,
        cards: &'a CardRegistry,
        filter: F,
    ) -> Vec<&'a CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.cards_in_pool(pool)
            .iter()
            .filter_map(|&id| {
                let card = cards.get(id);
                if card.is_none() {
                    tracing::warn!(pool, card = id.raw(), "pool member has no card definition");
                }
                card
            })
            .filter(|card| filter(*card))
            .collect()
    }

    /// Append the pool's matching custom cards to a native result list.
    ///
    /// Returns whether `results` is non-empty afterwards.
    pub fn extend_pool_results(
        &self,
        pool: &str,
        query: &PoolQuery,
        cards: &CardRegistry,
        results: &mut Vec<CardId>,
    ) -> bool {
        self.extend_pool_results_where(pool, cards, results, |card| query.matches(card))
    }

    /// Append the pool's custom cards accepted by `filter` to a result list.
    ///
    /// Returns whether `results` is non-empty afterwards, so a native query
    /// that found nothing still succeeds when custom cards fill it.
    pub fn extend_pool_results_where<F>(
        &self,
        pool: &str,
        cards: &CardRegistry,
        results: &mut Vec<CardId>,
        filter: F,
    ) -> bool
    where
        F: Fn(&CardDefinition) -> bool,
    {
        let matching = self.cards_for_pool_where(pool, cards, filter);
        if !matching.is_empty() {
            tracing::debug!(pool, added = matching.len(), "merging custom cards into pool");
        }
        results.extend(matching.into_iter().map(|card| card.id));
        !results.is_empty()
    }
}

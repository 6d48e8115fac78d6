//! Content loading integration tests.
//!
//! These follow a mod from construction to gameplay: the plugin is recorded,
//! it registers a custom rarity and custom cards, and pool queries pick the
//! cards up alongside native content.

use std::sync::Arc;

use ccg_ext::cards::{CardDefinition, CardId, CardRegistry, ClassId, Rarity};
use ccg_ext::enums::{CollectingSink, DomainConfig, EnumDomain, ExtensionManifest, NativeEnum};
use ccg_ext::plugins::{PluginInfo, PluginRegistry};
use ccg_ext::pools::{CardPoolManager, PoolQuery, RarityCondition};

const HELLHORNED: ClassId = ClassId::new(0);
const AWOKEN: ClassId = ClassId::new(1);

struct Loader {
    plugins: PluginRegistry,
    rarities: EnumDomain<Rarity>,
    cards: CardRegistry,
    pools: CardPoolManager,
    sink: Arc<CollectingSink>,
}

impl Loader {
    fn new() -> Self {
        let sink = Arc::new(CollectingSink::new());
        Self {
            plugins: PluginRegistry::new(),
            rarities: EnumDomain::with_config(
                DomainConfig::new("CustomRarity").with_sink(sink.clone()),
            ),
            cards: CardRegistry::new(),
            pools: CardPoolManager::new(),
            sink,
        }
    }
}

/// A plugin adds a rarity and a card using it; the card joins reward pools.
#[test]
fn test_plugin_contributes_rarity_and_cards() {
    let mut loader = Loader::new();

    loader
        .plugins
        .register(PluginInfo::new("com.example.mythic", "Mythic Cards", "1.0.0"));

    let mythic = loader.rarities.register("Mythic", 10);
    let mythic_rarity = loader.rarities.get_native_equivalent(&mythic);

    loader.cards.register(
        CardDefinition::new(CardId::new(1000), "Inferno Crown")
            .with_class(HELLHORNED)
            .with_rarity(mythic_rarity),
    );
    loader.cards.register(
        CardDefinition::new(CardId::new(1001), "Ember Shard")
            .with_class(HELLHORNED)
            .with_rarity(Rarity::Common),
    );
    loader.pools.add_to_pool(CardId::new(1000), "MegaPool");
    loader.pools.add_to_pool(CardId::new(1001), "MegaPool");

    assert!(loader.sink.is_empty());
    assert!(loader.plugins.contains("com.example.mythic"));

    // Native reward query: rare or better for the Hellhorned.
    let mut native_result = vec![CardId::new(1), CardId::new(2)];
    let query = PoolQuery::new()
        .for_class(HELLHORNED)
        .with_rarity(Rarity::Rare, RarityCondition::AtLeast);
    let non_empty = loader
        .pools
        .extend_pool_results("MegaPool", &query, &loader.cards, &mut native_result);

    assert!(non_empty);
    assert_eq!(native_result, vec![CardId::new(1), CardId::new(2), CardId::new(1000)]);

    // Other classes see nothing.
    let awoken = PoolQuery::new().for_class(AWOKEN);
    assert!(loader.pools.cards_for_pool("MegaPool", &awoken, &loader.cards).is_empty());
}

/// A mid-battle effect draws from a pool through its own card filter.
#[test]
fn test_effect_filter_pulls_custom_cards() {
    let mut loader = Loader::new();
    loader.cards.register(
        CardDefinition::new(CardId::new(2000), "Frost Lance").with_rarity(Rarity::Uncommon),
    );
    loader.cards.register(
        CardDefinition::new(CardId::new(2001), "Frost Wall").with_rarity(Rarity::Rare),
    );
    loader.pools.add_to_pool(CardId::new(2000), "SpellPool");
    loader.pools.add_to_pool(CardId::new(2001), "SpellPool");

    // The native filter matched nothing; custom cards alone make it succeed.
    let mut to_process = Vec::new();
    let found = loader.pools.extend_pool_results_where(
        "SpellPool",
        &loader.cards,
        &mut to_process,
        |card| card.name.contains("Lance"),
    );
    assert!(found);
    assert_eq!(to_process, vec![CardId::new(2000)]);

    // A filter nothing passes leaves an empty list and reports failure.
    let mut none = Vec::new();
    assert!(!loader
        .pools
        .extend_pool_results_where("SpellPool", &loader.cards, &mut none, |_| false));
}

/// The rarity list the game iterates includes mod rarities after native ones.
#[test]
fn test_rarity_list_merges_extensions() {
    let loader = Loader::new();
    loader.rarities.register("Mythic", 10);
    loader.rarities.register("Legendary", 11);

    let merged = loader.rarities.merged_native_values();
    assert_eq!(&merged[..Rarity::defined().len()], Rarity::defined());
    assert_eq!(
        &merged[Rarity::defined().len()..],
        &[Rarity::from_raw(10), Rarity::from_raw(11)]
    );
}

/// Two plugins ship manifests that collide; loading carries on.
#[test]
fn test_conflicting_plugins_still_load() {
    let mut loader = Loader::new();

    let first = ExtensionManifest::new("CustomRarity")
        .for_plugin("com.example.first")
        .with_entry("Mythic", 10);
    let second = ExtensionManifest::new("CustomRarity")
        .for_plugin("com.example.second")
        .with_entry("Exotic", 10)
        .with_entry("Uncommon+", 1);

    for manifest in [&first, &second] {
        let guid = manifest.plugin.clone().unwrap();
        loader.plugins.register(PluginInfo::new(guid.clone(), guid, "1.0"));
        loader.rarities.apply_manifest(manifest).unwrap();
    }

    assert_eq!(loader.plugins.len(), 2);
    assert_eq!(loader.sink.len(), 2);

    // The load report can blame the second plugin for both conflicts.
    let origins: Vec<_> = loader
        .sink
        .diagnostics()
        .into_iter()
        .map(|d| d.origin)
        .collect();
    assert_eq!(origins, vec![Some("com.example.second".to_string()); 2]);
    assert_eq!(loader.rarities.lookup_by_id(10).unwrap().name, "Exotic");
    assert_eq!(loader.rarities.lookup_by_name("Mythic").unwrap().id, 10);

    // A mod rarity on a reserved id aliases the native rarity.
    let aliased = loader.rarities.lookup_by_name("Uncommon+").unwrap();
    assert_eq!(loader.rarities.get_native_equivalent(&aliased), Rarity::Uncommon);
}

/// Native rarities converted for uniform handling never enter the registry.
#[test]
fn test_converted_native_rarity() {
    let loader = Loader::new();

    let converted = loader.rarities.convert(Rarity::Champion);
    assert_eq!(converted.name, "Generated_Champion");
    assert_eq!(converted.id, 3);
    assert!(loader.rarities.lookup_by_name("Generated_Champion").is_none());
    assert!(loader.rarities.is_empty());
}

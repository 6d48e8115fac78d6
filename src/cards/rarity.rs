//! Card rarity.

crate::native_enum! {
    /// Collectable rarity of a card.
    ///
    /// Mods can add rarities through an `EnumDomain<Rarity>`; any raw value
    /// is representable. Rarities compare by raw value in pool queries.
    #[derive(serde::Serialize, serde::Deserialize)]
    pub struct Rarity {
        Common = 0,
        Uncommon = 1,
        Rare = 2,
        Champion = 3,
        Starter = 4,
    }
}

impl Default for Rarity {
    fn default() -> Self {
        Rarity::Common
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::enums::NativeEnum;

        match self.canonical_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Rarity({})", self.0),
        }
    }
}

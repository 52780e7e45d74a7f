use schema::{AbilitySlot, NamedApiResource, Pokemon, Sprites, StatSlot, TypeSlot};

/// A builder for creating test detail records with common defaults.
///
/// # Example
/// ```ignore
/// let charizard = PokemonFixture::new(6, "charizard")
///     .with_types(&["fire", "flying"])
///     .with_stat("special-attack", 109)
///     .build();
/// ```
pub struct PokemonFixture {
    id: u32,
    name: String,
    types: Vec<String>,
    abilities: Vec<String>,
    stats: Vec<(String, u16)>,
}

impl PokemonFixture {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            types: Vec::new(),
            abilities: Vec::new(),
            stats: Vec::new(),
        }
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_ability(mut self, ability: &str) -> Self {
        self.abilities.push(ability.to_string());
        self
    }

    pub fn with_stat(mut self, key: &str, value: u16) -> Self {
        self.stats.push((key.to_string(), value));
        self
    }

    /// Fills all six known stat keys with deterministic values derived
    /// from the dex id, each within the source's 0-255 range.
    pub fn with_default_stats(mut self) -> Self {
        let base = self.id % 100;
        for (offset, key) in [
            "hp",
            "attack",
            "defense",
            "special-attack",
            "special-defense",
            "speed",
        ]
        .iter()
        .enumerate()
        {
            self.stats
                .push((key.to_string(), (30 + base + 10 * offset as u32) as u16));
        }
        self
    }

    pub fn build(self) -> Pokemon {
        let types = self
            .types
            .iter()
            .enumerate()
            .map(|(i, name)| TypeSlot {
                slot: i as u8 + 1,
                type_: NamedApiResource {
                    name: name.clone(),
                    url: format!("https://pokeapi.co/api/v2/type/{}/", i + 1),
                },
            })
            .collect();

        let abilities = self
            .abilities
            .iter()
            .enumerate()
            .map(|(i, name)| AbilitySlot {
                slot: i as u8 + 1,
                is_hidden: false,
                ability: NamedApiResource {
                    name: name.clone(),
                    url: format!("https://pokeapi.co/api/v2/ability/{}/", i + 1),
                },
            })
            .collect();

        let stats = self
            .stats
            .iter()
            .enumerate()
            .map(|(i, (key, value))| StatSlot {
                base_stat: *value,
                effort: 0,
                stat: NamedApiResource {
                    name: key.clone(),
                    url: format!("https://pokeapi.co/api/v2/stat/{}/", i + 1),
                },
            })
            .collect();

        Pokemon {
            id: self.id,
            name: self.name,
            height: 7,
            weight: 69,
            types,
            abilities,
            stats,
            sprites: Sprites::default(),
        }
    }
}

use crate::pokemon_types::{PokemonType, TypeSlot};
use crate::resource::NamedApiResource;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An ability slot on a detail record, in slot order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub slot: u8,
    pub is_hidden: bool,
    pub ability: NamedApiResource,
}

/// One observed base-stat value. The key is kept as the raw wire string so
/// that keys outside the known six are carried instead of rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: u16,
    pub effort: u16,
    pub stat: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArtworkSprite {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ArtworkSprite,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

/// Full detail record for one Pokemon, as returned by the detail endpoint.
/// Read-only snapshot; nothing here is mutated after the fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Height in decimeters.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl Pokemon {
    /// Type names in slot order, as raw wire strings.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.type_.name.as_str()).collect()
    }

    /// Type tags parsed into the closed enum; names outside the known set
    /// are dropped rather than failing the record.
    pub fn type_tags(&self) -> Vec<PokemonType> {
        self.types
            .iter()
            .filter_map(|t| PokemonType::from_str(&t.type_.name).ok())
            .collect()
    }

    /// Ability names in slot order.
    pub fn ability_names(&self) -> Vec<&str> {
        self.abilities
            .iter()
            .map(|a| a.ability.name.as_str())
            .collect()
    }

    /// Looks up a base stat by wire key. Missing keys yield `None`; callers
    /// that render decide the fallback.
    pub fn base_stat(&self, key: &str) -> Option<u16> {
        self.stats
            .iter()
            .find(|s| s.stat.name == key)
            .map(|s| s.base_stat)
    }

    /// Preferred display artwork: official artwork when present, otherwise
    /// the plain front sprite.
    pub fn artwork(&self) -> Option<&str> {
        self.sprites
            .other
            .official_artwork
            .front_default
            .as_deref()
            .or(self.sprites.front_default.as_deref())
    }

    /// Height in meters for display (wire unit is decimeters).
    pub fn height_m(&self) -> f32 {
        self.height as f32 / 10.0
    }

    /// Weight in kilograms for display (wire unit is hectograms).
    pub fn weight_kg(&self) -> f32 {
        self.weight as f32 / 10.0
    }
}

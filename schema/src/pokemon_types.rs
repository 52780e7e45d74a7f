use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// Elemental type tags as named by the remote data source.
///
/// The wire model carries type names as plain strings; this enum is the
/// closed set the filter toggles operate on. Parsing uses the kebab-case
/// names from the API (`PokemonType::try_from("fire")` etc.).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

/// The six base-statistic keys.
///
/// Stat aggregation works over raw string keys so that unknown keys coming
/// off the wire are carried rather than rejected; this enum exists for
/// display ordering, labels, and descriptions of the known six.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum StatType {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatType {
    /// Kebab-case key as it appears on the wire.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Short label for stat bar rows.
    pub fn label(&self) -> &'static str {
        match self {
            StatType::Hp => "HP",
            StatType::Attack => "Attack",
            StatType::Defense => "Defense",
            StatType::SpecialAttack => "Sp. Atk",
            StatType::SpecialDefense => "Sp. Def",
            StatType::Speed => "Speed",
        }
    }

    /// One-line description shown alongside the stat bar.
    pub fn description(&self) -> &'static str {
        match self {
            StatType::Hp => "Hit Points - how much damage this Pokemon can take.",
            StatType::Attack => "Physical attack power.",
            StatType::Defense => "Physical defense against attacks.",
            StatType::SpecialAttack => "Power of special (non-physical) attacks.",
            StatType::SpecialDefense => "Resistance against special attacks.",
            StatType::Speed => "How fast the Pokemon acts in battle.",
        }
    }
}

/// A type slot on a Pokemon detail record, in slot order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_: crate::resource::NamedApiResource,
}

impl fmt::Display for TypeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_type_names_round_trip_kebab_case() {
        assert_eq!(PokemonType::Fire.to_string(), "fire");
        assert_eq!(
            PokemonType::from_str("fire").unwrap(),
            PokemonType::Fire
        );
    }

    #[test]
    fn test_unknown_type_name_is_rejected() {
        assert!(PokemonType::from_str("stellar").is_err());
    }

    #[test]
    fn test_stat_keys_match_wire_names() {
        assert_eq!(StatType::SpecialAttack.key(), "special-attack");
        assert_eq!(StatType::Hp.key(), "hp");
        assert_eq!(
            StatType::from_str("special-defense").unwrap(),
            StatType::SpecialDefense
        );
    }
}

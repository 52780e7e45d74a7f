use crate::resource::{ApiResource, NamedApiResource};
use serde::{Deserialize, Serialize};

/// Species record. Only the fields the pokedex consumes are modeled; the
/// endpoint returns far more, which serde ignores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub id: u32,
    pub name: String,
    pub evolution_chain: ApiResource,
}

/// One node of the branching evolution tree. `evolves_to` is ordered as the
/// data source lists it; consumers decide how to traverse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedApiResource,
    pub evolves_to: Vec<ChainLink>,
}

/// The full evolution tree for one chain id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: ChainLink,
}

impl ChainLink {
    /// A leaf node: this species does not evolve further.
    pub fn is_terminal(&self) -> bool {
        self.evolves_to.is_empty()
    }
}

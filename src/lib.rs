// In: src/lib.rs

//! Terminal Pokedex
//!
//! Fetches Pokemon data from a remote read-only data source and renders a
//! searchable, type-filterable list with per-Pokemon detail screens, stat
//! bars, and evolution chains. All domain logic (filtering, stat
//! aggregation, chain linearization) is pure library code; the terminal
//! shell is a thin presentation layer over it.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod app;
pub mod client;
pub mod errors;
pub mod evolution;
pub mod filter;
pub mod stats;
pub mod view;

#[cfg(test)]
pub(crate) mod test_fixtures;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pokedex` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the wire model and the closed domain enums.
pub use schema::{
    AbilitySlot,
    ChainLink,
    EvolutionChain,
    NamedApiResource,
    NamedApiResourceList,
    Pokemon,
    PokemonSpecies,
    PokemonType,
    StatSlot,
    StatType,
    TypeSlot,
};

// --- From this crate's modules (`src/`) ---

// The interactive shell and its command grammar.
pub use app::{App, Command};

// Data client and the join-all batch fetch.
pub use client::{PokeApiClient, DEFAULT_BASE_URL, KANTO_DEX_SIZE};

// Core pure logic.
pub use evolution::{first_path, linearize, resolve_chain, EvolutionStage};
pub use filter::filter_pokemon;
pub use stats::{aggregate_max, animated_value, eased_fraction, max_for};

// Crate-specific error and result types.
pub use errors::{DexError, DexResult, NetworkError, NotFoundError, ParseError};

// Pokedex Schema - Shared type definitions
// This crate contains the wire model for the remote Pokemon data source and
// the closed domain enums (types, stat keys) that are shared between the
// main pokedex crate and its view layer.

// Re-export the main types
pub use pokemon_data::*;
pub use pokemon_types::*;
pub use resource::*;
pub use species_data::*;

pub mod pokemon_data;
pub mod pokemon_types;
pub mod resource;
pub mod species_data;

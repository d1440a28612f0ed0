// Pokemon Tower Schema - Shared type definitions
// This crate contains the core enums and static records that are shared between
// the engine and its data files. Everything here is plain data: no battle state.

pub use battle_data::*;
pub use pokemon_types::*;
pub use species_data::*;

pub mod battle_data;
pub mod pokemon_types;
pub mod species_data;

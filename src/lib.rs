//! Pokemon Tower Battle Engine
//!
//! Turn-based battles between two trainers' teams under three team
//! disciplines (set, rotate, optimise), plus a battle tower that runs a
//! player through a queue of randomly generated enemies.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod errors;
pub mod pokemon;
pub mod species;
pub mod team;
pub mod tower;
pub mod trainer;
pub mod type_effectiveness;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{BaseStats, BattleMode, Criterion, PokeType, PokemonSpecies};

// --- From this crate's modules (`src/`) ---

// Battle engine and its observer channel.
pub use battle::runner::Battle;
pub use battle::state::{BattleEvent, EventBus, GameState};
pub use battle::turn_orchestrator::{resolve_exchange, ExchangeOutcome};

// Runtime types.
pub use config::GameConfig;
pub use pokemon::Pokemon;
pub use team::{BattleTeam, PokeTeam, TeamRoster};
pub use tower::{BattleTower, TowerRound};
pub use trainer::Trainer;
pub use type_effectiveness::TypeEffectiveness;

// Primary data access functions.
pub use species::{all_species, species_for_stage};

// Crate-specific error and result types.
pub use errors::{
    BattleError, BattleResult, ConfigError, EngineError, EngineResult, SpeciesDataError,
    SpeciesDataResult, TeamError, TeamResult, TowerError, TowerResult, TypeChartError,
};

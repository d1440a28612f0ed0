use crate::battle::state::EventBus;
use crate::errors::BattleResult;
use crate::pokemon::Pokemon;
use crate::team::PokeTeam;
use crate::trainer::Trainer;
use schema::{BaseStats, BattleMode, Criterion, PokeType, PokemonSpecies};

/// A builder for test Pokemon with hand-picked stats.
///
/// # Example
/// ```
/// let pokemon = TestPokemonBuilder::new("X", PokeType::Normal)
///     .with_speed(10.0)
///     .with_power(50.0)
///     .build();
/// ```
pub struct TestPokemonBuilder {
    name: String,
    poketype: PokeType,
    evolution_line: Vec<String>,
    stats: BaseStats,
}

impl TestPokemonBuilder {
    /// Creates a builder with modest default stats (10 health, 5 everything else).
    pub fn new(name: &str, poketype: PokeType) -> Self {
        Self {
            name: name.to_string(),
            poketype,
            evolution_line: Vec::new(),
            stats: BaseStats {
                health: 10.0,
                battle_power: 5.0,
                defence: 5.0,
                speed: 5.0,
                level: 1,
            },
        }
    }

    pub fn with_health(mut self, health: f64) -> Self {
        self.stats.health = health;
        self
    }

    pub fn with_power(mut self, battle_power: f64) -> Self {
        self.stats.battle_power = battle_power;
        self
    }

    pub fn with_defence(mut self, defence: f64) -> Self {
        self.stats.defence = defence;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.stats.speed = speed;
        self
    }

    /// Later stage names; the builder's own name is always stage 0.
    pub fn with_evolutions(mut self, stages: &[&str]) -> Self {
        self.evolution_line = std::iter::once(self.name.clone())
            .chain(stages.iter().map(|s| s.to_string()))
            .collect();
        self
    }

    pub fn build(self) -> Pokemon {
        Pokemon::new(&PokemonSpecies {
            name: self.name,
            poketype: self.poketype,
            evolution_line: self.evolution_line,
            base_stats: self.stats,
        })
    }
}

/// Creates a trainer whose team is already assembled in `mode`.
pub fn create_test_trainer(
    name: &str,
    team: Vec<Pokemon>,
    mode: BattleMode,
    criterion: Criterion,
) -> Trainer {
    let team = match PokeTeam::new(team) {
        Ok(team) => team,
        Err(err) => panic!("Failed to build test team for {}: {}", name, err),
    };
    let mut trainer = Trainer::new(name, team);
    trainer.team.assemble(mode, criterion);
    trainer
}

pub fn test_bus() -> EventBus {
    EventBus::new(["Player 1".to_string(), "Player 2".to_string()])
}

/// Helper function to assert that a Result is Ok and return the value.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}

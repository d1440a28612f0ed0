use crate::errors::{SpeciesDataError, SpeciesDataResult};
use crate::species::species_for_stage;
use crate::type_effectiveness::TypeEffectiveness;
use schema::{Criterion, PokeType, PokemonSpecies};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every evolution multiplies battle power, health, defence and speed by this.
pub const GROWTH_FACTOR: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,            // Current stage name, always species.stage_name(stage)
    pub species: PokemonSpecies, // Immutable species metadata
    pub stage: usize,            // Position in the evolution line
    pub health: f64,             // Signed; alive iff > 0
    pub level: u32,
    pub experience: u32, // Opponents fainted, never decreases
    pub battle_power: f64,
    pub defence: f64,
    pub speed: f64,
}

/// Tiered damage before type effectiveness is applied.
pub fn tiered_damage(battle_power: f64, defence: f64) -> f64 {
    if defence < battle_power / 2.0 {
        (battle_power - defence).ceil()
    } else if defence < battle_power {
        (battle_power * 5.0 / 8.0 - defence / 4.0).ceil()
    } else {
        (battle_power / 4.0).ceil()
    }
}

impl Pokemon {
    /// Create a stage-0 Pokemon from species data
    pub fn new(species: &PokemonSpecies) -> Self {
        let base = &species.base_stats;
        Pokemon {
            name: species
                .stage_name(0)
                .unwrap_or(species.name.as_str())
                .to_string(),
            species: species.clone(),
            stage: 0,
            health: base.health,
            level: base.level,
            experience: 0,
            battle_power: base.battle_power,
            defence: base.defence,
            speed: base.speed,
        }
    }

    /// Create a Pokemon already evolved to `stage` of its line.
    pub fn at_stage(species: &PokemonSpecies, stage: usize) -> SpeciesDataResult<Self> {
        if species.stage_name(stage).is_none() {
            return Err(SpeciesDataError::InvalidStage {
                species: species.name.clone(),
                stage,
            });
        }
        let mut pokemon = Self::new(species);
        while pokemon.stage < stage {
            pokemon.evolve();
        }
        Ok(pokemon)
    }

    /// Look up any stage name in the bundled catalogue.
    pub fn from_stage_name(stage_name: &str) -> SpeciesDataResult<Self> {
        let (species, stage) = species_for_stage(stage_name)?;
        Self::at_stage(species, stage)
    }

    pub fn poketype(&self) -> PokeType {
        self.species.poketype
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn can_evolve(&self) -> bool {
        self.stage < self.species.final_stage()
    }

    /// Damage this Pokemon would deal to `defender`. Pure: reads both, mutates neither.
    pub fn attack(&self, defender: &Pokemon, chart: &TypeEffectiveness) -> f64 {
        let damage = tiered_damage(self.battle_power, defender.defence);
        damage * chart.effectiveness(self.poketype(), defender.poketype())
    }

    /// Take `damage`. Hits weaker than defence are halved. No floor is applied.
    pub fn defend(&mut self, damage: f64) {
        if damage < self.defence {
            self.health -= damage / 2.0;
        } else {
            self.health -= damage;
        }
    }

    /// Fixed per-exchange health cost paid when both Pokemon survive.
    pub fn apply_attrition(&mut self, amount: f64) {
        self.health -= amount;
    }

    pub fn gain_experience(&mut self) {
        self.experience += 1;
    }

    /// Gain a level, evolving if the line continues. Returns whether it evolved.
    pub fn level_up(&mut self) -> bool {
        self.level += 1;
        if self.can_evolve() {
            self.evolve();
            true
        } else {
            false
        }
    }

    fn evolve(&mut self) {
        let Some(next_name) = self.species.stage_name(self.stage + 1) else {
            return;
        };
        self.name = next_name.to_string();
        self.stage += 1;
        self.battle_power *= GROWTH_FACTOR;
        self.health *= GROWTH_FACTOR;
        self.speed *= GROWTH_FACTOR;
        self.defence *= GROWTH_FACTOR;
    }

    /// Value used to rank this Pokemon in an optimised team.
    pub fn rank_value(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Health => self.health,
            Criterion::Level => f64::from(self.level),
            Criterion::Attack => self.battle_power,
            Criterion::Defence => self.defence,
            Criterion::Speed => self.speed,
        }
    }

    /// Health as shown to players: rounded and never negative.
    pub fn displayed_health(&self) -> f64 {
        self.health.max(0.0).round()
    }
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Level {}) with {} health and {} experience",
            self.name,
            self.level,
            self.displayed_health(),
            self.experience
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(50.0, 5.0, 45.0)] // defence under half power
    #[case(50.0, 20.0, 30.0)]
    #[case(50.0, 25.0, 25.0)] // 31.25 - 6.25
    #[case(30.0, 20.0, 14.0)] // 18.75 - 5 = 13.75
    #[case(30.0, 30.0, 8.0)] // 7.5
    #[case(8.0, 40.0, 2.0)]
    fn test_tiered_damage(#[case] power: f64, #[case] defence: f64, #[case] expected: f64) {
        assert_eq!(tiered_damage(power, defence), expected);
    }

    #[test]
    fn test_attack_applies_effectiveness_and_is_pure() {
        let chart = TypeEffectiveness::standard();
        let charmander = Pokemon::from_stage_name("Charmander").unwrap();
        let bulbasaur = Pokemon::from_stage_name("Bulbasaur").unwrap();
        let squirtle = Pokemon::from_stage_name("Squirtle").unwrap();

        // power 8 vs defence 6: ceil(5 - 1.5) = 4
        assert_eq!(charmander.attack(&bulbasaur, chart), 8.0);
        // power 8 vs defence 7: ceil(5 - 1.75) = 4, halved by water
        assert_eq!(charmander.attack(&squirtle, chart), 2.0);

        let before = bulbasaur.clone();
        let first = charmander.attack(&bulbasaur, chart);
        let second = charmander.attack(&bulbasaur, chart);
        assert_eq!(first, second);
        assert_eq!(bulbasaur, before);
    }

    #[rstest]
    #[case(3.0, 10.5)] // below defence 4: half damage
    #[case(4.0, 8.0)]
    #[case(20.0, -8.0)] // may go negative
    fn test_defend(#[case] damage: f64, #[case] expected_health: f64) {
        let mut charmander = Pokemon::from_stage_name("Charmander").unwrap();
        charmander.health = 12.0;
        charmander.defend(damage);
        assert_eq!(charmander.health, expected_health);
        assert_eq!(charmander.is_alive(), expected_health > 0.0);
    }

    #[test]
    fn test_defend_never_heals() {
        let mut geodude = Pokemon::from_stage_name("Geodude").unwrap();
        let before = geodude.health;
        geodude.defend(0.0);
        assert_eq!(geodude.health, before);
    }

    #[test]
    fn test_level_up_evolves_through_line() {
        let mut pokemon = Pokemon::from_stage_name("Charmander").unwrap();
        assert!(pokemon.level_up());
        assert_eq!(pokemon.name, "Charmeleon");
        assert_eq!(pokemon.level, 2);
        assert_eq!(pokemon.battle_power, 12.0);
        assert_eq!(pokemon.health, 13.5);
        assert_eq!(pokemon.speed, 10.5);
        assert_eq!(pokemon.defence, 6.0);

        assert!(pokemon.level_up());
        assert_eq!(pokemon.name, "Charizard");

        // final stage: only the level moves
        assert!(!pokemon.level_up());
        assert_eq!(pokemon.name, "Charizard");
        assert_eq!(pokemon.level, 4);
        assert_eq!(pokemon.battle_power, 18.0);
    }

    #[test]
    fn test_single_stage_never_evolves() {
        let mut lapras = Pokemon::from_stage_name("Lapras").unwrap();
        let power = lapras.battle_power;
        assert!(!lapras.level_up());
        assert_eq!(lapras.name, "Lapras");
        assert_eq!(lapras.battle_power, power);
        assert_eq!(lapras.level, 2);
    }

    #[test]
    fn test_at_stage_matches_levelled_stats() {
        let ivysaur = Pokemon::from_stage_name("Ivysaur").unwrap();
        assert_eq!(ivysaur.stage, 1);
        assert_eq!(ivysaur.health, 18.0);
        assert_eq!(ivysaur.level, 1);

        let species = ivysaur.species.clone();
        assert_eq!(
            Pokemon::at_stage(&species, 3).unwrap_err(),
            SpeciesDataError::InvalidStage {
                species: "Bulbasaur".to_string(),
                stage: 3
            }
        );
    }

    #[rstest]
    #[case(Criterion::Health, 9.0)]
    #[case(Criterion::Level, 1.0)]
    #[case(Criterion::Attack, 8.0)]
    #[case(Criterion::Defence, 4.0)]
    #[case(Criterion::Speed, 7.0)]
    fn test_rank_value(#[case] criterion: Criterion, #[case] expected: f64) {
        let charmander = Pokemon::from_stage_name("Charmander").unwrap();
        assert_eq!(charmander.rank_value(criterion), expected);
    }

    #[test]
    fn test_display_hides_negative_health() {
        let mut pikachu = Pokemon::from_stage_name("Pikachu").unwrap();
        pikachu.gain_experience();
        assert_eq!(
            pikachu.to_string(),
            "Pikachu (Level 1) with 9 health and 1 experience"
        );
        pikachu.health = -3.5;
        assert_eq!(
            pikachu.to_string(),
            "Pikachu (Level 1) with 0 health and 1 experience"
        );
    }
}

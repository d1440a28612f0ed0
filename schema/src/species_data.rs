use crate::PokeType;
use serde::{Deserialize, Serialize};

/// Stage-0 stats of a species. Every evolution multiplies the floating point
/// stats by the growth factor; `level` is only the starting level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    pub health: f64,
    pub battle_power: f64,
    pub defence: f64,
    pub speed: f64,
    pub level: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub name: String,
    pub poketype: PokeType,
    /// Ordered stage names, first stage first. Empty for species that never evolve.
    #[serde(default)]
    pub evolution_line: Vec<String>,
    pub base_stats: BaseStats,
}

impl PokemonSpecies {
    /// Position of `stage_name` in the evolution line.
    ///
    /// A species without a line only knows its own name, at stage 0.
    pub fn stage_of(&self, stage_name: &str) -> Option<usize> {
        if self.evolution_line.is_empty() {
            return (self.name == stage_name).then_some(0);
        }
        self.evolution_line.iter().position(|n| n == stage_name)
    }

    /// Name carried by the species at `stage`.
    pub fn stage_name(&self, stage: usize) -> Option<&str> {
        if self.evolution_line.is_empty() {
            return (stage == 0).then_some(self.name.as_str());
        }
        self.evolution_line.get(stage).map(String::as_str)
    }

    /// Index of the last stage (0 for species that never evolve).
    pub fn final_stage(&self) -> usize {
        self.evolution_line.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charmander() -> PokemonSpecies {
        PokemonSpecies {
            name: "Charmander".to_string(),
            poketype: PokeType::Fire,
            evolution_line: vec![
                "Charmander".to_string(),
                "Charmeleon".to_string(),
                "Charizard".to_string(),
            ],
            base_stats: BaseStats {
                health: 9.0,
                battle_power: 8.0,
                defence: 4.0,
                speed: 7.0,
                level: 1,
            },
        }
    }

    #[test]
    fn test_stage_lookup() {
        let species = charmander();
        assert_eq!(species.stage_of("Charmeleon"), Some(1));
        assert_eq!(species.stage_name(2), Some("Charizard"));
        assert_eq!(species.stage_of("Squirtle"), None);
        assert_eq!(species.final_stage(), 2);
    }

    #[test]
    fn test_single_stage_species() {
        let mut species = charmander();
        species.name = "Lapras".to_string();
        species.evolution_line.clear();
        assert_eq!(species.stage_of("Lapras"), Some(0));
        assert_eq!(species.stage_name(1), None);
        assert_eq!(species.final_stage(), 0);
    }
}

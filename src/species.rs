use crate::errors::{SpeciesDataError, SpeciesDataResult};
use schema::PokemonSpecies;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Longest evolution line a species may declare.
pub const MAX_EVOLUTION_STAGES: usize = 3;

static SPECIES_RON: &str = include_str!("../data/species.ron");

// Lazy-loaded species catalogue
static SPECIES_DATA: LazyLock<Vec<PokemonSpecies>> = LazyLock::new(|| {
    parse_species_catalogue(SPECIES_RON).expect("bundled species catalogue is malformed")
});

/// Parse and validate a RON species catalogue.
pub fn parse_species_catalogue(content: &str) -> SpeciesDataResult<Vec<PokemonSpecies>> {
    let species: Vec<PokemonSpecies> = ron::from_str(content)
        .map_err(|e| SpeciesDataError::MalformedData(e.to_string()))?;

    if species.is_empty() {
        return Err(SpeciesDataError::MalformedData(
            "catalogue has no species".to_string(),
        ));
    }

    let mut seen_names = HashSet::new();
    for entry in &species {
        validate_species(entry)?;
        let stage_names: Vec<&str> = if entry.evolution_line.is_empty() {
            vec![entry.name.as_str()]
        } else {
            entry.evolution_line.iter().map(String::as_str).collect()
        };
        for stage_name in stage_names {
            if !seen_names.insert(stage_name.to_string()) {
                return Err(SpeciesDataError::MalformedData(format!(
                    "stage name {} appears more than once",
                    stage_name
                )));
            }
        }
    }

    Ok(species)
}

fn validate_species(entry: &PokemonSpecies) -> SpeciesDataResult<()> {
    if entry.evolution_line.len() > MAX_EVOLUTION_STAGES {
        return Err(SpeciesDataError::MalformedData(format!(
            "{} has {} evolution stages (max {})",
            entry.name,
            entry.evolution_line.len(),
            MAX_EVOLUTION_STAGES
        )));
    }
    if let Some(first) = entry.evolution_line.first() {
        if *first != entry.name {
            return Err(SpeciesDataError::MalformedData(format!(
                "{} evolution line starts with {}",
                entry.name, first
            )));
        }
    }
    let stats = &entry.base_stats;
    if stats.health <= 0.0 || stats.level == 0 {
        return Err(SpeciesDataError::MalformedData(format!(
            "{} must start alive at level 1 or above",
            entry.name
        )));
    }
    if stats.battle_power < 0.0 || stats.defence < 0.0 || stats.speed < 0.0 {
        return Err(SpeciesDataError::MalformedData(format!(
            "{} has a negative stat",
            entry.name
        )));
    }
    Ok(())
}

/// Every species in the bundled catalogue, in catalogue order.
pub fn all_species() -> &'static [PokemonSpecies] {
    &SPECIES_DATA
}

/// Find the species that has `stage_name` anywhere in its evolution line,
/// together with the stage index.
pub fn species_for_stage(stage_name: &str) -> SpeciesDataResult<(&'static PokemonSpecies, usize)> {
    SPECIES_DATA
        .iter()
        .find_map(|species| {
            // Catalogue names are canonical; accept any casing from callers.
            let canonical = if species.evolution_line.is_empty() {
                species
                    .name
                    .eq_ignore_ascii_case(stage_name)
                    .then_some(species.name.as_str())
            } else {
                species
                    .evolution_line
                    .iter()
                    .find(|n| n.eq_ignore_ascii_case(stage_name))
                    .map(String::as_str)
            }?;
            species.stage_of(canonical).map(|stage| (species, stage))
        })
        .ok_or_else(|| SpeciesDataError::SpeciesNotFound(stage_name.to_string()))
}

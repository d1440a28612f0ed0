use crate::team::PokeTeam;
use schema::PokeType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use strum::EnumCount;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trainer {
    pub name: String,
    pub team: PokeTeam,
    pokedex: BTreeSet<PokeType>, // Types seen so far
}

impl Trainer {
    /// Create a trainer and register the types of its team.
    pub fn new(name: impl Into<String>, team: PokeTeam) -> Self {
        let mut trainer = Trainer {
            name: name.into(),
            team,
            pokedex: BTreeSet::new(),
        };
        trainer.register_team();
        trainer
    }

    /// Swap in a new team; its types are registered immediately.
    pub fn pick_team(&mut self, team: PokeTeam) {
        self.team = team;
        self.register_team();
    }

    fn register_team(&mut self) {
        let types: Vec<PokeType> = self.team.lineup().iter().map(|p| p.poketype()).collect();
        for poketype in types {
            self.register(poketype);
        }
    }

    pub fn register(&mut self, poketype: PokeType) {
        if self.pokedex.insert(poketype) {
            tracing::debug!(trainer = %self.name, %poketype, "registered new type");
        }
    }

    pub fn pokedex(&self) -> &BTreeSet<PokeType> {
        &self.pokedex
    }

    /// Fraction of all types seen, rounded to two decimals.
    pub fn registry_completion(&self) -> f64 {
        let fraction = self.pokedex.len() as f64 / PokeType::COUNT as f64;
        (fraction * 100.0).round() / 100.0
    }
}

impl fmt::Display for Trainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trainer {} Pokedex Completion: {}%",
            self.name,
            (self.registry_completion() * 100.0).round()
        )
    }
}

use super::{BattleTeam, TeamRoster};
use crate::errors::{SpeciesDataError, TeamError, TeamResult};
use crate::pokemon::Pokemon;
use crate::species::all_species;
use rand::seq::IndexedRandom;
use rand::Rng;
use schema::{BattleMode, Criterion};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest team a trainer may field.
pub const TEAM_LIMIT: usize = 6;

/// A trainer's Pokemon: the pristine lineup chosen before battle, and the
/// roster assembled from it for the current battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokeTeam {
    lineup: Vec<Pokemon>,
    reversed: bool, // Ranking direction for optimised rosters
    roster: Option<TeamRoster>,
}

fn check_size(size: usize) -> TeamResult<()> {
    if size == 0 {
        return Err(TeamError::EmptyTeam);
    }
    if size > TEAM_LIMIT {
        return Err(TeamError::TeamTooLarge {
            size,
            limit: TEAM_LIMIT,
        });
    }
    Ok(())
}

impl PokeTeam {
    pub fn new(lineup: Vec<Pokemon>) -> TeamResult<Self> {
        check_size(lineup.len())?;
        Ok(Self {
            lineup,
            reversed: false,
            roster: None,
        })
    }

    /// Draw `size` species uniformly (with repeats) from the catalogue.
    pub fn choose_randomly<R: Rng + ?Sized>(size: usize, rng: &mut R) -> TeamResult<Self> {
        check_size(size)?;
        let catalogue = all_species();
        let lineup = (0..size)
            .map(|_| {
                catalogue.choose(rng).map(Pokemon::new).ok_or_else(|| {
                    SpeciesDataError::MalformedData("catalogue has no species".to_string())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(size, "chose random team");
        Self::new(lineup)
    }

    /// Build a team from stage names, e.g. `["Charmeleon", "Pikachu"]`.
    pub fn choose_manually<S: AsRef<str>>(names: &[S]) -> TeamResult<Self> {
        check_size(names.len())?;
        let lineup = names
            .iter()
            .map(|name| Pokemon::from_stage_name(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(lineup)
    }

    pub fn lineup(&self) -> &[Pokemon] {
        &self.lineup
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Ranking direction used by the next optimised assembly.
    pub fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    /// Assemble a fresh roster from the lineup. Any previous roster is dropped.
    pub fn assemble(&mut self, mode: BattleMode, criterion: Criterion) -> &mut TeamRoster {
        let roster =
            TeamRoster::assemble(mode, criterion, self.reversed, self.lineup.iter().cloned());
        tracing::debug!(%mode, %criterion, size = roster.len(), "assembled team");
        self.roster.insert(roster)
    }

    /// Restore every lineup member to full strength at its current stage and
    /// re-assemble.
    pub fn regenerate(&mut self, mode: BattleMode, criterion: Criterion) -> TeamResult<()> {
        self.lineup = self
            .lineup
            .iter()
            .map(|pokemon| Pokemon::at_stage(&pokemon.species, pokemon.stage))
            .collect::<Result<Vec<_>, _>>()?;
        self.assemble(mode, criterion);
        Ok(())
    }

    pub fn roster(&self) -> Option<&TeamRoster> {
        self.roster.as_ref()
    }

    pub fn roster_mut(&mut self) -> TeamResult<&mut TeamRoster> {
        self.roster.as_mut().ok_or(TeamError::NotAssembled)
    }

    /// Apply the roster's discipline-specific reshuffle.
    pub fn special(&mut self) -> TeamResult<()> {
        let roster = self.roster_mut()?;
        roster.special();
        if let TeamRoster::Optimise(team) = roster {
            let reversed = team.is_reversed();
            self.reversed = reversed;
        }
        Ok(())
    }

    /// Members left in the roster, or the lineup size before assembly.
    pub fn len(&self) -> usize {
        self.roster
            .as_ref()
            .map_or(self.lineup.len(), |roster| roster.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for PokeTeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.roster {
            Some(roster) => write!(f, "{}", roster),
            None => {
                for pokemon in &self.lineup {
                    writeln!(f, "{}", pokemon)?;
                }
                Ok(())
            }
        }
    }
}

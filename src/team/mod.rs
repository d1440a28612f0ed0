//! Battle-time team containers.
//!
//! A team fights under one of three disciplines. All of them expose the same
//! [`BattleTeam`] operations; the battle loop never looks at which one it holds.

pub mod poke_team;
pub mod queue;
pub mod ranked;
pub mod stack;

pub use poke_team::{PokeTeam, TEAM_LIMIT};
pub use queue::QueueTeam;
pub use ranked::RankedTeam;
pub use stack::StackTeam;

use crate::pokemon::Pokemon;
use schema::{BattleMode, Criterion};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Withdrawal and re-insertion contract shared by every discipline.
pub trait BattleTeam {
    /// Remove the Pokemon that fights next.
    fn withdraw_next(&mut self) -> Option<Pokemon>;

    /// Put a Pokemon that survived an exchange back into the team.
    fn return_survivor(&mut self, pokemon: Pokemon);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discipline-specific reshuffle.
    fn special(&mut self);

    /// Members in withdrawal order.
    fn members(&self) -> Vec<&Pokemon>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TeamRoster {
    Set(StackTeam),
    Rotate(QueueTeam),
    Optimise(RankedTeam),
}

impl TeamRoster {
    /// Build a roster from `pokemon` in order. Set pushes the first Pokemon
    /// first, so the last one fights first.
    pub fn assemble(
        mode: BattleMode,
        criterion: Criterion,
        reversed: bool,
        pokemon: impl IntoIterator<Item = Pokemon>,
    ) -> Self {
        match mode {
            BattleMode::Set => {
                let mut team = StackTeam::new();
                pokemon.into_iter().for_each(|p| team.push(p));
                TeamRoster::Set(team)
            }
            BattleMode::Rotate => {
                let mut team = QueueTeam::new();
                pokemon.into_iter().for_each(|p| team.append(p));
                TeamRoster::Rotate(team)
            }
            BattleMode::Optimise => {
                let mut team = RankedTeam::new(criterion, reversed);
                pokemon.into_iter().for_each(|p| team.add(p));
                TeamRoster::Optimise(team)
            }
        }
    }

    pub fn mode(&self) -> BattleMode {
        match self {
            TeamRoster::Set(_) => BattleMode::Set,
            TeamRoster::Rotate(_) => BattleMode::Rotate,
            TeamRoster::Optimise(_) => BattleMode::Optimise,
        }
    }

    /// Ranking criterion, only meaningful for optimised teams.
    pub fn criterion(&self) -> Option<Criterion> {
        match self {
            TeamRoster::Optimise(team) => Some(team.criterion()),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pokemon> {
        self.members().into_iter()
    }

    fn as_team(&self) -> &dyn BattleTeam {
        match self {
            TeamRoster::Set(team) => team,
            TeamRoster::Rotate(team) => team,
            TeamRoster::Optimise(team) => team,
        }
    }

    fn as_team_mut(&mut self) -> &mut dyn BattleTeam {
        match self {
            TeamRoster::Set(team) => team,
            TeamRoster::Rotate(team) => team,
            TeamRoster::Optimise(team) => team,
        }
    }
}

impl BattleTeam for TeamRoster {
    fn withdraw_next(&mut self) -> Option<Pokemon> {
        self.as_team_mut().withdraw_next()
    }

    fn return_survivor(&mut self, pokemon: Pokemon) {
        self.as_team_mut().return_survivor(pokemon);
    }

    fn len(&self) -> usize {
        self.as_team().len()
    }

    fn special(&mut self) {
        self.as_team_mut().special();
    }

    fn members(&self) -> Vec<&Pokemon> {
        self.as_team().members()
    }
}

impl fmt::Display for TeamRoster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pokemon in self.iter() {
            writeln!(f, "{}", pokemon)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    pub(crate) fn named(name: &str) -> Pokemon {
        Pokemon::from_stage_name(name).unwrap()
    }

    fn lineup() -> Vec<Pokemon> {
        ["Pikachu", "Geodude", "Abra"].into_iter().map(named).collect()
    }

    fn withdrawal_order(roster: &TeamRoster) -> Vec<String> {
        roster.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_assemble_per_mode() {
        let set = TeamRoster::assemble(BattleMode::Set, Criterion::Health, false, lineup());
        assert_eq!(withdrawal_order(&set), vec!["Abra", "Geodude", "Pikachu"]);
        assert_eq!(set.mode(), BattleMode::Set);
        assert_eq!(set.criterion(), None);

        let rotate = TeamRoster::assemble(BattleMode::Rotate, Criterion::Health, false, lineup());
        assert_eq!(withdrawal_order(&rotate), vec!["Pikachu", "Geodude", "Abra"]);

        let optimise = TeamRoster::assemble(BattleMode::Optimise, Criterion::Speed, false, lineup());
        assert_eq!(withdrawal_order(&optimise), vec!["Geodude", "Pikachu", "Abra"]);
        assert_eq!(optimise.criterion(), Some(Criterion::Speed));
    }

    #[test]
    fn test_roster_dispatches_through_trait() {
        let mut roster = TeamRoster::assemble(BattleMode::Rotate, Criterion::Health, false, lineup());
        let first = roster.withdraw_next().unwrap();
        assert_eq!(roster.len(), 2);
        roster.return_survivor(first);
        assert_eq!(withdrawal_order(&roster), vec!["Geodude", "Abra", "Pikachu"]);

        while roster.withdraw_next().is_some() {}
        assert!(roster.is_empty());
    }

    #[test]
    fn test_display_lists_members_in_order() {
        let roster = TeamRoster::assemble(BattleMode::Set, Criterion::Health, false, lineup());
        assert_eq!(
            roster.to_string(),
            "Abra (Level 1) with 6 health and 0 experience\n\
             Geodude (Level 1) with 10 health and 0 experience\n\
             Pikachu (Level 1) with 9 health and 0 experience\n"
        );
    }
}

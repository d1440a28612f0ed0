use super::BattleTeam;
use crate::pokemon::Pokemon;
use serde::{Deserialize, Serialize};

/// Last-in-first-out team. The top of the stack keeps fighting until it faints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackTeam {
    members: Vec<Pokemon>, // top is the last element
}

impl StackTeam {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pokemon: Pokemon) {
        self.members.push(pokemon);
    }
}

impl BattleTeam for StackTeam {
    fn withdraw_next(&mut self) -> Option<Pokemon> {
        self.members.pop()
    }

    fn return_survivor(&mut self, pokemon: Pokemon) {
        self.members.push(pokemon);
    }

    fn len(&self) -> usize {
        self.members.len()
    }

    /// Reverse the order of the top three members.
    fn special(&mut self) {
        let start = self.members.len().saturating_sub(3);
        self.members[start..].reverse();
    }

    fn members(&self) -> Vec<&Pokemon> {
        self.members.iter().rev().collect()
    }
}

use super::BattleTeam;
use crate::pokemon::Pokemon;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Round-robin team: survivors go to the back of the line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueTeam {
    members: VecDeque<Pokemon>,
}

impl QueueTeam {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, pokemon: Pokemon) {
        self.members.push_back(pokemon);
    }
}

impl BattleTeam for QueueTeam {
    fn withdraw_next(&mut self) -> Option<Pokemon> {
        self.members.pop_front()
    }

    fn return_survivor(&mut self, pokemon: Pokemon) {
        self.members.push_back(pokemon);
    }

    fn len(&self) -> usize {
        self.members.len()
    }

    /// Keep the first three in place and reverse everyone behind them.
    fn special(&mut self) {
        if self.members.len() <= 3 {
            return;
        }
        let rest: Vec<Pokemon> = self.members.drain(3..).collect();
        self.members.extend(rest.into_iter().rev());
    }

    fn members(&self) -> Vec<&Pokemon> {
        self.members.iter().collect()
    }
}

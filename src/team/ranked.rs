use super::BattleTeam;
use crate::pokemon::Pokemon;
use ordered_float::OrderedFloat;
use schema::Criterion;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct RankedEntry {
    key: OrderedFloat<f64>,
    pokemon: Pokemon,
}

/// Team kept sorted by one criterion. Ascending unless `reversed`; ties keep
/// insertion order so the earliest inserted is withdrawn first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTeam {
    entries: Vec<RankedEntry>,
    criterion: Criterion,
    reversed: bool,
}

impl RankedTeam {
    pub fn new(criterion: Criterion, reversed: bool) -> Self {
        Self {
            entries: Vec::new(),
            criterion,
            reversed,
        }
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Insert ranked by the current value of the team's criterion.
    pub fn add(&mut self, pokemon: Pokemon) {
        let key = OrderedFloat(pokemon.rank_value(self.criterion));
        let reversed = self.reversed;
        let index = self.entries.partition_point(|entry| {
            if reversed {
                entry.key >= key
            } else {
                entry.key <= key
            }
        });
        self.entries.insert(index, RankedEntry { key, pokemon });
    }
}

impl BattleTeam for RankedTeam {
    fn withdraw_next(&mut self) -> Option<Pokemon> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.entries.remove(0).pokemon)
    }

    fn return_survivor(&mut self, pokemon: Pokemon) {
        self.add(pokemon);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    /// Flip the ranking direction for the rest of the team's life.
    fn special(&mut self) {
        self.reversed = !self.reversed;
        let reversed = self.reversed;
        self.entries.sort_by(|a, b| {
            if reversed {
                b.key.cmp(&a.key)
            } else {
                a.key.cmp(&b.key)
            }
        });
    }

    fn members(&self) -> Vec<&Pokemon> {
        self.entries.iter().map(|entry| &entry.pokemon).collect()
    }
}

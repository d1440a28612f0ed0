use crate::battle::state::{BattleEvent, EventBus};
use crate::pokemon::Pokemon;
use crate::type_effectiveness::TypeEffectiveness;
use std::cmp::Ordering;

/// Health both Pokemon lose when an exchange ends with neither fainted.
pub const ATTRITION: f64 = 1.0;

/// How an exchange ended, evaluated after attrition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeOutcome {
    BothSurvived,
    OneFainted { survivor: usize },
    BothFainted,
}

/// Damage `attacker` deals to `defender`, scaled by the owners' registry
/// completions and rounded up.
fn scaled_damage(
    attacker: &Pokemon,
    defender: &Pokemon,
    completions: (f64, f64),
    chart: &TypeEffectiveness,
) -> f64 {
    let (attacker_completion, defender_completion) = completions;
    (attacker.attack(defender, chart) * (attacker_completion / defender_completion)).ceil()
}

fn strike(
    fighters: &mut [Pokemon; 2],
    attacker: usize,
    completions: [f64; 2],
    chart: &TypeEffectiveness,
    bus: &mut EventBus,
) {
    let defender = 1 - attacker;
    let damage = scaled_damage(
        &fighters[attacker],
        &fighters[defender],
        (completions[attacker], completions[defender]),
        chart,
    );
    fighters[defender].defend(damage);
    bus.push(BattleEvent::Attacked {
        attacker: fighters[attacker].name.clone(),
        defender: fighters[defender].name.clone(),
        damage,
        defender_health: fighters[defender].health,
    });
}

/// Resolve one exchange between the two active Pokemon.
///
/// Index 0 belongs to player one, index 1 to player two; `completions` are the
/// owners' registry completions in the same order. The faster Pokemon strikes
/// first and the other strikes back only if still alive. Equal speed means both
/// strike at once from their pre-exchange state. If both survive they each pay
/// [`ATTRITION`]; a lone survivor gains experience and levels up.
///
/// Returns the Pokemon that go back to their teams.
pub fn resolve_exchange(
    fighters: [Pokemon; 2],
    completions: [f64; 2],
    chart: &TypeEffectiveness,
    bus: &mut EventBus,
) -> (ExchangeOutcome, [Option<Pokemon>; 2]) {
    let mut fighters = fighters;

    match fighters[0].speed.partial_cmp(&fighters[1].speed) {
        Some(Ordering::Greater) => strike_in_order(&mut fighters, 0, completions, chart, bus),
        Some(Ordering::Less) => strike_in_order(&mut fighters, 1, completions, chart, bus),
        _ => strike_simultaneously(&mut fighters, completions, chart, bus),
    }

    if fighters.iter().all(Pokemon::is_alive) {
        for pokemon in fighters.iter_mut() {
            pokemon.apply_attrition(ATTRITION);
            bus.push(BattleEvent::Attrition {
                pokemon: pokemon.name.clone(),
                amount: ATTRITION,
            });
        }
    }

    let outcome = match (fighters[0].is_alive(), fighters[1].is_alive()) {
        (true, true) => ExchangeOutcome::BothSurvived,
        (true, false) => ExchangeOutcome::OneFainted { survivor: 0 },
        (false, true) => ExchangeOutcome::OneFainted { survivor: 1 },
        (false, false) => ExchangeOutcome::BothFainted,
    };

    let [first, second] = fighters;
    let survivors = match outcome {
        ExchangeOutcome::BothSurvived => [Some(first), Some(second)],
        ExchangeOutcome::OneFainted { survivor } => {
            let (mut winner, loser) = if survivor == 0 {
                (first, second)
            } else {
                (second, first)
            };
            bus.push(BattleEvent::Fainted {
                player_index: 1 - survivor,
                pokemon: loser.name.clone(),
            });
            reward_survivor(&mut winner, survivor, bus);
            let mut survivors = [None, None];
            survivors[survivor] = Some(winner);
            survivors
        }
        ExchangeOutcome::BothFainted => {
            bus.push(BattleEvent::BothFainted {
                pokemon: [first.name.clone(), second.name.clone()],
            });
            [None, None]
        }
    };

    (outcome, survivors)
}

fn strike_in_order(
    fighters: &mut [Pokemon; 2],
    first: usize,
    completions: [f64; 2],
    chart: &TypeEffectiveness,
    bus: &mut EventBus,
) {
    strike(fighters, first, completions, chart, bus);
    if fighters[1 - first].is_alive() {
        strike(fighters, 1 - first, completions, chart, bus);
    }
}

fn strike_simultaneously(
    fighters: &mut [Pokemon; 2],
    completions: [f64; 2],
    chart: &TypeEffectiveness,
    bus: &mut EventBus,
) {
    let damage = [
        scaled_damage(
            &fighters[0],
            &fighters[1],
            (completions[0], completions[1]),
            chart,
        ),
        scaled_damage(
            &fighters[1],
            &fighters[0],
            (completions[1], completions[0]),
            chart,
        ),
    ];
    fighters[1].defend(damage[0]);
    fighters[0].defend(damage[1]);
    for attacker in 0..2 {
        let defender = 1 - attacker;
        bus.push(BattleEvent::Attacked {
            attacker: fighters[attacker].name.clone(),
            defender: fighters[defender].name.clone(),
            damage: damage[attacker],
            defender_health: fighters[defender].health,
        });
    }
}

fn reward_survivor(pokemon: &mut Pokemon, player_index: usize, bus: &mut EventBus) {
    pokemon.gain_experience();
    let before = pokemon.name.clone();
    let evolved = pokemon.level_up();
    bus.push(BattleEvent::LevelledUp {
        player_index,
        pokemon: before.clone(),
        level: pokemon.level,
    });
    if evolved {
        bus.push(BattleEvent::Evolved {
            player_index,
            from: before,
            to: pokemon.name.clone(),
        });
    }
}

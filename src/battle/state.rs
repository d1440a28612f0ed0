use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Copy)]
pub enum GameState {
    Initializing,
    InProgress,
    Player1Win,
    Player2Win,
    Draw,
}

impl GameState {
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            GameState::Player1Win | GameState::Player2Win | GameState::Draw
        )
    }

    /// Index of the winning side, if any.
    pub fn winner(self) -> Option<usize> {
        match self {
            GameState::Player1Win => Some(0),
            GameState::Player2Win => Some(1),
            _ => None,
        }
    }
}

/// Everything observable that happens during a battle. Events carry names
/// rather than references so a log outlives the battle that produced it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    ExchangeStarted {
        exchange: u32,
        pokemon: [String; 2],
    },
    Attacked {
        attacker: String,
        defender: String,
        damage: f64,
        defender_health: f64,
    },
    Attrition {
        pokemon: String,
        amount: f64,
    },
    Fainted {
        player_index: usize,
        pokemon: String,
    },
    BothFainted {
        pokemon: [String; 2],
    },
    LevelledUp {
        player_index: usize,
        pokemon: String,
        level: u32,
    },
    Evolved {
        player_index: usize,
        from: String,
        to: String,
    },
    BattleEnded {
        outcome: GameState,
    },
}

impl BattleEvent {
    /// Narrative text for this event, or `None` for silent events.
    /// `trainer_names` is indexed by player index.
    pub fn format(&self, trainer_names: &[String; 2]) -> Option<String> {
        match self {
            BattleEvent::ExchangeStarted { .. } => None,
            BattleEvent::Attacked {
                attacker,
                defender,
                defender_health,
                ..
            } => Some(format!(
                "{} attacks {}: {} has {} health",
                attacker,
                defender,
                defender,
                defender_health.max(0.0).round()
            )),
            BattleEvent::Attrition { .. } => None,
            BattleEvent::Fainted { pokemon, .. } => Some(format!("{} fainted", pokemon)),
            BattleEvent::BothFainted { pokemon } => {
                Some(format!("{} and {} fainted", pokemon[0], pokemon[1]))
            }
            BattleEvent::LevelledUp { pokemon, level, .. } => {
                Some(format!("{} grew to level {}", pokemon, level))
            }
            BattleEvent::Evolved { from, to, .. } => Some(format!("{} evolved into {}", from, to)),
            BattleEvent::BattleEnded { outcome } => Some(match outcome.winner() {
                Some(index) => format!("{} wins the battle", trainer_names[index]),
                None => "The battle ended in a draw".to_string(),
            }),
        }
    }
}

/// Collects the events of one battle and mirrors each one to `tracing`.
#[derive(Debug, Clone)]
pub struct EventBus {
    trainer_names: [String; 2],
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new(trainer_names: [String; 2]) -> Self {
        Self {
            trainer_names,
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, event: BattleEvent) {
        match event.format(&self.trainer_names) {
            Some(text) => tracing::info!("{}", text),
            None => tracing::debug!(?event, "battle event"),
        }
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Narrated lines only, in order.
    pub fn narrative(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| event.format(&self.trainer_names))
            .collect()
    }
}

use crate::battle::state::{BattleEvent, EventBus, GameState};
use crate::battle::turn_orchestrator::resolve_exchange;
use crate::errors::{BattleError, BattleResult};
use crate::pokemon::Pokemon;
use crate::team::{BattleTeam, TeamRoster};
use crate::trainer::Trainer;
use crate::type_effectiveness::TypeEffectiveness;
use schema::{BattleMode, Criterion};

/// One battle between two trainers whose teams are already assembled.
///
/// The battle borrows both trainers for its whole life: teams shrink as
/// Pokemon faint, survivors level up in place and each trainer registers the
/// types it fights against.
#[derive(Debug)]
pub struct Battle<'a> {
    trainers: [&'a mut Trainer; 2],
    mode: BattleMode,
    criterion: Criterion,
    chart: &'a TypeEffectiveness,
    game_state: GameState,
    exchanges: u32,
    bus: EventBus,
}

fn check_roster(trainer: &Trainer, mode: BattleMode, criterion: Criterion) -> BattleResult<()> {
    let roster = trainer
        .team
        .roster()
        .ok_or_else(|| BattleError::TeamNotAssembled {
            trainer: trainer.name.clone(),
        })?;
    if roster.mode() != mode {
        return Err(BattleError::DisciplineMismatch {
            trainer: trainer.name.clone(),
            expected: mode,
            found: roster.mode(),
        });
    }
    if let Some(found) = roster.criterion() {
        if found != criterion {
            return Err(BattleError::CriterionMismatch {
                trainer: trainer.name.clone(),
                expected: criterion,
                found,
            });
        }
    }
    Ok(())
}

impl<'a> Battle<'a> {
    /// Set up a battle. Both teams must already be assembled in `mode`, and
    /// for optimised battles ranked by `criterion`.
    pub fn new(
        player1: &'a mut Trainer,
        player2: &'a mut Trainer,
        mode: BattleMode,
        criterion: Criterion,
        chart: &'a TypeEffectiveness,
    ) -> BattleResult<Self> {
        check_roster(player1, mode, criterion)?;
        check_roster(player2, mode, criterion)?;
        let bus = EventBus::new([player1.name.clone(), player2.name.clone()]);
        Ok(Self {
            trainers: [player1, player2],
            mode,
            criterion,
            chart,
            game_state: GameState::Initializing,
            exchanges: 0,
            bus,
        })
    }

    pub fn mode(&self) -> BattleMode {
        self.mode
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    pub fn exchanges(&self) -> u32 {
        self.exchanges
    }

    pub fn events(&self) -> &[BattleEvent] {
        self.bus.events()
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn trainer(&self, index: usize) -> &Trainer {
        &*self.trainers[index]
    }

    fn roster(&mut self, index: usize) -> BattleResult<&mut TeamRoster> {
        let trainer = &mut *self.trainers[index];
        let name = trainer.name.clone();
        trainer
            .team
            .roster_mut()
            .map_err(|_| BattleError::TeamNotAssembled { trainer: name })
    }

    /// Fight until at least one team is empty. Returns the winning trainer, or
    /// `None` on a draw. A finished battle just reports its result again.
    pub fn commence_battle(&mut self) -> BattleResult<Option<&Trainer>> {
        if !self.game_state.is_finished() {
            self.game_state = GameState::InProgress;
            tracing::debug!(mode = %self.mode, "battle started");

            while let Some(fighters) = self.withdraw_pair()? {
                self.exchanges += 1;
                self.trainers[0].register(fighters[1].poketype());
                self.trainers[1].register(fighters[0].poketype());
                let completions = [
                    self.trainers[0].registry_completion(),
                    self.trainers[1].registry_completion(),
                ];

                self.bus.push(BattleEvent::ExchangeStarted {
                    exchange: self.exchanges,
                    pokemon: [fighters[0].name.clone(), fighters[1].name.clone()],
                });
                let (_, survivors) =
                    resolve_exchange(fighters, completions, self.chart, &mut self.bus);

                for (index, survivor) in survivors.into_iter().enumerate() {
                    if let Some(pokemon) = survivor {
                        self.roster(index)?.return_survivor(pokemon);
                    }
                }
            }

            self.game_state = match (self.roster(0)?.is_empty(), self.roster(1)?.is_empty()) {
                (false, true) => GameState::Player1Win,
                (true, false) => GameState::Player2Win,
                _ => GameState::Draw,
            };
            self.bus.push(BattleEvent::BattleEnded {
                outcome: self.game_state,
            });
        }

        Ok(self
            .game_state
            .winner()
            .map(|index| &*self.trainers[index]))
    }

    /// Withdraw one Pokemon per side, or `None` once either team is empty.
    fn withdraw_pair(&mut self) -> BattleResult<Option<[Pokemon; 2]>> {
        if self.roster(0)?.is_empty() || self.roster(1)?.is_empty() {
            return Ok(None);
        }
        let first = self.roster(0)?.withdraw_next();
        let second = self.roster(1)?.withdraw_next();
        Ok(first.zip(second).map(|(a, b)| [a, b]))
    }
}

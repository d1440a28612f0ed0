//! Battle tower: the player fights a queue of enemy trainers until either the
//! player runs out of lives or every enemy does.

use crate::battle::runner::Battle;
use crate::config::GameConfig;
use crate::errors::{TowerError, TowerResult};
use crate::team::PokeTeam;
use crate::trainer::Trainer;
use crate::type_effectiveness::TypeEffectiveness;
use rand::rngs::StdRng;
use rand::Rng;
use schema::{BattleMode, Criterion};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Tower battles always rotate.
const TOWER_MODE: BattleMode = BattleMode::Rotate;

#[derive(Debug, Clone)]
struct Contender {
    trainer: Trainer,
    lives: u32,
}

/// Result of one tower battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerRound {
    pub winner: Option<String>, // None on a draw
    pub player: String,
    pub enemy: String,
    pub player_lives: u32,
    pub enemy_lives: u32,
}

/// Lives after a battle, indexed like the battle's players. A draw costs both.
pub fn settle_lives(winner: Option<usize>, lives: [u32; 2]) -> [u32; 2] {
    match winner {
        Some(0) => [lives[0], lives[1].saturating_sub(1)],
        Some(_) => [lives[0].saturating_sub(1), lives[1]],
        None => [lives[0].saturating_sub(1), lives[1].saturating_sub(1)],
    }
}

#[derive(Debug)]
pub struct BattleTower<R: Rng = StdRng> {
    config: GameConfig,
    chart: TypeEffectiveness,
    rng: R,
    player: Option<Contender>,
    enemies: VecDeque<Contender>,
    defeated: u32,
}

impl<R: Rng> BattleTower<R> {
    /// A tower using the bundled type chart. The config is validated first,
    /// so life rolls always have a non-empty range.
    pub fn new(config: GameConfig, rng: R) -> TowerResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            chart: TypeEffectiveness::standard().clone(),
            rng,
            player: None,
            enemies: VecDeque::new(),
            defeated: 0,
        })
    }

    pub fn with_type_chart(mut self, chart: TypeEffectiveness) -> Self {
        self.chart = chart;
        self
    }

    fn roll_lives(&mut self) -> u32 {
        self.rng
            .random_range(self.config.min_lives..=self.config.max_lives)
    }

    /// Enter the player's trainer with a random number of lives, which is
    /// returned. The team is assembled for rotation.
    pub fn set_my_trainer(&mut self, mut trainer: Trainer) -> u32 {
        trainer.team.assemble(TOWER_MODE, Criterion::default());
        let lives = self.roll_lives();
        tracing::info!(trainer = %trainer.name, lives, "player entered the tower");
        self.player = Some(Contender { trainer, lives });
        lives
    }

    /// Queue `amount` enemies with random teams and lives. The last one
    /// generated is fought first.
    pub fn generate_enemy_trainers(&mut self, amount: usize) -> TowerResult<()> {
        let mut generated = Vec::with_capacity(amount);
        for i in 0..amount {
            let team = PokeTeam::choose_randomly(self.config.team_size, &mut self.rng)?;
            let mut trainer = Trainer::new(format!("Enemy number {}", i), team);
            trainer.team.assemble(TOWER_MODE, Criterion::default());
            let lives = self.roll_lives();
            tracing::debug!(trainer = %trainer.name, lives, "generated enemy");
            generated.push(Contender { trainer, lives });
        }
        self.enemies.extend(generated.into_iter().rev());
        Ok(())
    }

    pub fn battles_remaining(&self) -> bool {
        self.player.as_ref().is_some_and(|p| p.lives > 0) && !self.enemies.is_empty()
    }

    /// Fight the next enemy in the queue. Fails if there is no player, the
    /// player is out of lives or no enemies are left.
    ///
    /// The loser loses a life. Anyone with lives left has their team
    /// regenerated; enemies with lives left rejoin the back of the queue.
    pub fn next_battle(&mut self) -> TowerResult<TowerRound> {
        let player = self.player.as_mut().ok_or(TowerError::NoPlayerTrainer)?;
        if player.lives == 0 {
            return Err(TowerError::PlayerOutOfLives {
                trainer: player.trainer.name.clone(),
            });
        }
        let mut enemy = self.enemies.pop_front().ok_or(TowerError::NoEnemies)?;

        let fought = Battle::new(
            &mut player.trainer,
            &mut enemy.trainer,
            TOWER_MODE,
            Criterion::default(),
            &self.chart,
        )
        .and_then(|mut battle| {
            battle.commence_battle()?;
            Ok(battle.game_state().winner())
        });
        let winner = match fought {
            Ok(winner) => winner,
            Err(err) => {
                self.enemies.push_front(enemy);
                return Err(err.into());
            }
        };

        let [player_lives, enemy_lives] = settle_lives(winner, [player.lives, enemy.lives]);
        player.lives = player_lives;
        enemy.lives = enemy_lives;
        if winner == Some(0) {
            self.defeated += 1;
        }

        let round = TowerRound {
            winner: winner.map(|index| {
                if index == 0 {
                    player.trainer.name.clone()
                } else {
                    enemy.trainer.name.clone()
                }
            }),
            player: player.trainer.name.clone(),
            enemy: enemy.trainer.name.clone(),
            player_lives,
            enemy_lives,
        };

        if enemy.lives > 0 {
            enemy.trainer.team.regenerate(TOWER_MODE, Criterion::default())?;
            self.enemies.push_back(enemy);
        } else {
            tracing::info!(trainer = %enemy.trainer.name, "out of lives");
        }
        if player.lives > 0 {
            player
                .trainer
                .team
                .regenerate(TOWER_MODE, Criterion::default())?;
        } else {
            tracing::info!(trainer = %player.trainer.name, "player is out of lives");
        }
        tracing::info!(defeated = self.defeated, "tower round finished");

        Ok(round)
    }

    pub fn enemies_defeated(&self) -> u32 {
        self.defeated
    }

    pub fn player_lives(&self) -> Option<u32> {
        self.player.as_ref().map(|p| p.lives)
    }

    /// Enemy names and lives in the order they will be fought.
    pub fn enemy_queue(&self) -> Vec<(&str, u32)> {
        self.enemies
            .iter()
            .map(|enemy| (enemy.trainer.name.as_str(), enemy.lives))
            .collect()
    }
}

//! Game configuration, read from RON.

use crate::errors::{ConfigError, ConfigResult, TypeChartResult};
use crate::team::TEAM_LIMIT;
use crate::type_effectiveness::TypeEffectiveness;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tunable parameters for battles and the tower. Missing fields take their
/// defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pokemon per randomly chosen team (1..=6, default 6).
    pub team_size: usize,

    /// Fewest lives a tower trainer can be given (default 2).
    pub min_lives: u32,

    /// Most lives a tower trainer can be given (default 10).
    pub max_lives: u32,

    /// Enemy trainers generated for a tower run (default 3).
    pub enemy_count: usize,

    /// Fixed seed for reproducible runs; fresh entropy when absent.
    pub seed: Option<u64>,

    /// Alternative type effectiveness CSV; the bundled chart when absent.
    pub type_chart: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            team_size: TEAM_LIMIT,
            min_lives: 2,
            max_lives: 10,
            enemy_count: 3,
            seed: None,
            type_chart: None,
        }
    }
}

impl GameConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&content)?;
        tracing::info!(path = %path.display(), "loaded game config");
        Ok(config)
    }

    pub fn from_ron_str(content: &str) -> ConfigResult<Self> {
        let config: GameConfig = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.team_size == 0 || self.team_size > TEAM_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "team_size must be between 1 and {}, got {}",
                TEAM_LIMIT, self.team_size
            )));
        }
        if self.min_lives == 0 {
            return Err(ConfigError::Invalid(
                "min_lives must be at least 1".to_string(),
            ));
        }
        if self.min_lives > self.max_lives {
            return Err(ConfigError::Invalid(format!(
                "min_lives ({}) exceeds max_lives ({})",
                self.min_lives, self.max_lives
            )));
        }
        Ok(())
    }

    /// Random source for team generation and lives.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// The configured type chart, or the bundled one.
    pub fn type_chart(&self) -> TypeChartResult<TypeEffectiveness> {
        match &self.type_chart {
            Some(path) => TypeEffectiveness::load(path),
            None => Ok(TypeEffectiveness::standard().clone()),
        }
    }
}

use schema::{BattleMode, Criterion};
use std::path::PathBuf;

/// Main error type for the Pokemon tower battle engine
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("type chart error: {0}")]
    TypeChart(#[from] TypeChartError),
    #[error("species data error: {0}")]
    SpeciesData(#[from] SpeciesDataError),
    #[error("team error: {0}")]
    Team(#[from] TeamError),
    #[error("battle error: {0}")]
    Battle(#[from] BattleError),
    #[error("tower error: {0}")]
    Tower(#[from] TowerError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while loading the type effectiveness table.
///
/// All of these are fatal: a table is either complete or it is not loaded.
#[derive(Debug, thiserror::Error)]
pub enum TypeChartError {
    #[error("failed to read type chart at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// No header row, or fewer than one row per type
    #[error("expected {expected} rows after the header, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row}: expected {expected} columns, found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}, column {column}: '{cell}' is not a number")]
    NonNumeric {
        row: usize,
        column: usize,
        cell: String,
    },
    #[error("row {row}, column {column}: multiplier {value} is outside 0..=4")]
    OutOfRange {
        row: usize,
        column: usize,
        value: f64,
    },
}

/// Errors related to species data operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpeciesDataError {
    /// No species has this name at any stage of its evolution line
    #[error("species not found: {0}")]
    SpeciesNotFound(String),
    #[error("{species} has no evolution stage {stage}")]
    InvalidStage { species: String, stage: usize },
    /// Species catalogue is malformed or incomplete
    #[error("malformed species data: {0}")]
    MalformedData(String),
}

/// Errors raised while assembling or operating on a team
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TeamError {
    #[error("a team needs at least one Pokemon")]
    EmptyTeam,
    #[error("team of {size} exceeds the team limit of {limit}")]
    TeamTooLarge { size: usize, limit: usize },
    #[error(transparent)]
    UnknownPokemon(#[from] SpeciesDataError),
    /// Operation needs an assembled roster but the team has not been assembled
    #[error("team has not been assembled for battle")]
    NotAssembled,
}

/// Errors related to battle setup. Fainting and draws are outcomes, not errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BattleError {
    #[error("{trainer}'s team is not assembled")]
    TeamNotAssembled { trainer: String },
    #[error("{trainer}'s team is assembled for {found}, battle mode is {expected}")]
    DisciplineMismatch {
        trainer: String,
        expected: BattleMode,
        found: BattleMode,
    },
    #[error("{trainer}'s team is ranked by {found}, battle criterion is {expected}")]
    CriterionMismatch {
        trainer: String,
        expected: Criterion,
        found: Criterion,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum TowerError {
    #[error("no player trainer has been set")]
    NoPlayerTrainer,
    #[error("{trainer} has no lives left")]
    PlayerOutOfLives { trainer: String },
    #[error("no enemy trainers are waiting")]
    NoEnemies,
    #[error("battle error: {0}")]
    Battle(#[from] BattleError),
    #[error("team error: {0}")]
    Team(#[from] TeamError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

/// Type alias for Results using TypeChartError
pub type TypeChartResult<T> = Result<T, TypeChartError>;

/// Type alias for Results using SpeciesDataError
pub type SpeciesDataResult<T> = Result<T, SpeciesDataError>;

/// Type alias for Results using TeamError
pub type TeamResult<T> = Result<T, TeamError>;

pub type BattleResult<T> = Result<T, BattleError>;

pub type TowerResult<T> = Result<T, TowerError>;

pub type ConfigResult<T> = Result<T, ConfigError>;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Team management discipline used for a whole battle.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BattleMode {
    /// Last in, first out. The same Pokemon keeps fighting until it faints.
    Set,
    /// Round robin. Survivors go to the back of the line.
    Rotate,
    /// Ranked by a chosen attribute.
    Optimise,
}

/// Attribute used to rank a team in [`BattleMode::Optimise`].
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Criterion {
    #[default]
    Health,
    Level,
    Attack,
    Defence,
    Speed,
}

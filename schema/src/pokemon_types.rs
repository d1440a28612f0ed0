use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, EnumString, IntoStaticStr};

/// The fifteen species types. The declaration order is the row/column order of
/// the type effectiveness table and must not change.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum PokeType {
    Fire,
    Water,
    Grass,
    Bug,
    Dragon,
    Electric,
    Fighting,
    Flying,
    Ghost,
    Ground,
    Ice,
    Normal,
    Poison,
    Psychic,
    Rock,
}

impl PokeType {
    /// Position of this type in the fixed enumeration order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for PokeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_enumeration_order_matches_table_layout() {
        let order: Vec<usize> = PokeType::iter().map(PokeType::index).collect();
        assert_eq!(order, (0..15).collect::<Vec<_>>());
        assert_eq!(PokeType::COUNT, 15);
        assert_eq!(PokeType::Fire.index(), 0);
        assert_eq!(PokeType::Rock.index(), 14);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(PokeType::from_str("psychic"), Ok(PokeType::Psychic));
        assert_eq!(PokeType::from_str("GHOST"), Ok(PokeType::Ghost));
        assert!(PokeType::from_str("Steel").is_err());
    }
}

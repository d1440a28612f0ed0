//! Type effectiveness table.
//!
//! The table is a square matrix of damage multipliers indexed by [`PokeType`]:
//! row = attacking type, column = defending type, both in the fixed enumeration
//! order. It is parsed once from CSV (one ignored header row, then one row per
//! type) and never mutated afterwards, so a single instance can be shared by
//! any number of battles.

use crate::errors::{TypeChartError, TypeChartResult};
use schema::PokeType;
use std::path::Path;
use std::sync::LazyLock;
use strum::EnumCount;

const TYPE_COUNT: usize = PokeType::COUNT;
const MAX_MULTIPLIER: f64 = 4.0;

static STANDARD_CSV: &str = include_str!("../data/type_effectiveness.csv");

static STANDARD_CHART: LazyLock<TypeEffectiveness> = LazyLock::new(|| {
    TypeEffectiveness::from_csv_str(STANDARD_CSV).expect("bundled type chart is malformed")
});

#[derive(Debug, Clone, PartialEq)]
pub struct TypeEffectiveness {
    table: [[f64; TYPE_COUNT]; TYPE_COUNT],
}

impl TypeEffectiveness {
    /// The chart bundled with the crate.
    pub fn standard() -> &'static TypeEffectiveness {
        &STANDARD_CHART
    }

    /// Load a chart from a CSV file on disk.
    pub fn load(path: &Path) -> TypeChartResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| TypeChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let chart = Self::from_csv_str(&content)?;
        tracing::info!(path = %path.display(), "loaded type effectiveness table");
        Ok(chart)
    }

    /// Parse a chart from CSV text. There is no partial fallback: any malformed
    /// row or cell fails the whole table.
    pub fn from_csv_str(content: &str) -> TypeChartResult<Self> {
        let rows: Vec<&str> = content
            .lines()
            .skip(1) // header
            .filter(|line| !line.trim().is_empty())
            .collect();

        if rows.len() != TYPE_COUNT {
            return Err(TypeChartError::RowCount {
                expected: TYPE_COUNT,
                found: rows.len(),
            });
        }

        let mut table = [[0.0; TYPE_COUNT]; TYPE_COUNT];
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<&str> = line.split(',').map(str::trim).collect();
            if cells.len() != TYPE_COUNT {
                return Err(TypeChartError::ColumnCount {
                    row,
                    expected: TYPE_COUNT,
                    found: cells.len(),
                });
            }
            for (column, cell) in cells.iter().enumerate() {
                let value: f64 = cell.parse().map_err(|_| TypeChartError::NonNumeric {
                    row,
                    column,
                    cell: cell.to_string(),
                })?;
                if !value.is_finite() || !(0.0..=MAX_MULTIPLIER).contains(&value) {
                    return Err(TypeChartError::OutOfRange { row, column, value });
                }
                table[row][column] = value;
            }
        }

        Ok(Self { table })
    }

    /// Damage multiplier for `attacking` hitting `defending`, in `0..=4`.
    pub fn effectiveness(&self, attacking: PokeType, defending: PokeType) -> f64 {
        self.table[attacking.index()][defending.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn uniform_csv(value: &str) -> String {
        let header = vec!["t"; TYPE_COUNT].join(",");
        let row = vec![value; TYPE_COUNT].join(",");
        let mut csv = header;
        for _ in 0..TYPE_COUNT {
            csv.push('\n');
            csv.push_str(&row);
        }
        csv
    }

    #[rstest]
    #[case(PokeType::Fire, PokeType::Grass, 2.0)]
    #[case(PokeType::Water, PokeType::Fire, 2.0)]
    #[case(PokeType::Fire, PokeType::Water, 0.5)]
    #[case(PokeType::Electric, PokeType::Ground, 0.0)]
    #[case(PokeType::Normal, PokeType::Normal, 1.0)]
    #[case(PokeType::Ghost, PokeType::Ghost, 2.0)]
    fn test_standard_chart_lookups(
        #[case] attacking: PokeType,
        #[case] defending: PokeType,
        #[case] expected: f64,
    ) {
        let chart = TypeEffectiveness::standard();
        assert_eq!(chart.effectiveness(attacking, defending), expected);
    }

    #[test]
    fn test_uniform_table_parses() {
        let chart = TypeEffectiveness::from_csv_str(&uniform_csv("1.5")).unwrap();
        assert_eq!(chart.effectiveness(PokeType::Rock, PokeType::Bug), 1.5);
    }

    #[test]
    fn test_trailing_blank_lines_are_ignored() {
        let csv = format!("{}\n\n\n", uniform_csv("1"));
        assert!(TypeEffectiveness::from_csv_str(&csv).is_ok());
    }

    #[test]
    fn test_missing_row_fails() {
        let csv = uniform_csv("1");
        let truncated: Vec<&str> = csv.lines().take(TYPE_COUNT).collect();
        let err = TypeEffectiveness::from_csv_str(&truncated.join("\n")).unwrap_err();
        assert!(matches!(
            err,
            TypeChartError::RowCount {
                expected: 15,
                found: 14
            }
        ));
    }

    #[test]
    fn test_short_row_fails() {
        let mut csv = uniform_csv("1");
        csv.push_str("\n1,1");
        // drop the last full row so the short one is row 14
        let mut lines: Vec<String> = csv.lines().map(str::to_string).collect();
        lines.remove(TYPE_COUNT);
        let err = TypeEffectiveness::from_csv_str(&lines.join("\n")).unwrap_err();
        assert!(matches!(
            err,
            TypeChartError::ColumnCount {
                row: 14,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_non_numeric_cell_fails() {
        let csv = uniform_csv("1").replacen("1,1", "x,1", 1);
        let err = TypeEffectiveness::from_csv_str(&csv).unwrap_err();
        assert!(matches!(
            err,
            TypeChartError::NonNumeric { row: 0, column: 0, .. }
        ));
    }

    #[test]
    fn test_out_of_range_cell_fails() {
        let err = TypeEffectiveness::from_csv_str(&uniform_csv("4.5")).unwrap_err();
        assert!(matches!(err, TypeChartError::OutOfRange { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TypeEffectiveness::load(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, TypeChartError::Io { .. }));
    }
}

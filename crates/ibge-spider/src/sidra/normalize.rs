use super::date::parse_month_label;
use super::error::NormalizeError;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

/// One row of a SIDRA response: column label to cell text.
pub type RawRow = BTreeMap<String, String>;

/// A SIDRA response, first row included (it carries the column descriptions, not data).
pub type RawTable = Vec<RawRow>;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MonthlyVariation {
    /// Always the first day of the month.
    pub month: NaiveDate,

    /// Percentage change from the prior month; `None` when SIDRA has no numeric value.
    pub monthly_variation: Option<f64>,
}

/// Source columns of the month label and the value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Columns {
    pub label: String,
    pub value: String,
}

impl Default for Columns {
    /// SIDRA's layout for single-period series: `D3N` is the month name, `V` the value.
    fn default() -> Self {
        Self::new("D3N", "V")
    }
}

impl Columns {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// What to do with a row whose month label cannot be parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnparseablePolicy {
    /// Fail the whole batch with [`NormalizeError::UnparseableDate`].
    #[default]
    Abort,

    /// Drop the row, with a warning.
    Skip,
}

/// Reshape a raw SIDRA table into `(month, monthly_variation)` rows.
///
/// Every row, the header row included, must carry both columns. The header row is then dropped,
/// so a table of `k` rows yields `k - 1` (or fewer, under [`UnparseablePolicy::Skip`]) in the
/// same order; tables of 0 or 1 rows yield nothing.
pub fn normalize(
    table: &[RawRow],
    columns: &Columns,
    policy: UnparseablePolicy,
) -> Result<Vec<MonthlyVariation>, NormalizeError> {
    let projected = table
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            Ok((
                project(cells, row, &columns.label)?,
                project(cells, row, &columns.value)?,
            ))
        })
        .collect::<Result<Vec<(&str, &str)>, NormalizeError>>()?;

    let mut normalized = Vec::with_capacity(projected.len().saturating_sub(1));
    for (row, (label, value)) in projected.into_iter().enumerate().skip(1) {
        let month = match parse_month_label(label) {
            Ok(month) => month,
            Err(err) => match policy {
                UnparseablePolicy::Abort => return Err(err),
                UnparseablePolicy::Skip => {
                    warn!("skipping row {row}, error({err})");
                    continue;
                }
            },
        };

        normalized.push(MonthlyVariation {
            month,
            monthly_variation: parse_value(value),
        });
    }

    Ok(normalized)
}

fn project<'a>(cells: &'a RawRow, row: usize, column: &str) -> Result<&'a str, NormalizeError> {
    cells
        .get(column)
        .map(String::as_str)
        .ok_or_else(|| NormalizeError::MissingColumn {
            column: column.to_string(),
            row,
        })
}

/// Coerce a cell to a number; anything that is not a finite decimal numeral is `None`.
///
/// SIDRA marks absent values with symbols such as `"..."`, `"-"` or `"X"`.
///
/// ```rust
/// use ibge_spider::sidra::parse_value;
///
/// assert_eq!(parse_value("-0.31"), Some(-0.31));
/// assert_eq!(parse_value("..."), None);
/// assert_eq!(parse_value("NaN"), None);
/// ```
pub fn parse_value(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    let numeral = !cell.is_empty()
        && cell
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !numeral {
        return None;
    }

    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

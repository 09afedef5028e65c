use crate::cli::Format;
use colored::Colorize;
use ibge_spider::sidra::MonthlyVariation;
use std::fmt::Write;

const MONTH: &str = "month";
const VARIATION: &str = "monthly_variation";

/// Render normalized rows; `tui` adds colour to the table format.
pub(crate) fn render(rows: &[MonthlyVariation], format: Format, tui: bool) -> anyhow::Result<String> {
    let mut out = String::new();

    match format {
        Format::Json => {
            out.push_str(&serde_json::to_string_pretty(rows)?);
            out.push('\n');
        }
        Format::Csv => {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(vec![]);
            // header written up front, so an empty series still gets one
            writer.write_record([MONTH, VARIATION])?;
            for row in rows {
                writer.serialize(row)?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|err| anyhow::anyhow!("failed to flush CSV output, error({err})"))?;
            out.push_str(&String::from_utf8(bytes)?);
        }
        Format::Table => {
            let header = format!("{MONTH:<12}{VARIATION:>18}");
            match tui {
                true => writeln!(out, "{}", header.bold())?,
                false => writeln!(out, "{header}")?,
            }
            for row in rows {
                let month = row.month.to_string();
                let value = match row.monthly_variation {
                    Some(v) => format!("{v:.2}"),
                    None => "-".to_string(),
                };
                let value = format!("{value:>18}");
                match (tui, row.monthly_variation) {
                    (true, Some(v)) if v < 0.0 => writeln!(out, "{month:<12}{}", value.green())?,
                    (true, Some(_)) => writeln!(out, "{month:<12}{}", value.red())?,
                    _ => writeln!(out, "{month:<12}{value}")?,
                }
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rows() -> Vec<MonthlyVariation> {
        vec![
            MonthlyVariation {
                month: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
                monthly_variation: Some(1.62),
            },
            MonthlyVariation {
                month: NaiveDate::from_ymd_opt(2022, 4, 1).unwrap(),
                monthly_variation: None,
            },
        ]
    }

    #[test]
    fn table_marks_missing_values() {
        let out = render(&rows(), Format::Table, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("{MONTH:<12}{VARIATION:>18}"));
        assert_eq!(lines[1], format!("2022-03-01  {:>18}", "1.62"));
        assert_eq!(lines[2], format!("2022-04-01  {:>18}", "-"));
    }

    #[test]
    fn csv_leaves_missing_values_empty() {
        let out = render(&rows(), Format::Csv, false).unwrap();
        assert_eq!(
            out,
            "month,monthly_variation\n2022-03-01,1.62\n2022-04-01,\n"
        );

        let empty = render(&[], Format::Csv, false).unwrap();
        assert_eq!(empty, "month,monthly_variation\n");
    }

    #[test]
    fn json_uses_null_for_missing_values() {
        let out = render(&rows(), Format::Json, false).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["month"], "2022-03-01");
        assert_eq!(parsed[0]["monthly_variation"], 1.62);
        assert!(parsed[1]["monthly_variation"].is_null());
    }
}

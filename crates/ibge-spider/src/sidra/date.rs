use super::error::NormalizeError;
use super::months::Month;
use chrono::{Datelike, NaiveDate};

/// Convert a SIDRA period label, `"<month-name> <yyyy>"`, into the first day of that month.
///
/// Surrounding whitespace and casing are ignored; the month name itself must match exactly,
/// diacritics included.
///
/// ```rust
/// use chrono::NaiveDate;
/// use ibge_spider::sidra::parse_month_label;
///
/// assert_eq!(
///     parse_month_label(" Março 2022 ").unwrap(),
///     NaiveDate::from_ymd_opt(2022, 3, 1).unwrap()
/// );
/// assert!(parse_month_label("2022-03").is_err());
/// ```
pub fn parse_month_label(label: &str) -> Result<NaiveDate, NormalizeError> {
    let unparseable = || NormalizeError::UnparseableDate {
        label: label.to_string(),
    };

    let lowered = label.trim().to_lowercase();
    let mut tokens = lowered.split_whitespace();
    let (Some(month), Some(year), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(unparseable());
    };

    let month = Month::from_name(month).ok_or_else(unparseable)?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unparseable());
    }
    let year: i32 = year.parse().map_err(|_| unparseable())?;

    NaiveDate::from_ymd_opt(year, month.number(), 1).ok_or_else(unparseable)
}

/// Reverse of [`parse_month_label`]: `2022-03-01` becomes `"março 2022"`.
pub fn format_month_label(date: NaiveDate) -> String {
    // month0() is always within 0..12
    let month = Month::ALL[date.month0() as usize];
    format!("{month} {:04}", date.year())
}

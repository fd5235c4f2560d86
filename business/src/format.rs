//! Display formatters for contract cells.
//!
//! Dates render as `d MMM yyyy` with Spanish month abbreviations and rent
//! amounts as Chilean pesos (`es-CL` conventions).

use chrono::{Datelike, Days, Months, NaiveDate};
use thiserror::Error;

/// Shown in place of any date that cannot be rendered.
pub const INVALID_DATE: &str = "Fecha inválida";

const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateFormatError {
    #[error("expected a YYYY-MM-DD date, got {0:?}")]
    Malformed(String),

    #[error("{component} in {input:?} is not a number")]
    NotANumber {
        component: &'static str,
        input: String,
    },

    #[error("{year:04}-{month:02}-{day:02} is outside the supported calendar range")]
    OutOfRange { year: i32, month: u32, day: u32 },
}

/// Whether `input` starts with `DDDD-DD-DD` (ASCII digits).
#[inline]
fn has_date_prefix(input: &str) -> bool {
    match input.as_bytes() {
        [y0, y1, y2, y3, b'-', m0, m1, b'-', d0, d1, ..] => {
            [y0, y1, y2, y3, m0, m1, d0, d1]
                .iter()
                .all(|b| b.is_ascii_digit())
        }
        _ => false,
    }
}

fn parse_component<T: std::str::FromStr>(
    part: Option<&str>,
    component: &'static str,
    input: &str,
) -> Result<T, DateFormatError> {
    part.map(str::trim)
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| DateFormatError::NotANumber {
            component,
            input: input.to_owned(),
        })
}

/// Builds a date from components the way a calendar constructor does:
/// months past December carry into later years, day `0` is the last day of
/// the previous month and days past the month end carry forward.
/// Two-digit years (`0000`-`0099`) land in the 1900s.
fn rollover_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let year = if (0..100).contains(&year) { year + 1900 } else { year };
    let first = NaiveDate::from_ymd_opt(year, 1, 1)?;

    let first_of_month = match month {
        0 => first.checked_sub_months(Months::new(1))?,
        _ => first.checked_add_months(Months::new(month - 1))?,
    };
    match day {
        0 => first_of_month.checked_sub_days(Days::new(1)),
        _ => first_of_month.checked_add_days(Days::new(u64::from(day - 1))),
    }
}

/// Formats an ISO-8601 date string as `d MMM yyyy` in Spanish.
///
/// The date is assembled from its year, month and day components instead of
/// being parsed as a timestamp, so a UTC midnight never shifts to the
/// previous day in a western timezone. Any time component is ignored.
/// Components outside the calendar roll over (`2024-02-30` is `1 mar 2024`).
pub fn try_format_date(input: &str) -> Result<String, DateFormatError> {
    if !has_date_prefix(input) {
        return Err(DateFormatError::Malformed(input.to_owned()));
    }

    let date_part = input.split('T').next().unwrap_or(input);
    let mut parts = date_part.split('-');
    let year: i32 = parse_component(parts.next(), "year", input)?;
    let month: u32 = parse_component(parts.next(), "month", input)?;
    let day: u32 = parse_component(parts.next(), "day", input)?;

    let date = rollover_date(year, month, day)
        .ok_or(DateFormatError::OutOfRange { year, month, day })?;

    Ok(format!(
        "{} {} {:04}",
        date.day(),
        MONTHS_ES[date.month0() as usize],
        date.year()
    ))
}

/// Like [`try_format_date`], but never fails: anything that cannot be
/// rendered becomes [`INVALID_DATE`]. Inputs that looked like dates but
/// still failed are logged.
pub fn format_date(input: &str) -> String {
    if !has_date_prefix(input) {
        return INVALID_DATE.to_owned();
    }

    match try_format_date(input) {
        Ok(formatted) => formatted,
        Err(err) => {
            log::error!("Error formatting date {input:?}: {err}");
            INVALID_DATE.to_owned()
        }
    }
}

/// Formats an amount as Chilean pesos, e.g. `$1.250.000`.
///
/// CLP has no minor unit, so amounts are rounded half away from zero.
/// Amounts are not validated; non-finite values pass through. The sign
/// follows the peso symbol (`$-2.500`), as `es-CL` writes it.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_owned();
    }

    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("${sign}∞");
    }

    let digits = format!("{:.0}", amount.abs().round());
    format!("${sign}{}", group_thousands(&digits))
}

/// Inserts `.` between groups of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

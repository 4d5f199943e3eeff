//! Age cutoff predicate and deadline expression parsing

use super::TagPredicate;
use crate::error::{PrunerError, Result};
use crate::registry::types::Tag;
use chrono::{DateTime, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Matches tags last updated strictly before a cutoff.
///
/// Tags without a parseable `last_updated` never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdatedBefore {
    deadline: DateTime<Utc>,
}

impl UpdatedBefore {
    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }
}

impl TagPredicate for UpdatedBefore {
    fn matches(&self, tag: &Tag) -> bool {
        tag.last_updated_at()
            .is_some_and(|updated| updated < self.deadline)
    }
}

pub fn by_deadline(deadline: DateTime<Utc>) -> UpdatedBefore {
    UpdatedBefore { deadline }
}

/// Resolve a deadline expression against `now`.
///
/// Accepts `now`, `today`, `yesterday`, relative spans such as
/// `30 days ago` or `1h30m ago`, RFC 3339 timestamps, and UTC dates or
/// date-times (`2024-01-31`, `2024-01-31 12:00:00`).
///
/// `today` and `yesterday` keep the current time of day. Months and years
/// in a relative span step back by calendar month, clamping to the last
/// day of a shorter month.
pub fn parse_deadline(expression: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let expr = expression.trim();
    if expr.is_empty() {
        return Err(PrunerError::Deadline(
            "Deadline expression cannot be empty".to_string(),
        ));
    }

    let lower = expr.to_ascii_lowercase();
    match lower.as_str() {
        "now" => return Ok(now),
        "today" => return Ok(now),
        "yesterday" => return Ok(now - Duration::days(1)),
        _ => {}
    }

    if lower.ends_with("ago") {
        let span = &expr[..expr.len() - "ago".len()];
        return parse_relative(span, now)
            .map_err(|reason| PrunerError::Deadline(format!("{:?}: {}", expression, reason)));
    }

    parse_absolute(expr).ok_or_else(|| {
        PrunerError::Deadline(format!("Unrecognized deadline expression {:?}", expression))
    })
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn parse_relative(span: &str, now: DateTime<Utc>) -> std::result::Result<DateTime<Utc>, String> {
    // "a day", "an hour", "1 week, 2 days", "2 weeks and 3 days"
    let normalized = span
        .replace(',', " ")
        .split_whitespace()
        .filter(|word| !word.eq_ignore_ascii_case("and"))
        .map(|word| match word.to_ascii_lowercase().as_str() {
            "a" | "an" => "1",
            _ => word,
        })
        .collect::<Vec<_>>()
        .join(" ");

    if normalized.is_empty() {
        return Err("missing duration before 'ago'".to_string());
    }

    let (months, rest) = split_calendar_units(&normalized)?;

    let stepped = now
        .checked_sub_months(Months::new(months))
        .ok_or_else(|| "duration reaches past the representable range".to_string())?;
    if rest.is_empty() {
        return Ok(stepped);
    }

    let elapsed = humantime::parse_duration(&rest).map_err(|e| e.to_string())?;
    let elapsed = Duration::from_std(elapsed).map_err(|e| e.to_string())?;
    stepped
        .checked_sub_signed(elapsed)
        .ok_or_else(|| "duration reaches past the representable range".to_string())
}

/// Pull month and year terms out of a span. Returns the total number of
/// calendar months and the remaining fixed-length terms for humantime.
fn split_calendar_units(span: &str) -> std::result::Result<(u32, String), String> {
    let mut months: u32 = 0;
    let mut rest = Vec::new();
    let mut chars = span.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        if chars.peek().is_none() {
            break;
        }

        let mut number = String::new();
        while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
            number.push(c);
        }
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let mut unit = String::new();
        while let Some(c) = chars.next_if(|c| c.is_alphabetic()) {
            unit.push(c);
        }

        if number.is_empty() {
            return Err(format!("expected a number before {:?}", unit));
        }

        let per_unit = match unit.as_str() {
            "M" => Some(1),
            _ => match unit.to_ascii_lowercase().as_str() {
                "month" | "months" => Some(1),
                "y" | "year" | "years" => Some(12),
                _ => None,
            },
        };

        match per_unit {
            Some(per_unit) => {
                let count: u32 = number
                    .parse()
                    .map_err(|_| format!("{} {} is out of range", number, unit))?;
                months = count
                    .checked_mul(per_unit)
                    .and_then(|m| months.checked_add(m))
                    .ok_or_else(|| format!("{} {} is out of range", number, unit))?;
            }
            None => rest.push(format!("{}{}", number, unit)),
        }
    }

    Ok((months, rest.join(" ")))
}

fn parse_absolute(expr: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(expr) {
        return Some(ts.with_timezone(&Utc));
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(expr, format).ok())
        .map(|naive| naive.and_utc())
        .or_else(|| {
            NaiveDate::parse_from_str(expr, "%Y-%m-%d")
                .ok()
                .map(start_of_day)
        })
}

//! Decoders from a structural match to [`PartialFields`].
//!
//! Extractors convert digits and names to integers and apply unit rules
//! (offset sign, millisecond precision, two-digit years). They never check
//! ranges; that is the assembler's job.

use crate::consts::{
    FRACTION_DIGITS, MINUTES_PER_HOUR, MONTH_ABBREVIATIONS, TWO_DIGIT_YEAR_PIVOT,
    WEEKDAY_ABBREVIATIONS,
};
use crate::error::FailureReason;
use crate::registry::RawMatch;
use crate::types::PartialFields;

/// Zone implied by HTTP dates that carry none (asctime).
const HTTP_ZONE: &str = "GMT";

/// Integer value of a named group, `None` if the group did not take part.
fn int(raw: &RawMatch<'_>, name: &str) -> Result<Option<i32>, FailureReason> {
    raw.group(name)
        .map(|text| {
            text.trim()
                .parse::<i32>()
                .map_err(|_| FailureReason::StructuralMismatch)
        })
        .transpose()
}

/// 1-based position of `name` in a fixed name table.
fn position(table: &[&str], name: Option<&str>) -> Result<Option<i32>, FailureReason> {
    name.map(|name| {
        table
            .iter()
            .position(|candidate| *candidate == name)
            .and_then(|index| i32::try_from(index + 1).ok())
            .ok_or(FailureReason::StructuralMismatch)
    })
    .transpose()
}

/// Milliseconds from the digits after the decimal mark: `1` is 100ms,
/// `123456` is 123ms.
fn fraction_to_millis(digits: &str) -> Result<i32, FailureReason> {
    let mut millis = 0;
    let mut chars = digits.chars();
    for _ in 0..FRACTION_DIGITS {
        let digit = match chars.next() {
            Some(c) => c.to_digit(10).ok_or(FailureReason::StructuralMismatch)?,
            None => 0,
        };
        millis = millis * 10 + i32::try_from(digit).map_err(|_| FailureReason::StructuralMismatch)?;
    }
    Ok(millis)
}

/// Signed offset in minutes from a sign, an hour and an optional minute.
fn signed_offset(raw: &RawMatch<'_>) -> Result<Option<i32>, FailureReason> {
    let Some(sign) = raw.group("offset_sign") else {
        return Ok(None);
    };
    let hours = int(raw, "offset_hour")?.unwrap_or(0);
    let minutes = int(raw, "offset_minute")?.unwrap_or(0);
    let magnitude = hours * MINUTES_PER_HOUR + minutes;
    Ok(Some(if sign == "-" { -magnitude } else { magnitude }))
}

/// Expands two- and three-digit years: below the pivot into the 2000s,
/// otherwise the 1900s. Four-digit years are kept as written.
fn untruncate_year(text: &str, year: i32) -> i32 {
    match text.len() {
        2 if year < TWO_DIGIT_YEAR_PIVOT => 2000 + year,
        2 | 3 => 1900 + year,
        _ => year,
    }
}

fn year_group(raw: &RawMatch<'_>) -> Result<Option<i32>, FailureReason> {
    let Some(text) = raw.group("year") else {
        return Ok(None);
    };
    Ok(int(raw, "year")?.map(|year| untruncate_year(text, year)))
}

/// Time-of-day and offset suffix shared by every ISO date shape.
fn iso_time(raw: &RawMatch<'_>, fields: PartialFields) -> Result<PartialFields, FailureReason> {
    let millisecond = raw.group("fraction").map(fraction_to_millis).transpose()?;
    let offset_minutes = if raw.group("utc").is_some() {
        Some(0)
    } else {
        signed_offset(raw)?
    };

    Ok(PartialFields {
        hour: int(raw, "hour")?,
        minute: int(raw, "minute")?,
        second: int(raw, "second")?,
        millisecond,
        offset_minutes,
        ..fields
    })
}

/// `YYYY-MM-DD` and `YYYYMMDD`.
pub fn iso_calendar(raw: &RawMatch<'_>) -> Result<PartialFields, FailureReason> {
    let date = PartialFields {
        year: int(raw, "year")?,
        month: int(raw, "month")?,
        day: int(raw, "day")?,
        ..PartialFields::default()
    };
    iso_time(raw, date)
}

/// `YYYY-Www-D`, `YYYYWwwD` and the lenient `YYYY-WwwD`.
pub fn iso_week(raw: &RawMatch<'_>) -> Result<PartialFields, FailureReason> {
    let date = PartialFields {
        week_year: int(raw, "week_year")?,
        week_number: int(raw, "week")?,
        weekday: int(raw, "weekday")?,
        ..PartialFields::default()
    };
    iso_time(raw, date)
}

/// `YYYY-DDD` and `YYYYDDD`.
pub fn iso_ordinal(raw: &RawMatch<'_>) -> Result<PartialFields, FailureReason> {
    let date = PartialFields {
        year: int(raw, "year")?,
        ordinal_day: int(raw, "ordinal")?,
        ..PartialFields::default()
    };
    iso_time(raw, date)
}

pub fn rfc2822(raw: &RawMatch<'_>) -> Result<PartialFields, FailureReason> {
    Ok(PartialFields {
        year: year_group(raw)?,
        month: position(&MONTH_ABBREVIATIONS, raw.group("month"))?,
        day: int(raw, "day")?,
        weekday: position(&WEEKDAY_ABBREVIATIONS, raw.group("weekday"))?,
        hour: int(raw, "hour")?,
        minute: int(raw, "minute")?,
        second: int(raw, "second")?,
        offset_minutes: signed_offset(raw)?,
        zone_name: raw.group("zone").map(str::to_owned),
        ..PartialFields::default()
    })
}

/// RFC 1123, RFC 850 and asctime. The weekday token is not decoded.
pub fn http(raw: &RawMatch<'_>) -> Result<PartialFields, FailureReason> {
    Ok(PartialFields {
        year: year_group(raw)?,
        month: position(&MONTH_ABBREVIATIONS, raw.group("month"))?,
        day: int(raw, "day")?,
        hour: int(raw, "hour")?,
        minute: int(raw, "minute")?,
        second: int(raw, "second")?,
        zone_name: Some(raw.group("zone").unwrap_or(HTTP_ZONE).to_owned()),
        ..PartialFields::default()
    })
}

//! Calendar conversions between ordinal dates, ISO week dates and
//! proleptic Gregorian (year, month, day) triples.
//!
//! Everything here is integer arithmetic over day counts relative to
//! 1970-01-01 and never allocates. The public converters validate their
//! input and report a [`CalendarError`]; the unchecked forms are kept
//! crate-private for callers that have already validated.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DAYS_PER_GREGORIAN_CYCLE,
    DAYS_PER_WEEK, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_WEEK, MAX_YEAR, MIN_DAY, MIN_YEAR, UNIX_EPOCH_SHIFT,
    WEEK_ONE_ANCHOR_DAY, WEEKS_IN_SHORT_YEAR,
};

/// Error produced when a date does not exist in the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Year is outside `MIN_YEAR..=MAX_YEAR`.
    #[error("year {0} is outside the supported calendar")]
    YearOutOfRange(i32),

    /// Day count maps to a year outside `MIN_YEAR..=MAX_YEAR`.
    #[error("day count {0} is outside the supported calendar")]
    DayCountOutOfRange(i64),

    /// Month is not in `1..=12`.
    #[error("month {0} is not in 1-12")]
    MonthOutOfRange(u8),

    /// Day of month is zero or past the end of the month.
    #[error("day {day} does not exist in {year}-{month:02}")]
    DayOutOfRange { year: i32, month: u8, day: u8 },

    /// Day-of-year is zero or past the end of the year.
    #[error("day {ordinal} does not exist in year {year}")]
    OrdinalOutOfRange { year: i32, ordinal: u16 },

    /// Week number is outside the weeks of the week-year.
    #[error("week {week} does not exist in week-year {week_year}")]
    WeekOutOfRange { week_year: i32, week: u8 },

    /// Weekday is not in `1..=7`.
    #[error("weekday {0} is not in 1-7")]
    WeekdayOutOfRange(u8),
}

const MIN_DAY_COUNT: i64 = epoch_days(MIN_YEAR, JANUARY, MIN_DAY);
const MAX_DAY_COUNT: i64 = epoch_days(MAX_YEAR, DECEMBER, 31);

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of a month already known to be in `1..=12`.
pub(crate) const fn month_length(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// # Errors
/// Returns `CalendarError::MonthOutOfRange` for a month outside `1..=12`.
pub const fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if month == 0 || month > MAX_MONTH {
        return Err(CalendarError::MonthOutOfRange(month));
    }
    Ok(month_length(year, month))
}

pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Checks that (year, month, day) names a day of the supported calendar.
///
/// # Errors
/// Returns the first of `YearOutOfRange`, `MonthOutOfRange` or
/// `DayOutOfRange` that applies.
pub const fn validate_date(year: i32, month: u8, day: u8) -> Result<(), CalendarError> {
    if year < MIN_YEAR || year > MAX_YEAR {
        return Err(CalendarError::YearOutOfRange(year));
    }
    if month == 0 || month > MAX_MONTH {
        return Err(CalendarError::MonthOutOfRange(month));
    }
    if day < MIN_DAY || day > month_length(year, month) {
        return Err(CalendarError::DayOutOfRange { year, month, day });
    }
    Ok(())
}

/// Days since 1970-01-01 for a proleptic Gregorian date, without
/// validation.
///
/// The year is shifted to start in March so the leap day is the last day of
/// the shifted year, then counted in 400-year eras.
pub(crate) const fn epoch_days(year: i32, month: u8, day: u8) -> i64 {
    let month = month as i64;
    let year = year as i64 - if month <= 2 { 1 } else { 0 };
    let era = year.div_euclid(GREGORIAN_CYCLE as i64);
    let year_of_era = year - era * GREGORIAN_CYCLE as i64;
    let shifted_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * shifted_month + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_GREGORIAN_CYCLE + day_of_era - UNIX_EPOCH_SHIFT
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
///
/// # Errors
/// Returns a `CalendarError` when the date fails [`validate_date`].
pub const fn days_from_civil(year: i32, month: u8, day: u8) -> Result<i64, CalendarError> {
    match validate_date(year, month, day) {
        Ok(()) => Ok(epoch_days(year, month, day)),
        Err(err) => Err(err),
    }
}

/// Inverse of [`epoch_days`] for a day count inside the supported calendar.
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn civil_date(days: i64) -> (i32, u8, u8) {
    let days = days + UNIX_EPOCH_SHIFT;
    let era = days.div_euclid(DAYS_PER_GREGORIAN_CYCLE);
    let day_of_era = days - era * DAYS_PER_GREGORIAN_CYCLE;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * GREGORIAN_CYCLE as i64 + if month <= 2 { 1 } else { 0 };
    (year as i32, month as u8, day as u8)
}

/// Inverse of [`days_from_civil`].
///
/// # Errors
/// Returns `CalendarError::DayCountOutOfRange` when `days` falls outside
/// `MIN_YEAR..=MAX_YEAR`.
pub const fn civil_from_days(days: i64) -> Result<(i32, u8, u8), CalendarError> {
    if days < MIN_DAY_COUNT || days > MAX_DAY_COUNT {
        return Err(CalendarError::DayCountOutOfRange(days));
    }
    Ok(civil_date(days))
}

/// ISO weekday (Monday = 1 ... Sunday = 7) of a day count since 1970-01-01,
/// which was a Thursday.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn day_of_week(days: i64) -> u8 {
    ((days.rem_euclid(DAYS_PER_WEEK) + 3) % DAYS_PER_WEEK + 1) as u8
}

/// 1-based day of the year for a date already validated.
pub(crate) fn ordinal_day(year: i32, month: u8, day: u8) -> u16 {
    let preceding: u16 = (JANUARY..month)
        .map(|m| u16::from(month_length(year, m)))
        .sum();
    preceding + u16::from(day)
}

/// 1-based day of the year.
///
/// # Errors
/// Returns a `CalendarError` when the date fails [`validate_date`].
pub fn calendar_to_ordinal(year: i32, month: u8, day: u8) -> Result<u16, CalendarError> {
    validate_date(year, month, day)?;
    Ok(ordinal_day(year, month, day))
}

/// Converts a (year, day-of-year) pair by walking the month lengths.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` for a year outside
/// `MIN_YEAR..=MAX_YEAR` and `CalendarError::OrdinalOutOfRange` if `ordinal`
/// is 0 or past the last day of `year`.
#[allow(clippy::cast_possible_truncation)]
pub fn ordinal_to_calendar(year: i32, ordinal: u16) -> Result<(i32, u8, u8), CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange(year));
    }
    if ordinal == 0 || ordinal > days_in_year(year) {
        return Err(CalendarError::OrdinalOutOfRange { year, ordinal });
    }

    let mut remaining = ordinal;
    let mut month = JANUARY;
    while month < DECEMBER && remaining > u16::from(month_length(year, month)) {
        remaining -= u16::from(month_length(year, month));
        month += 1;
    }

    Ok((year, month, remaining as u8))
}

/// Number of ISO weeks (52 or 53) in a week-year.
///
/// A week-year is long when it starts on a Thursday, or on a Wednesday in
/// a leap year.
pub const fn weeks_in_year(week_year: i32) -> u8 {
    let jan1 = day_of_week(epoch_days(week_year, JANUARY, MIN_DAY));
    if jan1 == 4 || (jan1 == 3 && is_leap_year(week_year)) {
        MAX_WEEK
    } else {
        WEEKS_IN_SHORT_YEAR
    }
}

/// Day count of the Monday that starts week 1 of `week_year`.
const fn week_one_monday(week_year: i32) -> i64 {
    let anchor = epoch_days(week_year, JANUARY, WEEK_ONE_ANCHOR_DAY);
    anchor - (day_of_week(anchor) as i64 - 1)
}

/// Converts an ISO week date to a calendar date.
///
/// The result is re-decomposed into a week date and must report the same
/// week-year and week, which rejects week 53 in a 52-week year.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` for a week-year outside
/// `MIN_YEAR..=MAX_YEAR`, `CalendarError::WeekdayOutOfRange` for a weekday
/// outside `1..=7` and `CalendarError::WeekOutOfRange` for a week the
/// week-year lacks.
pub fn week_to_calendar(
    week_year: i32,
    week: u8,
    weekday: u8,
) -> Result<(i32, u8, u8), CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&week_year) {
        return Err(CalendarError::YearOutOfRange(week_year));
    }
    if !(1..=7).contains(&weekday) {
        return Err(CalendarError::WeekdayOutOfRange(weekday));
    }
    if week == 0 || week > MAX_WEEK {
        return Err(CalendarError::WeekOutOfRange { week_year, week });
    }

    let days = week_one_monday(week_year)
        + (i64::from(week) - 1) * DAYS_PER_WEEK
        + (i64::from(weekday) - 1);
    let (year, month, day) = civil_date(days);

    let (check_year, check_week, _) = week_date(year, month, day);
    if check_year != week_year || check_week != week {
        return Err(CalendarError::WeekOutOfRange { week_year, week });
    }

    Ok((year, month, day))
}

/// Decomposes a validated calendar date into (week-year, week, weekday).
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn week_date(year: i32, month: u8, day: u8) -> (i32, u8, u8) {
    let weekday = day_of_week(epoch_days(year, month, day));
    let ordinal = i32::from(ordinal_day(year, month, day));
    let week = (ordinal - i32::from(weekday) + 10) / 7;

    if week < 1 {
        (year - 1, weeks_in_year(year - 1), weekday)
    } else if week > i32::from(weeks_in_year(year)) {
        (year + 1, 1, weekday)
    } else {
        (year, week as u8, weekday)
    }
}

/// Decomposes a calendar date into (week-year, week, weekday).
///
/// # Errors
/// Returns a `CalendarError` when the date fails [`validate_date`].
pub fn calendar_to_week(year: i32, month: u8, day: u8) -> Result<(i32, u8, u8), CalendarError> {
    validate_date(year, month, day)?;
    Ok(week_date(year, month, day))
}

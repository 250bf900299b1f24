//! Turns [`PartialFields`] into [`CanonicalDateFields`]: week and ordinal
//! dates are converted, absent fields take their defaults, and every field
//! is range-checked. Nothing partial is ever returned.

use std::ops::RangeInclusive;

use crate::calendar::{self, civil_from_days, day_of_week, epoch_days, month_length};
use crate::consts::{
    END_OF_DAY_HOUR, JANUARY, MAX_HOUR, MAX_MILLISECOND, MAX_MINUTE, MAX_MONTH, MAX_OFFSET_MINUTES,
    MAX_SECOND, MIN_DAY, MIN_OFFSET_MINUTES, RFC2822_ZONE_OFFSETS,
};
use crate::error::FailureReason;
use crate::types::{CanonicalDateFields, Field, PartialFields, Weekday};

/// `value` converted to `T` if it lies in `range`.
fn bounded<T: TryFrom<i32>>(
    field: Field,
    value: i32,
    range: RangeInclusive<i32>,
) -> Result<T, FailureReason> {
    if !range.contains(&value) {
        return Err(FailureReason::out_of_range(field, value));
    }
    T::try_from(value).map_err(|_| FailureReason::out_of_range(field, value))
}

fn weekday(value: i32) -> Result<Weekday, FailureReason> {
    u8::try_from(value)
        .ok()
        .and_then(Weekday::from_iso)
        .ok_or_else(|| FailureReason::out_of_range(Field::Weekday, value))
}

fn resolve_week_date(
    week_year: i32,
    fields: &PartialFields,
) -> Result<(i32, u8, u8), FailureReason> {
    let week = fields.week_number.unwrap_or(1);
    // A week date without a weekday means the Monday.
    let day = weekday(fields.weekday.unwrap_or(1))?;
    let week =
        u8::try_from(week).map_err(|_| FailureReason::out_of_range(Field::Week, week))?;
    Ok(calendar::week_to_calendar(
        week_year,
        week,
        day.iso_number(),
    )?)
}

fn resolve_ordinal_date(year: i32, ordinal: i32) -> Result<(i32, u8, u8), FailureReason> {
    let ordinal = u16::try_from(ordinal)
        .map_err(|_| FailureReason::out_of_range(Field::OrdinalDay, ordinal))?;
    Ok(calendar::ordinal_to_calendar(year, ordinal)?)
}

fn resolve_date(fields: &PartialFields) -> Result<(i32, u8, u8), FailureReason> {
    if let Some(week_year) = fields.week_year {
        return resolve_week_date(week_year, fields);
    }

    let year = fields.year.ok_or(FailureReason::StructuralMismatch)?;
    if let Some(ordinal) = fields.ordinal_day {
        return resolve_ordinal_date(year, ordinal);
    }

    let month: u8 = bounded(
        Field::Month,
        fields.month.unwrap_or(JANUARY.into()),
        1..=MAX_MONTH.into(),
    )?;
    let day = bounded(
        Field::Day,
        fields.day.unwrap_or(MIN_DAY.into()),
        1..=month_length(year, month).into(),
    )?;
    calendar::validate_date(year, month, day)?;
    Ok((year, month, day))
}

/// A weekday outside a week date is a claim about the date and must agree
/// with it.
fn check_weekday_claim(fields: &PartialFields, date: (i32, u8, u8)) -> Result<(), FailureReason> {
    let Some(claimed) = fields.weekday.filter(|_| fields.week_year.is_none()) else {
        return Ok(());
    };
    let claimed = weekday(claimed)?;
    let (year, month, day) = date;
    let actual = weekday(day_of_week(epoch_days(year, month, day)).into())?;
    if claimed != actual {
        return Err(FailureReason::WeekdayMismatch { claimed, actual });
    }
    Ok(())
}

struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
    end_of_day: bool,
}

fn resolve_time(fields: &PartialFields) -> Result<TimeOfDay, FailureReason> {
    let minute = bounded(Field::Minute, fields.minute.unwrap_or(0), 0..=MAX_MINUTE.into())?;
    let second = bounded(Field::Second, fields.second.unwrap_or(0), 0..=MAX_SECOND.into())?;
    let millisecond = bounded(
        Field::Millisecond,
        fields.millisecond.unwrap_or(0),
        0..=MAX_MILLISECOND.into(),
    )?;

    let hour = fields.hour.unwrap_or(0);
    // 24:00:00.000 is the end of the day; any other time past 23 is not.
    let end_of_day = hour == i32::from(END_OF_DAY_HOUR)
        && minute == 0
        && second == 0
        && millisecond == 0;
    let hour = if end_of_day {
        0
    } else {
        bounded(Field::Hour, hour, 0..=MAX_HOUR.into())?
    };

    Ok(TimeOfDay {
        hour,
        minute,
        second,
        millisecond,
        end_of_day,
    })
}

/// Offset for a zone name from the fixed RFC 2822 table, case-insensitively.
pub fn zone_offset(name: &str) -> Option<i32> {
    RFC2822_ZONE_OFFSETS
        .iter()
        .find(|(zone, _)| zone.eq_ignore_ascii_case(name))
        .map(|(_, offset)| *offset)
}

fn resolve_offset(fields: &PartialFields) -> Result<Option<i32>, FailureReason> {
    let offset = match &fields.zone_name {
        Some(name) => Some(
            zone_offset(name)
                .ok_or_else(|| FailureReason::UnsupportedZoneAbbreviation(name.clone()))?,
        ),
        None => fields.offset_minutes,
    };

    match offset {
        Some(minutes) if !(MIN_OFFSET_MINUTES..MAX_OFFSET_MINUTES).contains(&minutes) => {
            Err(FailureReason::out_of_range(Field::Offset, minutes))
        }
        _ => Ok(offset),
    }
}

/// Applies defaults and validates, producing the canonical fields.
///
/// # Errors
/// Returns the first range, calendar, weekday or zone failure found.
pub fn assemble(fields: &PartialFields) -> Result<CanonicalDateFields, FailureReason> {
    let date = resolve_date(fields)?;
    check_weekday_claim(fields, date)?;
    let time = resolve_time(fields)?;
    let offset_minutes = resolve_offset(fields)?;

    let (year, month, day) = if time.end_of_day {
        civil_from_days(epoch_days(date.0, date.1, date.2) + 1)?
    } else {
        date
    };

    Ok(CanonicalDateFields {
        year,
        month,
        day,
        hour: time.hour,
        minute: time.minute,
        second: time.second,
        millisecond: time.millisecond,
        offset_minutes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarError;
    use crate::consts::MAX_YEAR;

    fn date(year: i32, month: i32, day: i32) -> PartialFields {
        PartialFields {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            ..PartialFields::default()
        }
    }

    fn range_failure(field: Field, value: i64) -> Result<CanonicalDateFields, FailureReason> {
        Err(FailureReason::FieldRangeInvalid { field, value })
    }

    #[test]
    fn test_defaults_to_midnight() {
        let fields = assemble(&date(2016, 5, 25)).unwrap();
        assert_eq!(
            fields,
            CanonicalDateFields {
                year: 2016,
                month: 5,
                day: 25,
                hour: 0,
                minute: 0,
                second: 0,
                millisecond: 0,
                offset_minutes: None,
            }
        );
    }

    #[test]
    fn test_month_and_day_ranges() {
        assert_eq!(assemble(&date(2016, 13, 1)), range_failure(Field::Month, 13));
        assert_eq!(assemble(&date(2016, 0, 1)), range_failure(Field::Month, 0));
        assert_eq!(assemble(&date(2015, 2, 29)), range_failure(Field::Day, 29));
        assert_eq!(assemble(&date(2016, 4, 31)), range_failure(Field::Day, 31));
        assert_eq!(assemble(&date(2016, 4, 0)), range_failure(Field::Day, 0));
        assert!(assemble(&date(2016, 2, 29)).is_ok());
        assert!(assemble(&date(1900, 2, 29)).is_err());
        assert!(assemble(&date(2000, 2, 29)).is_ok());
    }

    #[test]
    fn test_time_ranges() {
        let with = |hour, minute, second, millisecond| PartialFields {
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
            millisecond: Some(millisecond),
            ..date(2016, 5, 25)
        };
        assert_eq!(assemble(&with(25, 0, 0, 0)), range_failure(Field::Hour, 25));
        assert_eq!(assemble(&with(9, 60, 0, 0)), range_failure(Field::Minute, 60));
        assert_eq!(assemble(&with(9, 0, 60, 0)), range_failure(Field::Second, 60));
        assert_eq!(
            assemble(&with(9, 0, 0, 1000)),
            range_failure(Field::Millisecond, 1000)
        );
        assert!(assemble(&with(23, 59, 59, 999)).is_ok());
    }

    #[test]
    fn test_end_of_day_rolls_to_next_day() {
        let fields = PartialFields {
            hour: Some(24),
            ..date(2016, 12, 31)
        };
        let result = assemble(&fields).unwrap();
        assert_eq!((result.year, result.month, result.day), (2017, 1, 1));
        assert_eq!((result.hour, result.minute), (0, 0));

        let fields = PartialFields {
            hour: Some(24),
            minute: Some(1),
            ..date(2016, 12, 31)
        };
        assert_eq!(assemble(&fields), range_failure(Field::Hour, 24));
    }

    #[test]
    fn test_week_date() {
        let fields = PartialFields {
            week_year: Some(2016),
            week_number: Some(21),
            weekday: Some(3),
            ..PartialFields::default()
        };
        let result = assemble(&fields).unwrap();
        assert_eq!((result.year, result.month, result.day), (2016, 5, 25));
    }

    #[test]
    fn test_week_date_without_weekday_is_monday() {
        let fields = PartialFields {
            week_year: Some(2016),
            week_number: Some(21),
            ..PartialFields::default()
        };
        let result = assemble(&fields).unwrap();
        assert_eq!((result.year, result.month, result.day), (2016, 5, 23));
    }

    #[test]
    fn test_week_date_failures() {
        let week = |week_number, weekday| PartialFields {
            week_year: Some(2016),
            week_number: Some(week_number),
            weekday: Some(weekday),
            ..PartialFields::default()
        };
        assert_eq!(
            assemble(&week(53, 1)),
            Err(FailureReason::CalendarInconsistent(
                CalendarError::WeekOutOfRange {
                    week_year: 2016,
                    week: 53
                }
            ))
        );
        assert!(matches!(
            assemble(&week(0, 1)),
            Err(FailureReason::CalendarInconsistent(_))
        ));
        assert_eq!(assemble(&week(21, 8)), range_failure(Field::Weekday, 8));
        assert_eq!(assemble(&week(21, 0)), range_failure(Field::Weekday, 0));
    }

    #[test]
    fn test_week_number_outside_u8_reports_real_value() {
        for week_number in [-1, 256, 300, i32::MIN] {
            let fields = PartialFields {
                week_year: Some(2016),
                week_number: Some(week_number),
                weekday: Some(1),
                ..PartialFields::default()
            };
            assert_eq!(
                assemble(&fields),
                range_failure(Field::Week, week_number.into())
            );
        }
    }

    #[test]
    fn test_ordinal_outside_u16_reports_real_value() {
        for ordinal_day in [-5, 70_000] {
            let fields = PartialFields {
                year: Some(2016),
                ordinal_day: Some(ordinal_day),
                ..PartialFields::default()
            };
            assert_eq!(
                assemble(&fields),
                range_failure(Field::OrdinalDay, ordinal_day.into())
            );
        }
    }

    #[test]
    fn test_years_outside_calendar() {
        assert_eq!(
            assemble(&date(i32::MAX, 1, 1)),
            Err(FailureReason::CalendarInconsistent(
                CalendarError::YearOutOfRange(i32::MAX)
            ))
        );
        let ordinal = PartialFields {
            year: Some(i32::MIN),
            ordinal_day: Some(1),
            ..PartialFields::default()
        };
        assert_eq!(
            assemble(&ordinal),
            Err(FailureReason::CalendarInconsistent(
                CalendarError::YearOutOfRange(i32::MIN)
            ))
        );

        let last_day_ends = PartialFields {
            hour: Some(24),
            ..date(MAX_YEAR, 12, 31)
        };
        assert!(matches!(
            assemble(&last_day_ends),
            Err(FailureReason::CalendarInconsistent(
                CalendarError::DayCountOutOfRange(_)
            ))
        ));
    }

    #[test]
    fn test_ordinal_date() {
        let ordinal = |year, day| PartialFields {
            year: Some(year),
            ordinal_day: Some(day),
            ..PartialFields::default()
        };
        let result = assemble(&ordinal(2016, 200)).unwrap();
        assert_eq!((result.year, result.month, result.day), (2016, 7, 18));
        assert!(matches!(
            assemble(&ordinal(2015, 366)),
            Err(FailureReason::CalendarInconsistent(
                CalendarError::OrdinalOutOfRange { .. }
            ))
        ));
        assert!(assemble(&ordinal(2016, 0)).is_err());
    }

    #[test]
    fn test_weekday_claim() {
        let claim = |weekday| PartialFields {
            weekday: Some(weekday),
            ..date(2016, 11, 1)
        };
        assert!(assemble(&claim(2)).is_ok());
        assert_eq!(
            assemble(&claim(3)),
            Err(FailureReason::WeekdayMismatch {
                claimed: Weekday::Wednesday,
                actual: Weekday::Tuesday,
            })
        );
    }

    #[test]
    fn test_zone_names() {
        assert_eq!(zone_offset("EST"), Some(-300));
        assert_eq!(zone_offset("pdt"), Some(-420));
        assert_eq!(zone_offset("Z"), Some(0));
        assert_eq!(zone_offset("UT"), Some(0));
        assert_eq!(zone_offset("CET"), None);

        let zoned = |name: &str| PartialFields {
            zone_name: Some(name.to_owned()),
            ..date(2016, 11, 1)
        };
        assert_eq!(assemble(&zoned("GMT")).unwrap().offset_minutes, Some(0));
        assert_eq!(
            assemble(&zoned("CEST")),
            Err(FailureReason::UnsupportedZoneAbbreviation("CEST".to_owned()))
        );
    }

    #[test]
    fn test_offset_range() {
        let offset = |minutes| PartialFields {
            offset_minutes: Some(minutes),
            ..date(2016, 11, 1)
        };
        assert_eq!(assemble(&offset(-1440)).unwrap().offset_minutes, Some(-1440));
        assert_eq!(assemble(&offset(1439)).unwrap().offset_minutes, Some(1439));
        assert_eq!(assemble(&offset(1440)), range_failure(Field::Offset, 1440));
        assert_eq!(assemble(&offset(-5999)), range_failure(Field::Offset, -5999));
    }

    #[test]
    fn test_assembling_complete_fields_is_idempotent() {
        let complete = CanonicalDateFields {
            year: 2016,
            month: 2,
            day: 29,
            hour: 23,
            minute: 59,
            second: 58,
            millisecond: 7,
            offset_minutes: Some(-330),
        };
        let once = assemble(&PartialFields::from(complete)).unwrap();
        assert_eq!(once, complete);
        assert_eq!(assemble(&PartialFields::from(once)).unwrap(), complete);
    }
}

use crate::calendar::{civil_from_days, day_of_week, epoch_days};
use crate::consts::{MINUTES_PER_DAY, MINUTES_PER_HOUR};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Grammar family an input is claimed to be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    #[display(fmt = "ISO 8601")]
    Iso,
    #[display(fmt = "RFC 2822")]
    Rfc2822,
    #[display(fmt = "HTTP-date")]
    Http,
}

/// Field named in a range failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "day of year")]
    OrdinalDay,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "weekday")]
    Weekday,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
    #[display(fmt = "millisecond")]
    Millisecond,
    #[display(fmt = "UTC offset")]
    Offset,
}

/// ISO day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// Weekday for an ISO number in `1..=7`.
    pub const fn from_iso(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            7 => Some(Self::Sunday),
            _ => None,
        }
    }

    /// ISO number, Monday = 1 ... Sunday = 7
    #[inline]
    pub const fn iso_number(self) -> u8 {
        self as u8
    }
}

/// Fields decoded from one structural match, before defaults or validation.
///
/// Values are wide signed integers so out-of-range input survives decoding
/// and is reported by the assembler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialFields {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
    pub ordinal_day: Option<i32>,
    pub week_year: Option<i32>,
    pub week_number: Option<i32>,
    pub weekday: Option<i32>,
    pub hour: Option<i32>,
    pub minute: Option<i32>,
    pub second: Option<i32>,
    pub millisecond: Option<i32>,
    pub offset_minutes: Option<i32>,
    pub zone_name: Option<String>,
}

impl From<CanonicalDateFields> for PartialFields {
    fn from(fields: CanonicalDateFields) -> Self {
        Self {
            year: Some(fields.year),
            month: Some(fields.month.into()),
            day: Some(fields.day.into()),
            hour: Some(fields.hour.into()),
            minute: Some(fields.minute.into()),
            second: Some(fields.second.into()),
            millisecond: Some(fields.millisecond.into()),
            offset_minutes: fields.offset_minutes,
            ..Self::default()
        }
    }
}

/// Fully validated calendar fields produced by a successful parse.
///
/// `day` is valid for `(year, month)`. `offset_minutes` is present only when
/// the input carried an explicit offset or zone, and lies in `-1440..1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalDateFields {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_minutes: Option<i32>,
}

impl CanonicalDateFields {
    /// Day of the week of the date part.
    pub fn weekday(&self) -> Weekday {
        match Weekday::from_iso(day_of_week(epoch_days(self.year, self.month, self.day))) {
            Some(weekday) => weekday,
            None => unreachable!("day_of_week is always 1-7"),
        }
    }

    /// The same instant read at offset zero.
    /// Returns `None` when the input carried no offset or the shifted date
    /// leaves the supported calendar.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_utc(&self) -> Option<Self> {
        let offset = self.offset_minutes?;
        let local_minutes = epoch_days(self.year, self.month, self.day) * MINUTES_PER_DAY
            + i64::from(self.hour) * i64::from(MINUTES_PER_HOUR)
            + i64::from(self.minute);
        let utc_minutes = local_minutes - i64::from(offset);

        let (year, month, day) = civil_from_days(utc_minutes.div_euclid(MINUTES_PER_DAY)).ok()?;
        let minute_of_day = utc_minutes.rem_euclid(MINUTES_PER_DAY);
        Some(Self {
            year,
            month,
            day,
            hour: (minute_of_day / i64::from(MINUTES_PER_HOUR)) as u8,
            minute: (minute_of_day % i64::from(MINUTES_PER_HOUR)) as u8,
            second: self.second,
            millisecond: self.millisecond,
            offset_minutes: Some(0),
        })
    }
}

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;
/// Day count from 0000-03-01 to 1970-01-01
pub(crate) const UNIX_EPOCH_SHIFT: i64 = 719_468;

/// Earliest year the calendar converters accept
pub const MIN_YEAR: i32 = -999_999;
/// Latest year the calendar converters accept
pub const MAX_YEAR: i32 = 999_999;

pub const DAYS_PER_WEEK: i64 = 7;
/// ISO week-date day of January that always falls in week 1
pub const WEEK_ONE_ANCHOR_DAY: u8 = 4;
/// Largest ISO week number
pub const MAX_WEEK: u8 = 53;
/// Weeks in a week-year that does not start on (or leap into) a Thursday
pub const WEEKS_IN_SHORT_YEAR: u8 = 52;

pub const MAX_HOUR: u8 = 23;
/// End-of-day hour, valid only as `24:00:00.000`
pub const END_OF_DAY_HOUR: u8 = 24;
pub const MAX_MINUTE: u8 = 59;
pub const MAX_SECOND: u8 = 59;
pub const MAX_MILLISECOND: u16 = 999;

pub const MINUTES_PER_HOUR: i32 = 60;
pub const MINUTES_PER_DAY: i64 = 1440;

/// Lowest accepted UTC offset in minutes (inclusive)
pub const MIN_OFFSET_MINUTES: i32 = -1440;
/// Highest accepted UTC offset in minutes (exclusive)
pub const MAX_OFFSET_MINUTES: i32 = 1440;

/// Fractional seconds are kept to this many digits (milliseconds)
pub const FRACTION_DIGITS: usize = 3;

/// Two-digit years below this pivot belong to the 2000s, the rest to the 1900s
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 50;

/// Three-letter month names as they appear in RFC 2822 and HTTP dates
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Three-letter weekday names, Monday first
pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Obsolete RFC 2822 zone names and their fixed offsets in minutes.
/// This is the whole table; other names are rejected.
pub const RFC2822_ZONE_OFFSETS: [(&str, i32); 11] = [
    ("Z", 0),
    ("UT", 0),
    ("GMT", 0),
    ("EST", -5 * MINUTES_PER_HOUR),
    ("EDT", -4 * MINUTES_PER_HOUR),
    ("CST", -6 * MINUTES_PER_HOUR),
    ("CDT", -5 * MINUTES_PER_HOUR),
    ("MST", -7 * MINUTES_PER_HOUR),
    ("MDT", -6 * MINUTES_PER_HOUR),
    ("PST", -8 * MINUTES_PER_HOUR),
    ("PDT", -7 * MINUTES_PER_HOUR),
];

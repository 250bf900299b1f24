use crate::calendar::CalendarError;
use crate::types::{Family, Field, Weekday};

/// Why an input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureReason {
    /// Input was empty or only whitespace.
    #[error("empty date string")]
    EmptyInput,

    /// No registered pattern of the family matched the input shape.
    #[error("input does not match any accepted format")]
    StructuralMismatch,

    /// A decoded field is outside its legal range.
    #[error("{field} {value} is out of range")]
    FieldRangeInvalid { field: Field, value: i64 },

    /// A week or ordinal date does not exist.
    #[error(transparent)]
    CalendarInconsistent(#[from] CalendarError),

    /// The weekday token disagrees with the date.
    #[error("date falls on a {actual}, not a {claimed}")]
    WeekdayMismatch { claimed: Weekday, actual: Weekday },

    /// Zone name outside the fixed RFC 2822 table.
    #[error("unsupported zone abbreviation: {0}")]
    UnsupportedZoneAbbreviation(String),
}

impl FailureReason {
    pub(crate) fn out_of_range(field: Field, value: impl Into<i64>) -> Self {
        Self::FieldRangeInvalid {
            field,
            value: value.into(),
        }
    }
}

/// A rejected parse, carrying the input and the family it was tried as.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {family} date {input:?}: {reason}")]
pub struct ParseFailure {
    pub input: String,
    pub family: Family,
    #[source]
    pub reason: FailureReason,
}

impl ParseFailure {
    pub fn new(input: &str, family: Family, reason: FailureReason) -> Self {
        Self {
            input: input.to_owned(),
            family,
            reason,
        }
    }
}

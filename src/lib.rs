//! Parses date-time strings written in ISO 8601, RFC 2822 or HTTP-date
//! form into validated calendar fields plus an optional UTC offset.
//!
//! Each family has its own entry point. Parsing is pure: no zone database,
//! no clock, no shared state. When the input carries an explicit offset it
//! is returned in [`CanonicalDateFields::offset_minutes`]; deciding what
//! zone to apply otherwise is up to the caller.
//!
//! ```
//! let fields = date_grammar::parse_iso("2016-W21-3T09:08:34.123+06:00").unwrap();
//! assert_eq!((fields.year, fields.month, fields.day), (2016, 5, 25));
//! assert_eq!(fields.offset_minutes, Some(360));
//! ```

mod assemble;
pub mod calendar;
mod consts;
mod error;
mod extract;
mod prelude;
mod registry;
mod types;

pub use assemble::zone_offset;
pub use calendar::CalendarError;
pub use consts::*;
pub use error::{FailureReason, ParseFailure};
pub use registry::SubGrammar;
pub use types::{CanonicalDateFields, Family, Field, Weekday};

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Result of one parse attempt.
pub type ParseOutcome = Result<CanonicalDateFields, ParseFailure>;

static RFC2822_COMMENT: Lazy<Regex> = Lazy::new(|| registry::compile(r"\([^()]*\)"));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| registry::compile(r"\s+"));

/// Drops comments and folds whitespace so the RFC 2822 pattern only has to
/// deal with single spaces.
fn normalize_rfc2822(input: &str) -> String {
    let uncommented = RFC2822_COMMENT.replace_all(input, " ");
    WHITESPACE_RUN
        .replace_all(&uncommented, " ")
        .trim()
        .to_owned()
}

fn parse_fields(input: &str, family: Family) -> Result<CanonicalDateFields, FailureReason> {
    if input.trim().is_empty() {
        return Err(FailureReason::EmptyInput);
    }

    let text = match family {
        Family::Rfc2822 => Cow::Owned(normalize_rfc2822(input)),
        Family::Iso | Family::Http => Cow::Borrowed(input),
    };
    let (pattern, raw) =
        registry::dispatch(family, &text).ok_or(FailureReason::StructuralMismatch)?;
    let fields = (pattern.extract)(&raw)?;
    assemble::assemble(&fields)
}

/// Parses `input` as the given family.
///
/// # Errors
/// Returns a `ParseFailure` naming the input, the family and the reason.
pub fn parse(input: &str, family: Family) -> ParseOutcome {
    parse_fields(input, family).map_err(|reason| {
        log::debug!("rejected {family} input {input:?}: {reason}");
        ParseFailure::new(input, family, reason)
    })
}

/// Parses an ISO 8601 calendar, week or ordinal date with optional time
/// and offset.
///
/// # Errors
/// See [`parse`].
pub fn parse_iso(input: &str) -> ParseOutcome {
    parse(input, Family::Iso)
}

/// Parses an RFC 2822 date, cross-checking the weekday when present.
///
/// # Errors
/// See [`parse`].
pub fn parse_rfc2822(input: &str) -> ParseOutcome {
    parse(input, Family::Rfc2822)
}

/// Parses an HTTP-date in RFC 1123, RFC 850 or asctime form.
///
/// # Errors
/// See [`parse`].
pub fn parse_http(input: &str) -> ParseOutcome {
    parse(input, Family::Http)
}

impl Family {
    /// Parses `input` as this family.
    ///
    /// # Errors
    /// See [`parse`].
    pub fn parse(self, input: &str) -> ParseOutcome {
        parse(input, self)
    }
}

//! Ordered pattern tables for each grammar family and the dispatcher that
//! walks them.
//!
//! Every pattern is anchored at both ends and the shapes within a family are
//! disjoint: week dates need a `W`, ordinal dates have a three-digit day
//! where calendar dates have `MM-DD`/`MMDD`, and the HTTP shapes differ in
//! weekday spelling and separators. At most one pattern can match any input,
//! so table order only decides which regex runs first.

use crate::error::FailureReason;
use crate::extract;
use crate::prelude::*;
use crate::types::{Family, PartialFields};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Optional time and offset following an ISO date.
///
/// Separators between hour, minute and second are each optional, so the
/// hybrids `0924:15` and `09:2415` are accepted alongside the basic and
/// extended forms. A fraction is only allowed after seconds.
macro_rules! iso_time_suffix {
    () => {
        r"(?:T(?P<hour>[0-9]{2})(?::?(?P<minute>[0-9]{2})(?::?(?P<second>[0-9]{2})(?:[.,](?P<fraction>[0-9]{1,9}))?)?)?(?:(?P<utc>Z)|(?P<offset_sign>[+-])(?P<offset_hour>[0-9]{2})(?::?(?P<offset_minute>[0-5][0-9]))?)?)?$"
    };
}

macro_rules! month_names {
    () => {
        "Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec"
    };
}

macro_rules! short_weekdays {
    () => {
        "Mon|Tue|Wed|Thu|Fri|Sat|Sun"
    };
}

macro_rules! hms {
    () => {
        r"(?P<hour>[0-9]{2}):(?P<minute>[0-9]{2}):(?P<second>[0-9]{2})"
    };
}

#[allow(clippy::expect_used)]
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("pattern table holds only valid regexes")
}

static ISO_CALENDAR_EXTENDED: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{2})-(?P<day>[0-9]{2})",
        iso_time_suffix!()
    ))
});
static ISO_CALENDAR_BASIC: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"^(?P<year>[0-9]{4})(?P<month>[0-9]{2})(?P<day>[0-9]{2})",
        iso_time_suffix!()
    ))
});
static ISO_WEEK_EXTENDED: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"^(?P<week_year>[0-9]{4})-W(?P<week>[0-9]{2})-(?P<weekday>[0-9])",
        iso_time_suffix!()
    ))
});
static ISO_WEEK_BASIC: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"^(?P<week_year>[0-9]{4})W(?P<week>[0-9]{2})(?P<weekday>[0-9])",
        iso_time_suffix!()
    ))
});
// `2016-W213`: dashed year with an undashed week and weekday. Not valid
// ISO 8601 but long accepted, and the digit after the week is the weekday.
static ISO_WEEK_LENIENT: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"^(?P<week_year>[0-9]{4})-W(?P<week>[0-9]{2})(?P<weekday>[0-9])",
        iso_time_suffix!()
    ))
});
static ISO_ORDINAL_EXTENDED: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"^(?P<year>[0-9]{4})-(?P<ordinal>[0-9]{3})",
        iso_time_suffix!()
    ))
});
static ISO_ORDINAL_BASIC: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"^(?P<year>[0-9]{4})(?P<ordinal>[0-9]{3})",
        iso_time_suffix!()
    ))
});

// Matched against input with comments removed and whitespace collapsed.
static RFC2822: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"^(?:(?P<weekday>",
        short_weekdays!(),
        r"), ?)?(?P<day>[0-9]{1,2}) (?P<month>",
        month_names!(),
        r") (?P<year>[0-9]{2,4}) (?P<hour>[0-9]{2}):(?P<minute>[0-9]{2})(?::(?P<second>[0-9]{2}))? ",
        r"(?:(?P<offset_sign>[+-])(?P<offset_hour>[0-9]{2})(?P<offset_minute>[0-5][0-9])|(?P<zone>[A-Za-z]+))$"
    ))
});

static HTTP_RFC1123: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"^(?:",
        short_weekdays!(),
        r"), (?P<day>[0-9]{2}) (?P<month>",
        month_names!(),
        r") (?P<year>[0-9]{4}) ",
        hms!(),
        r" (?P<zone>GMT)$"
    ))
});
static HTTP_RFC850: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"^(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday), (?P<day>[0-9]{2})-(?P<month>",
        month_names!(),
        r")-(?P<year>[0-9]{2}) ",
        hms!(),
        r" (?P<zone>GMT)$"
    ))
});
static HTTP_ASCTIME: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"^(?:",
        short_weekdays!(),
        r") (?P<month>",
        month_names!(),
        r") (?P<day> [0-9]|[0-9]{2}) ",
        hms!(),
        r" (?P<year>[0-9]{4})$"
    ))
});

/// The concrete textual shape a pattern recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SubGrammar {
    #[display(fmt = "ISO calendar date (extended)")]
    IsoCalendarExtended,
    #[display(fmt = "ISO calendar date (basic)")]
    IsoCalendarBasic,
    #[display(fmt = "ISO week date (extended)")]
    IsoWeekExtended,
    #[display(fmt = "ISO week date (basic)")]
    IsoWeekBasic,
    #[display(fmt = "ISO week date (dashed year, undashed weekday)")]
    IsoWeekLenient,
    #[display(fmt = "ISO ordinal date (extended)")]
    IsoOrdinalExtended,
    #[display(fmt = "ISO ordinal date (basic)")]
    IsoOrdinalBasic,
    #[display(fmt = "RFC 2822")]
    Rfc2822,
    #[display(fmt = "RFC 1123")]
    HttpRfc1123,
    #[display(fmt = "RFC 850")]
    HttpRfc850,
    #[display(fmt = "asctime")]
    HttpAsctime,
}

/// Groups captured by one structural match. Absent optional groups read as
/// `None`.
#[derive(Debug)]
pub struct RawMatch<'a> {
    grammar: SubGrammar,
    captures: Captures<'a>,
}

impl<'a> RawMatch<'a> {
    pub const fn grammar(&self) -> SubGrammar {
        self.grammar
    }

    /// Text of a named group, if it took part in the match.
    pub fn group(&self, name: &str) -> Option<&'a str> {
        self.captures.name(name).map(|m| m.as_str())
    }
}

pub type Extractor = fn(&RawMatch<'_>) -> Result<PartialFields, FailureReason>;

/// A (matcher, extractor) pair.
pub struct Pattern {
    pub grammar: SubGrammar,
    regex: &'static Lazy<Regex>,
    pub extract: Extractor,
}

impl Pattern {
    /// Structural match only; no field is validated here.
    pub fn matches<'a>(&self, input: &'a str) -> Option<RawMatch<'a>> {
        self.regex.captures(input).map(|captures| RawMatch {
            grammar: self.grammar,
            captures,
        })
    }
}

static ISO_PATTERNS: [Pattern; 7] = [
    Pattern {
        grammar: SubGrammar::IsoCalendarExtended,
        regex: &ISO_CALENDAR_EXTENDED,
        extract: extract::iso_calendar,
    },
    Pattern {
        grammar: SubGrammar::IsoCalendarBasic,
        regex: &ISO_CALENDAR_BASIC,
        extract: extract::iso_calendar,
    },
    Pattern {
        grammar: SubGrammar::IsoWeekExtended,
        regex: &ISO_WEEK_EXTENDED,
        extract: extract::iso_week,
    },
    Pattern {
        grammar: SubGrammar::IsoWeekBasic,
        regex: &ISO_WEEK_BASIC,
        extract: extract::iso_week,
    },
    Pattern {
        grammar: SubGrammar::IsoWeekLenient,
        regex: &ISO_WEEK_LENIENT,
        extract: extract::iso_week,
    },
    Pattern {
        grammar: SubGrammar::IsoOrdinalExtended,
        regex: &ISO_ORDINAL_EXTENDED,
        extract: extract::iso_ordinal,
    },
    Pattern {
        grammar: SubGrammar::IsoOrdinalBasic,
        regex: &ISO_ORDINAL_BASIC,
        extract: extract::iso_ordinal,
    },
];

static RFC2822_PATTERNS: [Pattern; 1] = [Pattern {
    grammar: SubGrammar::Rfc2822,
    regex: &RFC2822,
    extract: extract::rfc2822,
}];

static HTTP_PATTERNS: [Pattern; 3] = [
    Pattern {
        grammar: SubGrammar::HttpRfc1123,
        regex: &HTTP_RFC1123,
        extract: extract::http,
    },
    Pattern {
        grammar: SubGrammar::HttpRfc850,
        regex: &HTTP_RFC850,
        extract: extract::http,
    },
    Pattern {
        grammar: SubGrammar::HttpAsctime,
        regex: &HTTP_ASCTIME,
        extract: extract::http,
    },
];

/// Patterns of a family in priority order.
pub fn patterns(family: Family) -> &'static [Pattern] {
    match family {
        Family::Iso => &ISO_PATTERNS,
        Family::Rfc2822 => &RFC2822_PATTERNS,
        Family::Http => &HTTP_PATTERNS,
    }
}

/// First pattern of `family` whose shape matches `input`, with its groups.
pub fn dispatch(family: Family, input: &str) -> Option<(&'static Pattern, RawMatch<'_>)> {
    let found = patterns(family)
        .iter()
        .find_map(|pattern| pattern.matches(input).map(|raw| (pattern, raw)));
    if let Some((pattern, _)) = &found {
        log::trace!("{family} input {input:?} matched {}", pattern.grammar);
    }
    found
}

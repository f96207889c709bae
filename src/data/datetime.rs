// src/data/datetime.rs

//! Parse timestamp strings to epoch seconds + nanosecond fraction.
//!
//! Turning a heterogeneous time string into an absolute instant requires:
//! 1. compiling a parser definition's strptime-like time format into a
//!    regular expression with named capture groups, done once at
//!    definition-build time ([`TimeFormat::compile`])
//! 2. matching a time string and transforming the named capture groups into
//!    a calendar-field set, an optional inline UTC offset, and a nanosecond
//!    fraction ([`time_string_match`])
//! 3. resolving the missing pieces (year inference from a caller-supplied
//!    reference instant, inline versus configured UTC offset) and
//!    converting to epoch seconds ([`time_resolve`])
//!
//! The most relevant documents to understand this file are:
//! - `chrono` crate [`strftime`] format (the specifier vocabulary follows it)
//! - `regex` crate [Regular Expression syntax]
//!
//! [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html
//! [Regular Expression syntax]: https://docs.rs/regex/1.11.1/regex/index.html#syntax

use crate::common::{
    EpochSeconds,
    Nanoseconds,
    OffsetSeconds,
    OffsetSecondsOpt,
    ParseError,
    ParseResult,
    Year,
    YearOpt,
};

use ::chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use ::const_format::concatcp;
use ::more_asserts::debug_assert_le;
use ::phf::phf_map;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{dpfn, dpfo, dpfx};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// common types
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A chrono [`DateTime`] in UTC; the type of the caller-supplied reference
/// instant ("now") used for year inference.
///
/// [`DateTime`]: https://docs.rs/chrono/0.4.40/chrono/struct.DateTime.html
pub type DateTimeUtc = DateTime<Utc>;

/// A strptime-like time format string, e.g. `"%b %d %H:%M:%S"`; the source
/// text a [`TimeFormat`] is compiled from.
pub type TimeFormatStr = str;

/// Regular expression capture group name, used within a compiled time format
/// and for later retrieval via [`regex::captures.name`].
///
/// [`regex::captures.name`]: https://docs.rs/regex/1.11.1/regex/struct.Captures.html#method.name
pub type CaptureGroupName = str;

/// Regular expression capture group pattern, one per format specifier.
pub type CaptureGroupPattern = str;

/// A fragment of regular expression pattern text.
pub type RegexPattern = str;

/// Calendar fields with no timezone attached.
///
/// The fields are read as UTC by [`broken_down_to_epoch`]; any UTC offset
/// correction happens in [`time_resolve`], not here.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BrokenDownTime {
    pub year: Year,
    /// 1–12
    pub month: u32,
    /// 1–31, calendar-validated during conversion
    pub day: u32,
    /// 0–23
    pub hour: u32,
    /// 0–59
    pub minute: u32,
    /// 0–59
    pub second: u32,
}

/// Epoch seconds plus nanosecond fraction, UTC; the sole externally
/// observable result of a time resolution.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ParsedTimestamp {
    pub seconds: EpochSeconds,
    pub nanoseconds: Nanoseconds,
}

/// [`Option`] of [`ParsedTimestamp`].
pub type ParsedTimestampOpt = Option<ParsedTimestamp>;

impl ParsedTimestamp {
    pub const fn new(
        seconds: EpochSeconds,
        nanoseconds: Nanoseconds,
    ) -> ParsedTimestamp {
        ParsedTimestamp { seconds, nanoseconds }
    }

    /// the fraction as floating-point seconds, `[0.0, 1.0)`
    pub fn fractional_f64(&self) -> f64 {
        f64::from(self.nanoseconds) / 1e9
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// UTC offset tokens
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Parse a textual UTC offset token into signed seconds.
///
/// Accepted grammars:
/// - `Z`: UTC, offset 0
/// - `±HHMM`: one sign character, exactly four digits, e.g. `"-0600"`
/// - `±HH:MM`: sign, two digits, `:`, two digits, e.g. `"+05:30"`
///
/// The minutes component must be in `[0,59]`. The hours component is
/// accepted as any two digits; the token grammar bounds it, not the
/// calendar. Returns `sign * (hours*3600 + minutes*60)`.
///
/// Any other shape is a [`MalformedOffset`]; no partial value is returned.
///
/// [`MalformedOffset`]: crate::common::ParseError::MalformedOffset
pub fn tzone_offset_parse(token: &str) -> ParseResult<OffsetSeconds> {
    fn two_digits(pair: &[u8]) -> Option<OffsetSeconds> {
        match pair {
            [tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => {
                Some(OffsetSeconds::from(tens - b'0') * 10 + OffsetSeconds::from(ones - b'0'))
            }
            _ => None,
        }
    }

    let bytes: &[u8] = token.as_bytes();
    if bytes == b"Z" {
        return Ok(0);
    }
    let err = || ParseError::MalformedOffset(token.to_string());
    let sign: OffsetSeconds = match bytes.first() {
        Some(b'+') => 1,
        Some(b'-') => -1,
        _ => return Err(err()),
    };
    let (hh, mm): (&[u8], &[u8]) = match bytes.len() {
        5 => (&bytes[1..3], &bytes[3..5]),
        6 if bytes[3] == b':' => (&bytes[1..3], &bytes[4..6]),
        _ => return Err(err()),
    };
    let hours: OffsetSeconds = two_digits(hh).ok_or_else(err)?;
    let minutes: OffsetSeconds = two_digits(mm).ok_or_else(err)?;
    if minutes > 59 {
        return Err(err());
    }

    Ok(sign * (hours * 3600 + minutes * 60))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// time format compilation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

// capture group names

/// corresponds to specifiers `%Y` and `%y`
const CGN_YEAR: &CaptureGroupName = "year";
/// corresponds to specifiers `%m`, `%b`, `%B`
const CGN_MONTH: &CaptureGroupName = "month";
/// corresponds to specifiers `%d` and `%e`
const CGN_DAY: &CaptureGroupName = "day";
/// corresponds to specifiers `%a` and `%A`; validated syntactically, never
/// cross-checked against the computed date, so never read back out of the
/// captures
#[allow(dead_code)]
const CGN_WEEKDAY: &CaptureGroupName = "weekday";
/// corresponds to specifier `%H`
const CGN_HOUR: &CaptureGroupName = "hour";
/// corresponds to specifier `%M`
const CGN_MINUTE: &CaptureGroupName = "minute";
/// corresponds to specifier `%S`
const CGN_SECOND: &CaptureGroupName = "second";
/// corresponds to specifiers `%L` and `%f`
const CGN_FRACTIONAL: &CaptureGroupName = "fractional";
/// corresponds to specifier `%z`
const CGN_TZ: &CaptureGroupName = "tz";

/// all capture group names, for testing
#[doc(hidden)]
#[cfg(any(debug_assertions, test))]
#[allow(dead_code)]
pub(crate) const CGN_ALL: [&CaptureGroupName; 9] = [
    CGN_YEAR,
    CGN_MONTH,
    CGN_DAY,
    CGN_WEEKDAY,
    CGN_HOUR,
    CGN_MINUTE,
    CGN_SECOND,
    CGN_FRACTIONAL,
    CGN_TZ,
];

// Names used in the capture group pattern values (`CGP_*`) *MUST* match the
// capture group name values (`CGN_*`).

/// four-digit year, `%Y`
pub const CGP_YEAR: &CaptureGroupPattern = r"(?P<year>[12]\d{3})";
/// two-digit year, `%y`; pivots at 69 per the strptime convention
pub const CGP_YEARy: &CaptureGroupPattern = r"(?P<year>\d\d)";
/// two-digit month, `%m`
pub const CGP_MONTHm: &CaptureGroupPattern = r"(?P<month>0[1-9]|1[0-2])";
/// abbreviated English month name, `%b`
pub const CGP_MONTHb: &CaptureGroupPattern =
    r"(?P<month>(?i:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec))";
/// full English month name, `%B`
pub const CGP_MONTHB: &CaptureGroupPattern = r"(?P<month>(?i:january|february|march|april|may|june|july|august|september|october|november|december))";
/// two-digit day, `%d`
pub const CGP_DAYd: &CaptureGroupPattern = r"(?P<day>0[1-9]|[12]\d|3[01])";
/// space- or un-padded day, `%e`
pub const CGP_DAYe: &CaptureGroupPattern = r"(?P<day>3[01]|[12]\d| ?[1-9])";
/// English weekday name, `%a` and `%A`
pub const CGP_WEEKDAY: &CaptureGroupPattern = r"(?P<weekday>(?i:monday|tuesday|wednesday|thursday|friday|saturday|sunday|mon|tue|wed|thu|fri|sat|sun))";
/// two-digit hour, `%H`
pub const CGP_HOUR: &CaptureGroupPattern = r"(?P<hour>[01]\d|2[0-3])";
/// two-digit minute, `%M`
pub const CGP_MINUTE: &CaptureGroupPattern = r"(?P<minute>[0-5]\d)";
/// two-digit second, `%S`
pub const CGP_SECOND: &CaptureGroupPattern = r"(?P<second>[0-5]\d)";
/// fractional-second digits, `%L` and `%f`; digit count is unbounded, the
/// value is the digits read as a base-10 fraction of a second
pub const CGP_FRACTIONAL: &CaptureGroupPattern = r"(?P<fractional>\d+)";

/// a UTC offset token as matched in time strings; the same grammar
/// [`tzone_offset_parse`] accepts
const RP_TZ_TOKEN: &RegexPattern = r"Z|[+-]\d\d:?\d\d";
/// timezone token, `%z`
pub const CGP_TZ: &CaptureGroupPattern = concatcp!(r"(?P<tz>", RP_TZ_TOKEN, r")");
/// optional fractional-second suffix; the separator may be `.` or `,` in the
/// input regardless of which one the format wrote, and input without the
/// suffix still matches (fraction 0)
pub const RP_FRACTIONAL_SUFFIX: &RegexPattern = concatcp!(r"(?:[.,]", CGP_FRACTIONAL, r")?");

/// map the three leading lowercase letters of an English month name to the
/// month number; three letters identify every month, abbreviated or full
static MONTH3_TO_NUMBER: ::phf::Map<&'static str, u32> = phf_map! {
    "jan" => 1,
    "feb" => 2,
    "mar" => 3,
    "apr" => 4,
    "may" => 5,
    "jun" => 6,
    "jul" => 7,
    "aug" => 8,
    "sep" => 9,
    "oct" => 10,
    "nov" => 11,
    "dec" => 12,
};

/// A compiled time format: the strptime-like source text and the anchored
/// regular expression it compiles to, plus what the format declares.
///
/// Compiled once when a parser definition is built; read-only afterward, so
/// freely shareable across threads.
///
/// Matching is anchored at the start of the input only: trailing input
/// beyond the format is ignored, strptime-style. A timezone token in the
/// input is consulted only when the format declares `%z`; the format
/// governs, not the string content.
#[derive(Clone, Debug)]
pub struct TimeFormat {
    /// the source format string
    format: String,
    /// `format` compiled to a regular expression with named capture groups
    regex: Regex,
    /// format has `%Y` or `%y`; when `false` the year is inferred by
    /// [`time_resolve`]
    has_year: bool,
    /// format has `%z`; an inline timezone token is then mandatory
    has_tz: bool,
    /// format has `%L` or `%f`
    has_fractional: bool,
}

impl TimeFormat {
    /// Compile a strptime-like format string.
    ///
    /// Supported specifiers: `%Y` `%y` `%m` `%b` `%h` `%B` `%a` `%A` `%d`
    /// `%e` `%H` `%M` `%S` `%L` `%f` `%z` `%%`. A `.` or `,` immediately
    /// before `%L`/`%f` is folded into the fractional suffix and matches
    /// either separator character. Everything else in the format matches
    /// itself literally. An unsupported specifier is a [`BadPattern`].
    ///
    /// [`BadPattern`]: crate::common::ParseError::BadPattern
    pub fn compile(format: &TimeFormatStr) -> ParseResult<TimeFormat> {
        dpfn!("({:?})", format);
        let mut pattern: String = String::with_capacity(format.len() * 8 + 1);
        pattern.push('^');
        let mut has_year = false;
        let mut has_tz = false;
        let mut has_fractional = false;

        let mut rest: &str = format;
        while let Some(c) = rest.chars().next() {
            // a separator directly followed by the fractional specifier is
            // part of the fractional suffix, not a literal
            if (c == '.' || c == ',') && (rest[1..].starts_with("%L") || rest[1..].starts_with("%f")) {
                pattern.push_str(RP_FRACTIONAL_SUFFIX);
                has_fractional = true;
                rest = &rest[3..];
                continue;
            }
            if c != '%' {
                push_literal(&mut pattern, c);
                rest = &rest[c.len_utf8()..];
                continue;
            }
            let spec: char = match rest[1..].chars().next() {
                Some(s) => s,
                // trailing lone '%'
                None => return Err(ParseError::BadPattern(format.to_string())),
            };
            rest = &rest[1 + spec.len_utf8()..];
            match spec {
                'Y' => {
                    pattern.push_str(CGP_YEAR);
                    has_year = true;
                }
                'y' => {
                    pattern.push_str(CGP_YEARy);
                    has_year = true;
                }
                'm' => pattern.push_str(CGP_MONTHm),
                'b' | 'h' => pattern.push_str(CGP_MONTHb),
                'B' => pattern.push_str(CGP_MONTHB),
                'a' | 'A' => pattern.push_str(CGP_WEEKDAY),
                'd' => pattern.push_str(CGP_DAYd),
                'e' => pattern.push_str(CGP_DAYe),
                'H' => pattern.push_str(CGP_HOUR),
                'M' => pattern.push_str(CGP_MINUTE),
                'S' => pattern.push_str(CGP_SECOND),
                'L' | 'f' => {
                    pattern.push_str(CGP_FRACTIONAL);
                    has_fractional = true;
                }
                'z' => {
                    pattern.push_str(CGP_TZ);
                    has_tz = true;
                }
                '%' => pattern.push('%'),
                _ => return Err(ParseError::BadPattern(format!("%{}", spec))),
            }
        }

        let regex: Regex = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(_err) => {
                dpfx!("Regex::new({:?}) failed: {}", pattern, _err);
                return Err(ParseError::BadPattern(format.to_string()));
            }
        };
        dpfx!("compiled {:?} to {:?}", format, pattern);

        Ok(TimeFormat {
            format: format.to_string(),
            regex,
            has_year,
            has_tz,
            has_fractional,
        })
    }

    /// the source format string
    pub fn format(&self) -> &TimeFormatStr {
        &self.format
    }

    /// does the format embed a year field?
    pub fn has_year(&self) -> bool {
        self.has_year
    }

    /// does the format embed a timezone token?
    pub fn has_tz(&self) -> bool {
        self.has_tz
    }

    /// does the format embed a fractional-seconds field?
    pub fn has_fractional(&self) -> bool {
        self.has_fractional
    }
}

/// Append one literal format character to a regex pattern under
/// construction. ASCII punctuation is backslash-escaped (always legal in
/// the `regex` crate, special or not); everything else matches itself.
fn push_literal(
    pattern: &mut String,
    c: char,
) {
    if c.is_ascii_punctuation() {
        pattern.push('\\');
    }
    pattern.push(c);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// time string matching
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Fields extracted from one time-string match; the output of
/// [`time_string_match`], consumed by [`time_resolve`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MatchedTime {
    /// `None` when the format carries no year; filled by the resolver
    pub year: YearOpt,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// inline UTC offset, `Some` exactly when the format declared `%z`
    pub tz_offset: OffsetSecondsOpt,
    pub nanoseconds: Nanoseconds,
}

impl MatchedTime {
    /// the calendar fields with `year` substituted in
    pub fn broken_down(
        &self,
        year: Year,
    ) -> BrokenDownTime {
        BrokenDownTime {
            year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
        }
    }
}

/// Match a time string against a compiled [`TimeFormat`].
///
/// On success returns the extracted calendar fields, the inline UTC offset
/// when the format declared one, and the fractional seconds as nanoseconds
/// (0 when absent). On failure returns a [`FormatMismatch`] (the string does
/// not fit the grammar) or a [`MalformedOffset`] (the timezone token is
/// shaped right but out of range); never a partial result.
///
/// Calendar fields the format does not declare default to the earliest
/// value (month 1, day 1, time 00:00:00).
///
/// [`FormatMismatch`]: crate::common::ParseError::FormatMismatch
/// [`MalformedOffset`]: crate::common::ParseError::MalformedOffset
pub fn time_string_match(
    format: &TimeFormat,
    data: &str,
) -> ParseResult<MatchedTime> {
    dpfn!("({:?}, {:?})", format.format, data);
    let captures: ::regex::Captures = match format.regex.captures(data) {
        Some(c) => c,
        None => {
            dpfx!("no match");
            return Err(ParseError::FormatMismatch(format.format.clone()));
        }
    };

    let year: YearOpt = match captures.name(CGN_YEAR) {
        Some(m) => Some(year_group_to_year(m.as_str())?),
        None => None,
    };
    let month: u32 = match captures.name(CGN_MONTH) {
        Some(m) => month_group_to_number(m.as_str())?,
        None => 1,
    };
    let day: u32 = match captures.name(CGN_DAY) {
        Some(m) => digits_to_u32(m.as_str())?,
        None => 1,
    };
    let hour: u32 = match captures.name(CGN_HOUR) {
        Some(m) => digits_to_u32(m.as_str())?,
        None => 0,
    };
    let minute: u32 = match captures.name(CGN_MINUTE) {
        Some(m) => digits_to_u32(m.as_str())?,
        None => 0,
    };
    let second: u32 = match captures.name(CGN_SECOND) {
        Some(m) => digits_to_u32(m.as_str())?,
        None => 0,
    };
    let tz_offset: OffsetSecondsOpt = match captures.name(CGN_TZ) {
        Some(m) => Some(tzone_offset_parse(m.as_str())?),
        None => None,
    };
    let nanoseconds: Nanoseconds = match captures.name(CGN_FRACTIONAL) {
        Some(m) => fractional_to_nanoseconds(m.as_str()),
        None => 0,
    };

    let matched = MatchedTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
        tz_offset,
        nanoseconds,
    };
    dpfx!("return {:?}", matched);

    Ok(matched)
}

/// Fractional-second digits to nanoseconds: the digits are a base-10
/// fraction of a second regardless of count, so `"1"` is 100000000 ns and
/// `"1234"` is 123400000 ns. Digits beyond nanosecond precision are dropped.
pub fn fractional_to_nanoseconds(digits: &str) -> Nanoseconds {
    let keep: &str = &digits[..digits.len().min(9)];
    debug_assert_le!(keep.len(), 9);
    let mut value: u64 = 0;
    for b in keep.bytes() {
        value = value * 10 + u64::from(b - b'0');
    }

    (value * 10u64.pow(9 - keep.len() as u32)) as Nanoseconds
}

/// capture group digits (possibly space-padded, `%e`) to `u32`
fn digits_to_u32(data: &str) -> ParseResult<u32> {
    match data.trim_start().parse::<u32>() {
        Ok(val) => Ok(val),
        Err(_err) => Err(ParseError::FormatMismatch(data.to_string())),
    }
}

/// year capture group to a full year; two-digit years pivot at 69 per the
/// strptime convention
fn year_group_to_year(data: &str) -> ParseResult<Year> {
    let year = digits_to_u32(data)? as Year;
    if data.len() != 2 {
        return Ok(year);
    }
    match year {
        0..=68 => Ok(year + 2000),
        _ => Ok(year + 1900),
    }
}

/// month capture group, numeric or named, to the month number 1–12
fn month_group_to_number(data: &str) -> ParseResult<u32> {
    if matches!(data.as_bytes().first(), Some(b'0'..=b'9')) {
        return digits_to_u32(data);
    }
    let prefix: String = match data.get(..3) {
        Some(p) => p.to_ascii_lowercase(),
        None => return Err(ParseError::FormatMismatch(data.to_string())),
    };
    match MONTH3_TO_NUMBER.get(prefix.as_str()) {
        Some(month) => Ok(*month),
        None => Err(ParseError::FormatMismatch(data.to_string())),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// epoch conversion and resolution
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Convert broken-down calendar fields, read as UTC, to epoch seconds.
///
/// Proleptic Gregorian calendar; no timezone database is consulted and no
/// daylight-saving adjustment is applied. Calendar-invalid dates (a
/// `Feb 31`) are a [`FormatMismatch`].
///
/// [`FormatMismatch`]: crate::common::ParseError::FormatMismatch
pub fn broken_down_to_epoch(bdt: &BrokenDownTime) -> ParseResult<EpochSeconds> {
    let err = || ParseError::FormatMismatch(format!("{:?}", bdt));
    let date: NaiveDate = NaiveDate::from_ymd_opt(bdt.year, bdt.month, bdt.day).ok_or_else(err)?;
    let datetime: NaiveDateTime = date
        .and_hms_opt(bdt.hour, bdt.minute, bdt.second)
        .ok_or_else(err)?;

    Ok(datetime.and_utc().timestamp())
}

/// Resolve a time string to a [`ParsedTimestamp`].
///
/// - `now` supplies the year for formats without one, and nothing else. No
///   year-rollover correction is attempted: a December string resolved near
///   a January "now" gets the January year.
/// - `utc_offset` is applied when the string carries no inline timezone
///   token; callers pass the parser definition's configured offset, or a
///   per-call override, or 0 when the source is already UTC. It is an
///   explicit parameter so definitions stay immutable and thread-shareable.
///
/// Offsets are "how far local time is ahead of UTC", so the effective
/// offset is subtracted from the naive reading to reach UTC.
///
/// Resolution is pure: same (format, string, now, offset) always yields the
/// identical timestamp. A failure at any stage is reported as the single
/// failure kind that caused it; no partial timestamp is ever produced.
pub fn time_resolve(
    format: &TimeFormat,
    data: &str,
    now: &DateTimeUtc,
    utc_offset: OffsetSeconds,
) -> ParseResult<ParsedTimestamp> {
    dpfn!("({:?}, now {:?}, utc_offset {})", data, now, utc_offset);
    let matched: MatchedTime = time_string_match(format, data)?;
    let year: Year = match matched.year {
        Some(y) => y,
        None => now.year(),
    };
    let offset: OffsetSeconds = match matched.tz_offset {
        Some(inline) => inline,
        None => utc_offset,
    };
    let naive: EpochSeconds = broken_down_to_epoch(&matched.broken_down(year))?;
    let timestamp = ParsedTimestamp::new(naive - EpochSeconds::from(offset), matched.nanoseconds);
    dpfx!("return {:?}", timestamp);

    Ok(timestamp)
}

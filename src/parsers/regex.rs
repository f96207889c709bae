// src/parsers/regex.rs

//! The regex-capture backend: match a record line against a regular
//! expression with named capture groups, each captured group becoming a
//! string field, then attach the resolved timestamp the same way the JSON
//! backend does.

use crate::common::{OffsetSeconds, ParseError, ParseResult};
use crate::data::datetime::{DateTimeUtc, ParsedTimestampOpt};
use crate::data::record::{ParsedRecord, RecordFields};
use crate::parsers::{lookup_record_time, ParserDefinition, TimeFieldLookup};

use ::regex::{Captures, Regex};
use ::serde_json::Value;
#[allow(unused_imports)]
use ::si_trace_print::{dpfn, dpfo, dpfx};

/// A compiled record-splitting regular expression.
///
/// Fields are declared as named capture groups, `(?P<key001>...)`; unnamed
/// groups are matched but not emitted. Compiled once at definition-build
/// time.
#[derive(Clone, Debug)]
pub struct RecordRegex {
    regex: Regex,
}

impl RecordRegex {
    /// Compile a record-splitting pattern. A pattern `regex` rejects is a
    /// [`BadPattern`].
    ///
    /// [`BadPattern`]: crate::common::ParseError::BadPattern
    pub fn compile(pattern: &str) -> ParseResult<RecordRegex> {
        match Regex::new(pattern) {
            Ok(regex) => Ok(RecordRegex { regex }),
            Err(_err) => Err(ParseError::BadPattern(pattern.to_string())),
        }
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// The named captures of one matched line; the regex backend's view of a
/// record before the field map is built.
struct CaptureFields<'a> {
    captures: Captures<'a>,
}

impl TimeFieldLookup for CaptureFields<'_> {
    fn field_str(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.captures
            .name(key)
            .map(|m| m.as_str())
    }
}

/// Parse a record line with the definition's record regex.
///
/// A line the regex does not match is a [`FormatMismatch`]. The time lookup
/// runs against the raw captures, before any field map is built, so a line
/// with an unparseable time costs no allocation. As with the JSON backend,
/// any failure fails the whole call, and the time-bearing capture is left
/// out of the emitted fields unless the definition sets `time_keep`.
///
/// [`FormatMismatch`]: crate::common::ParseError::FormatMismatch
pub fn regex_record_do(
    definition: &ParserDefinition,
    record_regex: &RecordRegex,
    data: &str,
    now: &DateTimeUtc,
    utc_offset: OffsetSeconds,
) -> ParseResult<ParsedRecord> {
    dpfn!("({:?}, {:?})", definition.name(), data);
    let captures: Captures = match record_regex.regex.captures(data) {
        Some(c) => c,
        None => {
            dpfx!("no match");
            return Err(ParseError::FormatMismatch(
                record_regex
                    .pattern()
                    .to_string(),
            ));
        }
    };
    let source = CaptureFields { captures };

    let timestamp: ParsedTimestampOpt = lookup_record_time(definition, &source, now, utc_offset)?;

    let mut fields = RecordFields::new();
    for name in record_regex
        .regex
        .capture_names()
        .flatten()
    {
        if name == definition.time_key() && timestamp.is_some() && !definition.time_keep() {
            continue;
        }
        if let Some(matched) = source.captures.name(name) {
            fields.insert(name.to_string(), Value::String(matched.as_str().to_string()));
        }
    }
    dpfx!("return fields {:?}, timestamp {:?}", fields.len(), timestamp);

    Ok(ParsedRecord::new(fields, timestamp))
}

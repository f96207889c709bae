// src/parsers/mod.rs

//! Named parser definitions and the two structured-record backends.
//!
//! A [`ParserDefinition`] says how to split raw input into fields (a JSON
//! object, or a regex with named capture groups) and how to read the
//! time-bearing field (its key, its [`TimeFormat`], the UTC offset assumed
//! when the time string carries no timezone of its own). Definitions are
//! built once, registered in a [`ParserRegistry`], and shared read-only.
//!
//! [`record_parse`] is the front door: it dispatches to the backend the
//! definition was built with. The backends differ only in how the source
//! string is extracted from their structured input; both emit the same
//! [`ParsedRecord`] shape.
//!
//! Per-call UTC offset overrides go through the `*_with_offset` functions.
//! The effective offset travels as an explicit argument down to
//! [`time_resolve`]; nothing mutates a shared definition, so concurrent
//! parses over one definition cannot race.

pub mod json;
pub mod regex;

use std::collections::HashMap;

use crate::common::{OffsetSeconds, ParseError, ParseResult, ParserName};
use crate::data::datetime::{
    time_resolve,
    tzone_offset_parse,
    DateTimeUtc,
    ParsedTimestamp,
    ParsedTimestampOpt,
    TimeFormat,
    TimeFormatStr,
};
use crate::data::record::ParsedRecord;

pub use crate::parsers::regex::RecordRegex;

/// field looked up when a definition does not name one
const TIME_KEY_DEFAULT: &str = "time";

/// [`Option`] of [`TimeFormat`].
pub type TimeFormatOpt = Option<TimeFormat>;

/// Yield a named field's string value from a structured record.
///
/// The capability the time lookup needs from a record, whatever its
/// representation; one implementation per backend.
pub trait TimeFieldLookup {
    fn field_str(
        &self,
        key: &str,
    ) -> Option<&str>;
}

/// How a definition splits raw input into record fields.
#[derive(Clone, Debug)]
pub enum RecordExtractor {
    /// the input is a JSON object
    Json,
    /// the input is a line matched by a named-capture-group regex
    Regex(RecordRegex),
}

/// A named parser definition.
///
/// Read-only during parsing; share freely across threads. Per-call offset
/// overrides are passed to the `*_with_offset` functions instead of being
/// written into the definition.
#[derive(Clone, Debug)]
pub struct ParserDefinition {
    name: ParserName,
    extractor: RecordExtractor,
    time_format: TimeFormatOpt,
    time_key: String,
    time_offset: OffsetSeconds,
    time_keep: bool,
}

impl ParserDefinition {
    /// Build a definition.
    ///
    /// - `time_format`: strptime-like format string ([`TimeFormat::compile`]
    ///   grammar), or `None` when the source carries no parseable time.
    /// - `time_key`: field holding the time string; defaults to `"time"`.
    /// - `time_offset`: a UTC offset token (`"-0600"`, `"+05:30"`) assumed
    ///   when the time string has no inline timezone; `None` means the
    ///   strings are already UTC.
    /// - `time_keep`: keep the time-bearing field in the emitted record
    ///   fields instead of removing it.
    pub fn new(
        name: &str,
        extractor: RecordExtractor,
        time_format: Option<&TimeFormatStr>,
        time_key: Option<&str>,
        time_offset: Option<&str>,
        time_keep: bool,
    ) -> ParseResult<ParserDefinition> {
        let format: TimeFormatOpt = match time_format {
            Some(f) => Some(TimeFormat::compile(f)?),
            None => None,
        };
        let offset: OffsetSeconds = match time_offset {
            Some(token) => tzone_offset_parse(token)?,
            None => 0,
        };

        Ok(ParserDefinition {
            name: name.to_string(),
            extractor,
            time_format: format,
            time_key: time_key
                .unwrap_or(TIME_KEY_DEFAULT)
                .to_string(),
            time_offset: offset,
            time_keep,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extractor(&self) -> &RecordExtractor {
        &self.extractor
    }

    pub fn time_format(&self) -> Option<&TimeFormat> {
        self.time_format.as_ref()
    }

    /// does the time format embed a year field? `false` without a format
    pub fn has_year(&self) -> bool {
        self.time_format
            .as_ref()
            .is_some_and(TimeFormat::has_year)
    }

    /// does the time format embed a timezone token? `false` without a format
    pub fn has_inline_offset(&self) -> bool {
        self.time_format
            .as_ref()
            .is_some_and(TimeFormat::has_tz)
    }

    pub fn time_key(&self) -> &str {
        &self.time_key
    }

    /// the configured default UTC offset, signed seconds
    pub fn time_offset(&self) -> OffsetSeconds {
        self.time_offset
    }

    pub fn time_keep(&self) -> bool {
        self.time_keep
    }

    /// Resolve a time string with the configured default offset.
    pub fn time_lookup(
        &self,
        data: &str,
        now: &DateTimeUtc,
    ) -> ParseResult<ParsedTimestamp> {
        self.time_lookup_with_offset(data, now, self.time_offset)
    }

    /// Resolve a time string with an explicit UTC offset replacing the
    /// configured one for this call only.
    ///
    /// Errors with [`FormatMismatch`] when the definition has no time
    /// format.
    ///
    /// [`FormatMismatch`]: crate::common::ParseError::FormatMismatch
    pub fn time_lookup_with_offset(
        &self,
        data: &str,
        now: &DateTimeUtc,
        utc_offset: OffsetSeconds,
    ) -> ParseResult<ParsedTimestamp> {
        let format: &TimeFormat = match &self.time_format {
            Some(f) => f,
            None => return Err(ParseError::FormatMismatch(self.name.clone())),
        };

        time_resolve(format, data, now, utc_offset)
    }
}

/// Look up and resolve the time field of a record-in-progress.
///
/// `Ok(None)` when the definition declares no time format. `FieldMissing`
/// when it does but the record has no string under the time key.
pub(crate) fn lookup_record_time<S: TimeFieldLookup>(
    definition: &ParserDefinition,
    source: &S,
    now: &DateTimeUtc,
    utc_offset: OffsetSeconds,
) -> ParseResult<ParsedTimestampOpt> {
    let format: &TimeFormat = match definition.time_format() {
        Some(f) => f,
        None => return Ok(None),
    };
    let value: &str = match source.field_str(definition.time_key()) {
        Some(v) => v,
        None => {
            return Err(ParseError::FieldMissing(
                definition
                    .time_key()
                    .to_string(),
            ))
        }
    };
    let timestamp: ParsedTimestamp = time_resolve(format, value, now, utc_offset)?;

    Ok(Some(timestamp))
}

/// Parse one record with the definition's configured backend and default
/// offset.
pub fn record_parse(
    definition: &ParserDefinition,
    data: &str,
    now: &DateTimeUtc,
) -> ParseResult<ParsedRecord> {
    record_parse_with_offset(definition, data, now, definition.time_offset())
}

/// Parse one record with an explicit per-call UTC offset.
pub fn record_parse_with_offset(
    definition: &ParserDefinition,
    data: &str,
    now: &DateTimeUtc,
    utc_offset: OffsetSeconds,
) -> ParseResult<ParsedRecord> {
    match definition.extractor() {
        RecordExtractor::Json => json::json_record_do(definition, data, now, utc_offset),
        RecordExtractor::Regex(record_regex) => {
            regex::regex_record_do(definition, record_regex, data, now, utc_offset)
        }
    }
}

/// Named parser definitions, looked up by name.
///
/// Populated by the caller (typically from configuration, which is outside
/// this crate); read-only during parsing.
#[derive(Debug, Default)]
pub struct ParserRegistry {
    parsers: HashMap<ParserName, ParserDefinition>,
}

impl ParserRegistry {
    pub fn new() -> ParserRegistry {
        ParserRegistry { parsers: HashMap::new() }
    }

    /// Register a definition. Names are unique; registering a name twice is
    /// a [`DuplicateParser`].
    ///
    /// [`DuplicateParser`]: crate::common::ParseError::DuplicateParser
    pub fn register(
        &mut self,
        definition: ParserDefinition,
    ) -> ParseResult<()> {
        if self
            .parsers
            .contains_key(definition.name())
        {
            return Err(ParseError::DuplicateParser(
                definition
                    .name()
                    .to_string(),
            ));
        }
        self.parsers
            .insert(definition.name().to_string(), definition);

        Ok(())
    }

    pub fn get(
        &self,
        name: &str,
    ) -> Option<&ParserDefinition> {
        self.parsers.get(name)
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

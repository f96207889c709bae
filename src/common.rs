// src/common.rs
//
// common type aliases and the crate error type (avoids circular imports)

use ::thiserror::Error;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// time arithmetic
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Count of seconds since the Unix epoch, UTC. May be negative.
pub type EpochSeconds = i64;

/// Nanosecond fraction of a second, `[0, 1_000_000_000)`.
pub type Nanoseconds = u32;

/// A UTC offset as signed seconds; how far a local time reading is ahead
/// of UTC.
pub type OffsetSeconds = i32;

/// [`Option`] of [`OffsetSeconds`].
pub type OffsetSecondsOpt = Option<OffsetSeconds>;

/// A _Year_ in a date
pub type Year = i32;

/// [`Option`] of [`Year`].
pub type YearOpt = Option<Year>;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// parser definitions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Key of a [`ParserDefinition`] in a [`ParserRegistry`].
///
/// [`ParserDefinition`]: crate::parsers::ParserDefinition
/// [`ParserRegistry`]: crate::parsers::ParserRegistry
pub type ParserName = String;

/// Failure kinds of the timestamp parsing core and the record backends.
///
/// Every operation is total-failure/total-success; no operation returns a
/// partial offset, partial broken-down time, or partial record.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseError {
    /// bad sign, digit, or minutes range in a UTC offset token
    #[error("malformed UTC offset token {0:?}")]
    MalformedOffset(String),
    /// the input does not match the declared grammar
    #[error("input does not match pattern {0:?}")]
    FormatMismatch(String),
    /// a structured record holds no string value under the time key
    #[error("record field {0:?} missing or not a string")]
    FieldMissing(String),
    /// a time format or record regex failed to compile; a configuration-time
    /// error, never returned while parsing records
    #[error("cannot compile pattern {0:?}")]
    BadPattern(String),
    /// a parser with this name is already registered
    #[error("parser {0:?} already registered")]
    DuplicateParser(ParserName),
}

/// `Result` with a [`ParseError`].
pub type ParseResult<T> = Result<T, ParseError>;

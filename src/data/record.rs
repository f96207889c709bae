// src/data/record.rs

//! Structured-record containers emitted by the parser backends.

use crate::data::datetime::ParsedTimestampOpt;

use ::serde_json::Value;

/// Field map of one structured record.
///
/// The JSON backend carries decoded values through unchanged; the regex
/// backend stores every named capture as a string value. Both backends emit
/// the same shape.
pub type RecordFields = ::serde_json::Map<String, Value>;

/// One parsed record: the source fields plus the resolved time metadata.
///
/// `timestamp` is `None` only for parser definitions with no time format;
/// a definition that declares a time format either resolves it or fails the
/// whole parse.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedRecord {
    pub fields: RecordFields,
    pub timestamp: ParsedTimestampOpt,
}

impl ParsedRecord {
    pub fn new(
        fields: RecordFields,
        timestamp: ParsedTimestampOpt,
    ) -> ParsedRecord {
        ParsedRecord { fields, timestamp }
    }

    /// the string value of field `key`, if present and a string
    pub fn field_str(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(Value::as_str)
    }
}

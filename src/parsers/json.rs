// src/parsers/json.rs

//! The JSON-field backend: decode a record that is a JSON object, read the
//! time string out of the configured field, attach the resolved timestamp,
//! pass every other field through unchanged.

use crate::common::{OffsetSeconds, ParseError, ParseResult};
use crate::data::datetime::{DateTimeUtc, ParsedTimestampOpt};
use crate::data::record::{ParsedRecord, RecordFields};
use crate::parsers::{lookup_record_time, ParserDefinition, TimeFieldLookup};

use ::serde_json::Value;
#[allow(unused_imports)]
use ::si_trace_print::{dpfn, dpfo, dpfx};

impl TimeFieldLookup for RecordFields {
    fn field_str(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.get(key)
            .and_then(Value::as_str)
    }
}

/// Parse a record that is one JSON object.
///
/// Undecodable input, or a JSON document that is not an object, is a
/// [`FormatMismatch`]. A definition-declared time field that is absent or
/// not a string is a [`FieldMissing`]. Any failure fails the whole call; no
/// partial record is emitted.
///
/// The time-bearing field is removed from the emitted fields unless the
/// definition sets `time_keep`.
///
/// [`FormatMismatch`]: crate::common::ParseError::FormatMismatch
/// [`FieldMissing`]: crate::common::ParseError::FieldMissing
pub fn json_record_do(
    definition: &ParserDefinition,
    data: &str,
    now: &DateTimeUtc,
    utc_offset: OffsetSeconds,
) -> ParseResult<ParsedRecord> {
    dpfn!("({:?}, {:?})", definition.name(), data);
    let value: Value = match ::serde_json::from_str(data) {
        Ok(v) => v,
        Err(_err) => {
            dpfx!("serde_json::from_str failed: {}", _err);
            return Err(ParseError::FormatMismatch("JSON object".to_string()));
        }
    };
    let mut fields: RecordFields = match value {
        Value::Object(map) => map,
        _ => {
            dpfx!("JSON document is not an object");
            return Err(ParseError::FormatMismatch("JSON object".to_string()));
        }
    };

    let timestamp: ParsedTimestampOpt = lookup_record_time(definition, &fields, now, utc_offset)?;
    if timestamp.is_some() && !definition.time_keep() {
        fields.remove(definition.time_key());
    }
    dpfx!("return fields {:?}, timestamp {:?}", fields.len(), timestamp);

    Ok(ParsedRecord::new(fields, timestamp))
}

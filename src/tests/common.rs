// src/tests/common.rs

//! Shared fixtures: the reference instant used for year inference and the
//! parser definitions exercised across the test modules.

use crate::data::datetime::DateTimeUtc;
use crate::parsers::{ParserDefinition, ParserRegistry, RecordExtractor, RecordRegex};

use ::lazy_static::lazy_static;

/// reference instant for year inference in tests: 2017-07-14T02:40:00Z
pub const NOW_EPOCH_2017: i64 = 1_500_000_000;

pub fn now_2017() -> DateTimeUtc {
    DateTimeUtc::from_timestamp(NOW_EPOCH_2017, 0).unwrap()
}

// time formats exercised across the test modules

/// old-style syslog, no year, no timezone
pub const TF_NO_YEAR: &str = "%b %d %H:%M:%S";
pub const TF_NO_YEAR_N: &str = "%b %d %H:%M:%S.%L";
pub const TF_NO_YEAR_NC: &str = "%b %d %H:%M:%S,%L";
pub const TF_NO_YEAR_TZ: &str = "%b %d %H:%M:%S %z";
pub const TF_NO_YEAR_N_TZ: &str = "%b %d %H:%M:%S.%L %z";
/// numeric date, no timezone
pub const TF_GENERIC: &str = "%m/%d/%Y %H:%M:%S";
pub const TF_GENERIC_N: &str = "%m/%d/%Y %H:%M:%S.%L";
pub const TF_GENERIC_TZ: &str = "%m/%d/%Y %H:%M:%S %z";
pub const TF_GENERIC_N_TZ: &str = "%m/%d/%Y %H:%M:%S.%L %z";
/// trailing timezone token with no separator, `"…20:17:03Z"`
pub const TF_UTC_Z: &str = "%m/%d/%Y %H:%M:%S%z";
pub const TF_UTC_N_Z: &str = "%m/%d/%Y %H:%M:%S.%L%z";
/// httpd-error-log style with weekday name and trailing year
pub const TF_WEEKDAY_YEAR: &str = "%a %b %d %H:%M:%S.%L %Y";

/// record regex splitting `"12345 0.99 <time string>"` lines
pub const RECORD_REGEX_3COL: &str = r"^(?P<key001>[^ ]+) (?P<key002>[^ ]+) (?P<time>.+)$";

/// (name, time format, configured offset token) for every table-driven test
const DEFINITIONS: &[(&str, Option<&str>, Option<&str>)] = &[
    ("no_year", Some(TF_NO_YEAR), None),
    ("no_year_n", Some(TF_NO_YEAR_N), None),
    ("no_year_nc", Some(TF_NO_YEAR_NC), None),
    ("no_year_tz", Some(TF_NO_YEAR_TZ), None),
    ("no_year_n_tz", Some(TF_NO_YEAR_N_TZ), None),
    ("generic", Some(TF_GENERIC), None),
    ("generic_n", Some(TF_GENERIC_N), None),
    ("generic_tz", Some(TF_GENERIC_TZ), None),
    ("generic_n_tz", Some(TF_GENERIC_N_TZ), None),
    ("default_utc_z", Some(TF_UTC_Z), None),
    ("default_utc_n_z", Some(TF_UTC_N_Z), None),
    ("apache_error", Some(TF_WEEKDAY_YEAR), None),
    // configured-offset definitions, exercised without per-call overrides
    ("no_year_cst", Some(TF_NO_YEAR), Some("-0600")),
    ("generic_cest", Some(TF_GENERIC), Some("+0200")),
    // no time format at all; fields pass through, no timestamp
    ("no_time", None, None),
];

pub fn json_definition(
    name: &str,
    time_format: Option<&str>,
    time_offset: Option<&str>,
) -> ParserDefinition {
    ParserDefinition::new(name, RecordExtractor::Json, time_format, None, time_offset, false).unwrap()
}

pub fn regex_definition(
    name: &str,
    time_format: Option<&str>,
    time_offset: Option<&str>,
) -> ParserDefinition {
    let record_regex = RecordRegex::compile(RECORD_REGEX_3COL).unwrap();
    ParserDefinition::new(
        name,
        RecordExtractor::Regex(record_regex),
        time_format,
        None,
        time_offset,
        false,
    )
    .unwrap()
}

fn build_registry(regex_extractor: bool) -> ParserRegistry {
    let mut registry = ParserRegistry::new();
    for (name, time_format, time_offset) in DEFINITIONS.iter() {
        let definition = match regex_extractor {
            false => json_definition(name, *time_format, *time_offset),
            true => regex_definition(name, *time_format, *time_offset),
        };
        registry
            .register(definition)
            .unwrap();
    }

    registry
}

lazy_static! {
    /// the table definitions with the JSON extractor
    pub static ref REGISTRY_JSON: ParserRegistry = build_registry(false);
    /// the table definitions with the regex extractor
    pub static ref REGISTRY_REGEX: ParserRegistry = build_registry(true);
}

//! Argument decoding shared by the tools. Everything here runs before any
//! network I/O, so a rejected call never reaches Elasticsearch.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde_json::{Number, Value};

use crate::core::error::GatewayError;
use crate::core::tool::Arguments;

pub const MIN_SIZE: i64 = 1;
pub const MAX_SIZE: i64 = 100;
pub const DEFAULT_SIZE: i64 = 10;

/// Bytes escaped inside one REST path segment. `/`, `?`, `#` and `%` must not
/// reach the URL parser raw; commas and `*` stay literal for index patterns.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

pub fn default_size() -> Number {
    Number::from(DEFAULT_SIZE)
}

/// Decode the raw argument object into the tool's typed argument struct.
pub fn decode<T: DeserializeOwned>(tool: &str, arguments: &Arguments) -> Result<T, GatewayError> {
    serde_json::from_value(Value::Object(arguments.clone()))
        .map_err(|e| GatewayError::SchemaViolation(format!("{tool}: {e}")))
}

/// `size` arrives as any JSON number; integral floats such as `10.0` count.
pub fn check_size(tool: &str, size: &Number) -> Result<i64, GatewayError> {
    let whole = match size.as_i64() {
        Some(n) => Some(n),
        None => size
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= MIN_SIZE as f64 && *f <= MAX_SIZE as f64)
            .map(|f| f as i64),
    };
    match whole {
        Some(n) if (MIN_SIZE..=MAX_SIZE).contains(&n) => Ok(n),
        _ => Err(GatewayError::SchemaViolation(format!(
            "{tool}: `size` must be an integer between {MIN_SIZE} and {MAX_SIZE}, got {size}"
        ))),
    }
}

/// Escape a caller-supplied index or id for use as one path segment.
///
/// `.` and `..` are refused outright: URL parsing treats them (and their
/// `%2e` spellings) as dot segments and would climb out of the item path.
pub fn path_segment(argument: &'static str, raw: &str) -> Result<String, GatewayError> {
    if raw == "." || raw == ".." {
        return Err(GatewayError::MalformedInput {
            argument,
            reason: format!("`{raw}` is not a valid path segment"),
        });
    }
    Ok(utf8_percent_encode(raw, SEGMENT).to_string())
}

pub fn check_non_empty(tool: &str, name: &str, value: &str) -> Result<(), GatewayError> {
    if value.is_empty() {
        return Err(GatewayError::SchemaViolation(format!("{tool}: `{name}` must not be empty")));
    }
    Ok(())
}

/// Parse a JSON-encoded string argument.
pub fn parse_json(argument: &'static str, raw: &str) -> Result<Value, GatewayError> {
    serde_json::from_str(raw).map_err(|e| GatewayError::MalformedInput {
        argument,
        reason: e.to_string(),
    })
}

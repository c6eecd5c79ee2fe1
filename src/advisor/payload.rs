//! Rule payload decoding.
//!
//! A rule payload is opaque JSON stored with the rule. There is one decode
//! function per payload shape, shared by every checker using that shape.
//! Decoding never falls back to defaults for required fields: an empty or
//! malformed payload is a configuration error.

use regex::Regex;
use serde::{Deserialize, de::DeserializeOwned};

use crate::error::{AppResult, payload_error};

/// Maximum identifier length when a naming payload does not set one
pub const DEFAULT_NAME_LENGTH_LIMIT: usize = 64;

/// `{"number": 100}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NumberTypeRulePayload {
    pub number: i64
}

/// `{"format": "^[a-z]+(_[a-z]+)*$", "maxLength": 64}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingRulePayload {
    pub format:     String,
    #[serde(default)]
    pub max_length: usize
}

/// `{"list": ["JSON", "BLOB"]}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StringArrayTypeRulePayload {
    pub list: Vec<String>
}

/// Naming payload with its format compiled
#[derive(Debug, Clone)]
pub struct NamingRule {
    pub format:     Regex,
    pub max_length: usize
}

fn unmarshal<T: DeserializeOwned>(shape: &str, payload: &str) -> AppResult<T> {
    if payload.trim().is_empty() {
        return Err(payload_error(shape, "payload is empty"));
    }
    serde_json::from_str(payload).map_err(|e| payload_error(shape, e.to_string()))
}

/// Decode a number-threshold payload
pub fn unmarshal_number_type_rule_payload(payload: &str) -> AppResult<NumberTypeRulePayload> {
    unmarshal("number", payload)
}

/// Decode a naming payload
pub fn unmarshal_naming_rule_payload(payload: &str) -> AppResult<NamingRulePayload> {
    unmarshal("naming", payload)
}

/// Decode a naming payload and compile its format.
///
/// A missing or zero `maxLength` becomes [`DEFAULT_NAME_LENGTH_LIMIT`].
pub fn unmarshal_naming_rule_payload_as_regex(payload: &str) -> AppResult<NamingRule> {
    let naming = unmarshal_naming_rule_payload(payload)?;
    let format = Regex::new(&naming.format)
        .map_err(|e| payload_error("naming", format!("invalid format: {}", e)))?;
    let max_length = match naming.max_length {
        0 => DEFAULT_NAME_LENGTH_LIMIT,
        n => n
    };
    Ok(NamingRule {
        format,
        max_length
    })
}

/// Decode a string-list payload
pub fn unmarshal_string_array_type_rule_payload(
    payload: &str
) -> AppResult<StringArrayTypeRulePayload> {
    unmarshal("string array", payload)
}

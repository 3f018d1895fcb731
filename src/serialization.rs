//! Entry points for dynamically typed input, e.g. fields of a registrant
//! record decoded from JSON, where a value may not be a string at all.

use super::error::{Error, Result};
use super::{matches, ParsedName};
use compact_str::CompactString;
use serde_json::Value;

fn optional_str<'a>(value: &'a Value, param: &'static str) -> Result<Option<&'a str>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.as_str())),
        _ => Err(Error::InvalidArgument {
            param,
            expected: "string or null",
        }),
    }
}

fn required_str<'a>(value: &'a Value, param: &'static str) -> Result<&'a str> {
    value.as_str().ok_or(Error::InvalidArgument {
        param,
        expected: "string",
    })
}

/// Like [`ParsedName::parse`], but rejects anything other than a string or
/// null.
pub fn parse_value(name: &Value) -> Result<ParsedName> {
    Ok(ParsedName::parse(optional_str(name, "name")?))
}

pub fn base_value(name: &Value) -> Result<Option<CompactString>> {
    Ok(super::name_base(optional_str(name, "name")?))
}

/// Like [`matches`], but both values must be strings.
pub fn matches_values(str1: &Value, str2: &Value) -> Result<bool> {
    let str1 = required_str(str1, "str1")?;
    let str2 = required_str(str2, "str2")?;
    Ok(matches(str1, str2))
}

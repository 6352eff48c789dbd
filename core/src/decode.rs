//! Response body decoding.
//!
//! # Design
//! The wire format is a tagged choice resolved per operation. `Format` picks
//! the deserializer; the target shape is whatever envelope the caller asks
//! for. Decoding either yields the whole value or an error, never a partly
//! filled struct.
//!
//! The XML side of the service is loose about scalars: counts come back as
//! `<ratings_count type="integer">12</ratings_count>`, missing values as
//! `<published nil="true"/>`. The field helpers below read the element text
//! and fall back to the zero value when it is empty.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;

use crate::error::DecodeError;

/// Wire format of a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Xml,
    Json,
}

impl Format {
    /// Decode `body` into `T`. For XML the name of the root element is not
    /// checked and unknown child elements are skipped.
    pub fn decode<T: DeserializeOwned>(self, body: &[u8]) -> Result<T, DecodeError> {
        match self {
            Format::Xml => Ok(quick_xml::de::from_reader(body)?),
            Format::Json => Ok(serde_json::from_slice(body)?),
        }
    }
}

/// Parse element text as a number, treating empty text as zero.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: fmt::Display,
{
    let text = String::deserialize(deserializer)?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(T::default());
    }
    text.parse().map_err(de::Error::custom)
}

/// Parse element text as a boolean flag. Empty text is `false`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    match text.trim() {
        "" | "0" | "false" | "False" | "FALSE" => Ok(false),
        "1" | "true" | "True" | "TRUE" => Ok(true),
        other => Err(de::Error::invalid_value(
            de::Unexpected::Str(other),
            &"a boolean",
        )),
    }
}

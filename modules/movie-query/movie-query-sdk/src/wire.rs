//! Serde adapters for the loosely typed fields of the movie service.
//!
//! The service encodes booleans as `"True"`/`"False"` and counts as decimal
//! strings. These adapters accept both the textual and the native JSON form
//! and always write the textual form back.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountRepr {
    Number(u64),
    Text(String),
}

pub mod flag {
    use super::{Deserialize, Deserializer, Error, FlagRepr, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "True" } else { "False" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match FlagRepr::deserialize(deserializer)? {
            FlagRepr::Bool(value) => Ok(value),
            FlagRepr::Text(text) if text.eq_ignore_ascii_case("true") => Ok(true),
            FlagRepr::Text(text) if text.eq_ignore_ascii_case("false") => Ok(false),
            FlagRepr::Text(text) => Err(D::Error::custom(format!(
                "expected \"True\" or \"False\", got \"{text}\""
            ))),
        }
    }
}

pub mod count {
    use super::{CountRepr, Deserialize, Deserializer, Error, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match CountRepr::deserialize(deserializer)? {
            CountRepr::Number(value) => Ok(value),
            CountRepr::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| D::Error::custom(format!("expected a count, got \"{text}\""))),
        }
    }
}

pub const fn default_true() -> bool {
    true
}

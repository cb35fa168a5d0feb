//! Common type definitions used across the codebase

pub mod classify;
pub mod matcher;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Classification assigned to a field value.
///
/// Exactly one type is assigned per value, by ordered fallback: date wins
/// over phone, phone over email, and everything else is text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Date,
    Phone,
    Email,
    Text,
}

impl FieldType {
    /// Tag string used in stored templates and type reports
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Date => "date",
            FieldType::Phone => "phone",
            FieldType::Email => "email",
            FieldType::Text => "text",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for tags outside the four known field types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field type tag: {0}")]
pub struct UnknownTypeTag(pub String);

impl FromStr for FieldType {
    type Err = UnknownTypeTag;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "date" => Ok(FieldType::Date),
            "phone" => Ok(FieldType::Phone),
            "email" => Ok(FieldType::Email),
            "text" => Ok(FieldType::Text),
            other => Err(UnknownTypeTag(other.to_string())),
        }
    }
}

/// Named schema mapping field names to their expected types.
///
/// The name is non-empty by construction: store records without one are
/// rejected at load time, so the matcher never has to re-check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub fields: HashMap<String, FieldType>,
}

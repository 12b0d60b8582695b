//! Assertion parser: newline-separated `key=value` entries into a [`FieldMap`].

use crate::error::ParseError;
use serde::Serialize;
use std::collections::BTreeMap;

/// The closed set of keys an assertion may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    User,
    Expire,
}

impl Field {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "user" => Some(Field::User),
            "expire" => Some(Field::Expire),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Field::User => "user",
            Field::Expire => "expire",
        }
    }
}

/// Recognized fields of one assertion, each with exactly one value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldMap(BTreeMap<Field, String>);

impl FieldMap {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Split one entry into key and value. Exactly one `=` with text on both sides.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    if key.is_empty() || value.is_empty() || value.contains('=') {
        return None;
    }
    Some((key, value))
}

/// Parse raw assertion text. The first offending line, in input order, is reported.
pub fn parse(raw: &str) -> Result<FieldMap, ParseError> {
    let mut fields = BTreeMap::new();
    for line in raw.split('\n').filter(|l| !l.is_empty()) {
        let (key, value) =
            split_entry(line).ok_or_else(|| ParseError::MalformedLine(line.to_string()))?;
        let field = Field::from_key(key).ok_or_else(|| ParseError::UnknownKey(line.to_string()))?;
        if fields.insert(field, value.to_string()).is_some() {
            return Err(ParseError::DuplicateKey(line.to_string()));
        }
        tracing::debug!(key = field.key(), "parsed assertion entry");
    }
    Ok(FieldMap(fields))
}

// crates/scrutin-core/src/model/record.rs
use crate::error::{Result, ScrutinError};
use crate::traits::{FieldValue, Record};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Column names that carry a record's identifier and display name.
///
/// The exported tables rarely use `id` / `name` verbatim (`Id`, `nom_pays`,
/// `nom`, ...), so datasets can remap them at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordKeys {
    #[serde(default = "default_id_key")]
    pub id: String,
    #[serde(default = "default_name_key")]
    pub name: String,
}

fn default_id_key() -> String { "id".to_string() }
fn default_name_key() -> String { "name".to_string() }

impl Default for RecordKeys {
    fn default() -> Self {
        Self {
            id: default_id_key(),
            name: default_name_key(),
        }
    }
}

impl RecordKeys {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A loosely typed record: identifier, display name and an open field bag.
///
/// This is what the loader produces from JSON exports. The original object
/// is kept whole in `fields`, so columns stay reachable under their own
/// names even after being promoted to `id` / `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct DynRecord {
    pub id: String,
    pub name: String,
    pub fields: Map<String, Value>,
}

impl DynRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style field insertion, mostly for fixtures.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Convert a JSON object into a record using the default `id` / `name` keys.
    pub fn from_value(value: Value) -> Result<Self> {
        Self::from_value_with(value, &RecordKeys::default())
    }

    /// Convert a JSON object into a record.
    ///
    /// The identifier may be a string or a number (numbers are stringified);
    /// the display name must be a string.
    pub fn from_value_with(value: Value, keys: &RecordKeys) -> Result<Self> {
        let Value::Object(fields) = value else {
            return Err(ScrutinError::InvalidRecord(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        };

        let id = match fields.get(&keys.id) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => {
                return Err(ScrutinError::InvalidRecord(format!(
                    "field `{}` must be a string or number, got {}",
                    keys.id,
                    json_kind(other)
                )))
            }
            None => {
                return Err(ScrutinError::InvalidRecord(format!(
                    "missing identifier field `{}`",
                    keys.id
                )))
            }
        };

        let name = match fields.get(&keys.name) {
            Some(Value::String(s)) => s.clone(),
            _ => {
                return Err(ScrutinError::InvalidRecord(format!(
                    "record {id}: missing string field `{}`",
                    keys.name
                )))
            }
        };

        Ok(Self { id, name, fields })
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Borrowed string form of a list element. Nested containers are skipped.
fn element_text(v: &Value) -> Option<Cow<'_, str>> {
    match v {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl Record for DynRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => return Some(FieldValue::Text(&self.id)),
            "name" => return Some(FieldValue::Text(&self.name)),
            _ => {}
        }
        let value = match self.fields.get(key)? {
            Value::String(s) => FieldValue::Text(s),
            Value::Number(n) => n.as_f64().map_or(FieldValue::Other, FieldValue::Number),
            Value::Array(items) => FieldValue::List(items.iter().filter_map(element_text).collect()),
            Value::Null => return None,
            Value::Bool(_) | Value::Object(_) => FieldValue::Other,
        };
        Some(value)
    }
}

impl Serialize for DynRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let extra = self
            .fields
            .keys()
            .filter(|k| k.as_str() != "id" && k.as_str() != "name")
            .count();
        let mut map = serializer.serialize_map(Some(extra + 2))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("name", &self.name)?;
        for (k, v) in &self.fields {
            if k != "id" && k != "name" {
                map.serialize_entry(k, v)?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DynRecord {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        DynRecord::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<Value> for DynRecord {
    type Error = ScrutinError;

    fn try_from(value: Value) -> Result<Self> {
        DynRecord::from_value(value)
    }
}

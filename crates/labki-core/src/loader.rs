//! Strict YAML/JSON loading.
//!
//! Documents are deserialized straight into a `serde_json::Value` through
//! [`StrictValue`], a visitor that refuses a mapping key it has already seen.
//! The same visitor drives both `serde_yaml` and `serde_json`, so the
//! duplicate-key rule holds at every nesting level for both formats.
//!
//! Non-string YAML keys (integers, booleans, null) are coerced to their
//! string form, matching how the documents are addressed once converted to
//! JSON for schema validation.

use std::fmt;
use std::path::Path;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Number, Value};

use crate::error::{LoadError, LoadResult};

/// A JSON value deserialized with duplicate-key rejection.
#[derive(Debug, Clone, PartialEq)]
pub struct StrictValue(pub Value);

impl StrictValue {
    /// Unwrap into the inner value.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl<'de> Deserialize<'de> for StrictValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StrictVisitor).map(StrictValue)
    }
}

struct StrictVisitor;

impl<'de> Visitor<'de> for StrictVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a YAML or JSON value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(Number::from(v)))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(Number::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Number::from_f64(v)
            .map(Value::Number)
            .ok_or_else(|| E::custom(format!("number {v} cannot be represented in JSON")))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        StrictValue::deserialize(deserializer).map(StrictValue::into_inner)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(StrictValue(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = Map::new();
        while let Some(MapKey(key)) = access.next_key()? {
            if map.contains_key(&key) {
                return Err(de::Error::custom(format!("found duplicate key: {key}")));
            }
            let StrictValue(value) = access.next_value()?;
            map.insert(key, value);
        }
        Ok(Value::Object(map))
    }
}

/// A mapping key coerced to its string form.
struct MapKey(String);

impl<'de> Deserialize<'de> for MapKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MapKeyVisitor).map(MapKey)
    }
}

struct MapKeyVisitor;

impl<'de> Visitor<'de> for MapKeyVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar mapping key")
    }

    fn visit_str<E>(self, v: &str) -> Result<String, E> {
        Ok(v.to_owned())
    }

    fn visit_string<E>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_bool<E>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_unit<E>(self) -> Result<String, E> {
        Ok("null".to_string())
    }
}

/// Parse a YAML string with duplicate-key rejection.
pub fn parse_yaml_str(content: &str) -> Result<Value, serde_yaml::Error> {
    serde_yaml::from_str::<StrictValue>(content).map(StrictValue::into_inner)
}

/// Parse a JSON string with duplicate-key rejection.
pub fn parse_json_str(content: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str::<StrictValue>(content).map(StrictValue::into_inner)
}

fn read_document(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Load a YAML file as a `serde_json::Value`, rejecting duplicate keys.
pub fn load_yaml(path: &Path) -> LoadResult<Value> {
    let content = read_document(path)?;
    parse_yaml_str(&content).map_err(|e| LoadError::YamlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a JSON file as a `serde_json::Value`, rejecting duplicate keys.
pub fn load_json(path: &Path) -> LoadResult<Value> {
    let content = read_document(path)?;
    parse_json_str(&content).map_err(|e| LoadError::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a YAML or JSON document, choosing the parser from the extension.
///
/// `.json` files go through the JSON parser; everything else is read as YAML,
/// which also accepts plain JSON content.
pub fn load_structured(path: &Path) -> LoadResult<Value> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        load_json(path)
    } else {
        load_yaml(path)
    }
}

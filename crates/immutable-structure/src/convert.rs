//! Conversions between [`Structure`] and `serde_json::Value`, and the serde
//! impls built on top of them.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map as JsonMap, Value};

use crate::structure::{Map, Structure};

impl From<Value> for Structure {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Structure::Null,
            Value::Bool(b) => Structure::Bool(b),
            Value::Number(n) => Structure::Number(n),
            Value::String(s) => Structure::String(s),
            Value::Array(arr) => Structure::from_seq(arr.into_iter().map(Structure::from).collect()),
            Value::Object(obj) => {
                let mut map = Map::with_capacity(obj.len());
                for (key, val) in obj {
                    map.insert(key, Structure::from(val));
                }
                Structure::from_map(map)
            }
        }
    }
}

impl From<&Value> for Structure {
    fn from(value: &Value) -> Self {
        Structure::from(value.clone())
    }
}

impl From<&Structure> for Value {
    fn from(value: &Structure) -> Self {
        match value {
            Structure::Null => Value::Null,
            Structure::Bool(b) => Value::Bool(*b),
            Structure::Number(n) => Value::Number(n.clone()),
            Structure::String(s) => Value::String(s.clone()),
            Structure::Seq(seq) => Value::Array(seq.iter().map(Value::from).collect()),
            Structure::Map(map) => {
                let mut obj = JsonMap::new();
                for (key, val) in map.iter() {
                    obj.insert(key.clone(), Value::from(val));
                }
                Value::Object(obj)
            }
        }
    }
}

impl From<Structure> for Value {
    fn from(value: Structure) -> Self {
        Value::from(&value)
    }
}

impl PartialEq<Value> for Structure {
    fn eq(&self, other: &Value) -> bool {
        *self == Structure::from(other)
    }
}

impl Serialize for Structure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Structure::Null => serializer.serialize_unit(),
            Structure::Bool(b) => serializer.serialize_bool(*b),
            Structure::Number(n) => n.serialize(serializer),
            Structure::String(s) => serializer.serialize_str(s),
            Structure::Seq(seq) => {
                let mut out = serializer.serialize_seq(Some(seq.len()))?;
                for item in seq.iter() {
                    out.serialize_element(item)?;
                }
                out.end()
            }
            Structure::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, val) in map.iter() {
                    out.serialize_entry(key, val)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Structure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Structure::from)
    }
}

use std::collections::BTreeMap;

use serde_json as json;

use super::*;
use crate::errors::*;

err_impl! {StateError,
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
}

fn mismatch(path: &str, expected: &str, value: &json::Value) -> anyhow::Error {
    StateError::type_mismatch(&format!("{path}: expected {expected}, got {value}"))
}

impl AttributeType {
    // Converts an API-shaped JSON value (camelCase keys) into a state-shaped value (snake_case
    // attribute names).  Fields missing from the input come out as null; fields the schema doesn't
    // declare are dropped.
    pub fn to_state(&self, value: &json::Value, path: &str) -> anyhow::Result<json::Value> {
        if value.is_null() {
            return Ok(json::Value::Null);
        }

        match self {
            AttributeType::String => value
                .is_string()
                .then(|| value.clone())
                .ok_or_else(|| mismatch(path, "string", value)),
            AttributeType::Int64 => match value.as_i64() {
                Some(i) => Ok(i.into()),
                None => Err(mismatch(path, "integer", value)),
            },
            AttributeType::Float64 => value
                .is_number()
                .then(|| value.clone())
                .ok_or_else(|| mismatch(path, "number", value)),
            AttributeType::Bool => value
                .is_boolean()
                .then(|| value.clone())
                .ok_or_else(|| mismatch(path, "bool", value)),
            AttributeType::Dynamic => Ok(value.clone()),
            AttributeType::List(elem) => {
                let items = value.as_array().ok_or_else(|| mismatch(path, "list", value))?;
                let converted = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| elem.to_state(item, &format!("{path}[{i}]")))
                    .collect::<anyhow::Result<Vec<_>>>()?;
                Ok(json::Value::Array(converted))
            },
            AttributeType::Map(elem) => {
                let entries = value.as_object().ok_or_else(|| mismatch(path, "map", value))?;
                let mut converted = json::Map::new();
                for (k, v) in entries {
                    converted.insert(k.clone(), elem.to_state(v, &format!("{path}.{k}"))?);
                }
                Ok(json::Value::Object(converted))
            },
            AttributeType::Object(attrs) => object_to_state(attrs, value, path),
        }
    }

    // The inverse of to_state: rebuilds the API-shaped JSON from a state value, omitting nulls.
    pub fn from_state(&self, state: &json::Value, path: &str) -> anyhow::Result<json::Value> {
        match (self, state) {
            (AttributeType::List(elem), json::Value::Array(items)) => {
                let converted = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| elem.from_state(item, &format!("{path}[{i}]")))
                    .collect::<anyhow::Result<Vec<_>>>()?;
                Ok(json::Value::Array(converted))
            },
            (AttributeType::Map(elem), json::Value::Object(entries)) => {
                let mut converted = json::Map::new();
                for (k, v) in entries {
                    converted.insert(k.clone(), elem.from_state(v, &format!("{path}.{k}"))?);
                }
                Ok(json::Value::Object(converted))
            },
            (AttributeType::Object(attrs), json::Value::Object(_)) => object_from_state(attrs, state, path),
            (AttributeType::List(_), v) if !v.is_null() => Err(mismatch(path, "list", v)),
            (AttributeType::Map(_), v) if !v.is_null() => Err(mismatch(path, "map", v)),
            (AttributeType::Object(_), v) if !v.is_null() => Err(mismatch(path, "object", v)),
            (_, v) => Ok(v.clone()),
        }
    }
}

pub(super) fn object_to_state(
    attrs: &BTreeMap<String, Attribute>,
    value: &json::Value,
    path: &str,
) -> anyhow::Result<json::Value> {
    let fields = value.as_object().ok_or_else(|| mismatch(path, "object", value))?;
    let mut state = json::Map::new();
    for (name, attr) in attrs {
        let child_path = if path.is_empty() { name.clone() } else { format!("{path}.{name}") };
        let child = fields.get(&attr.json_name).unwrap_or(&json::Value::Null);
        state.insert(name.clone(), attr.attr_type.to_state(child, &child_path)?);
    }
    Ok(json::Value::Object(state))
}

pub(super) fn object_from_state(
    attrs: &BTreeMap<String, Attribute>,
    state: &json::Value,
    path: &str,
) -> anyhow::Result<json::Value> {
    let fields = state.as_object().ok_or_else(|| mismatch(path, "object", state))?;
    let mut value = json::Map::new();
    for (name, attr) in attrs {
        let child_path = if path.is_empty() { name.clone() } else { format!("{path}.{name}") };
        match fields.get(name) {
            None | Some(json::Value::Null) => (),
            Some(child) => {
                value.insert(attr.json_name.clone(), attr.attr_type.from_state(child, &child_path)?);
            },
        }
    }
    Ok(json::Value::Object(value))
}

impl Schema {
    pub fn to_state(&self, value: &json::Value) -> anyhow::Result<json::Value> {
        object_to_state(&self.attributes, value, "")
    }

    pub fn from_state(&self, state: &json::Value) -> anyhow::Result<json::Value> {
        object_from_state(&self.attributes, state, "")
    }
}

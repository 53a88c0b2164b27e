//! URL prefixes and request payload shapes.
//!
//! # Design
//! Body schemas belong to the server, so payloads stay structural. Operations
//! that only ever send a mapping take a `JsonObject`; the auth operations that
//! also accept a batch of records take a `Payload`.

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// A JSON mapping from string keys to arbitrary values.
pub type JsonObject = serde_json::Map<String, Value>;

/// Backend namespace a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Admin,
    Auth,
}

impl Prefix {
    pub fn as_str(self) -> &'static str {
        match self {
            Prefix::Admin => "/admin",
            Prefix::Auth => "/auth",
        }
    }

    /// Append `path` verbatim. No slash normalization happens here: `"users"`
    /// yields `/adminusers`, and callers are expected to pass a leading `/`.
    pub fn join(self, path: &str) -> String {
        format!("{}{path}", self.as_str())
    }
}

/// Body for operations that accept either one mapping or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Object(JsonObject),
    List(Vec<JsonObject>),
}

impl Default for Payload {
    fn default() -> Self {
        Payload::Object(JsonObject::new())
    }
}

impl Payload {
    /// Encode each record and collect them into a `List`.
    ///
    /// Fails with `InvalidPayload` if a record is not a JSON object once
    /// encoded.
    pub fn from_records<T: Serialize>(records: &[T]) -> Result<Self, ApiError> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| match to_value(record)? {
                Value::Object(map) => Ok(map),
                other => Err(ApiError::InvalidPayload(format!(
                    "record {i} is {}, expected an object",
                    kind(&other)
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Payload::List)
    }

    /// Encode a single mapping or a sequence of mappings.
    pub fn from_value<T: Serialize + ?Sized>(value: &T) -> Result<Self, ApiError> {
        match to_value(value)? {
            Value::Object(map) => Ok(Payload::Object(map)),
            Value::Array(items) => Payload::from_records(&items),
            other => Err(ApiError::InvalidPayload(format!(
                "payload is {}, expected an object or array",
                kind(&other)
            ))),
        }
    }
}

impl From<JsonObject> for Payload {
    fn from(map: JsonObject) -> Self {
        Payload::Object(map)
    }
}

impl From<Vec<JsonObject>> for Payload {
    fn from(list: Vec<JsonObject>) -> Self {
        Payload::List(list)
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

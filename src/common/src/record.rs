use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::ENV_NAME_KEY;
use crate::errors::RegistryError;

/// A single entry of the environments table.
///
/// Only `envName` means anything to the registry; every other field is kept
/// exactly as the caller sent it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentRecord(Map<String, Value>);

impl EnvironmentRecord {
    /// Parses a request body into a record, requiring a usable `envName`.
    pub fn from_body(body: &str) -> Result<Self, RegistryError> {
        Self::from_slice(body.as_bytes())
    }

    /// Same as [`from_body`](Self::from_body) for bytes straight off the wire.
    /// Invalid UTF-8 is a malformed body, never replaced.
    pub fn from_slice(body: &[u8]) -> Result<Self, RegistryError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::try_from(value)
    }

    /// Wraps fields read back from storage. No validation happens here: the
    /// store only ever holds what `try_from` let through.
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn env_name(&self) -> Option<&str> {
        self.0
            .get(ENV_NAME_KEY)
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl TryFrom<Value> for EnvironmentRecord {
    type Error = RegistryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => {
                let record = Self(fields);
                if record.env_name().is_none() {
                    return Err(RegistryError::MissingKey);
                }
                Ok(record)
            }
            _ => Err(RegistryError::NotAnObject),
        }
    }
}

impl From<EnvironmentRecord> for Value {
    fn from(record: EnvironmentRecord) -> Self {
        Value::Object(record.0)
    }
}

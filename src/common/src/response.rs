use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON};
use crate::errors::RegistryError;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;

/// HTTP-shaped result of a registry operation.
///
/// Serializes as `{ statusCode, body, headers }` so it can be handed straight
/// back to an API-gateway style proxy integration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: String,
    pub headers: BTreeMap<String, String>,
}

impl ApiResponse {
    fn new(status_code: u16, payload: Value) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(
            CONTENT_TYPE_HEADER.to_string(),
            CONTENT_TYPE_JSON.to_string(),
        );

        Self {
            status_code,
            body: payload.to_string(),
            headers,
        }
    }

    pub fn ok(payload: Value) -> Self {
        Self::new(STATUS_OK, payload)
    }

    /// Success whose body is a JSON-encoded confirmation string.
    pub fn message(message: impl Into<String>) -> Self {
        Self::ok(Value::String(message.into()))
    }

    pub fn failure(error: &RegistryError) -> Self {
        Self::new(STATUS_BAD_REQUEST, Value::String(error.to_string()))
    }

    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_OK
    }

    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_body_is_json_encoded_string() {
        let response = ApiResponse::message("Put env prod");

        assert!(response.is_success());
        assert_eq!(response.body, r#""Put env prod""#);
        assert_eq!(response.json::<String>().unwrap(), "Put env prod");
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn failure_is_bad_request_with_message() {
        let response = ApiResponse::failure(&RegistryError::MissingKey);

        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.json::<String>().unwrap(),
            "Missing required key \"envName\""
        );
    }

    #[test]
    fn serializes_in_proxy_shape() {
        let response = ApiResponse::ok(json!({}));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "statusCode": 200,
                "body": "{}",
                "headers": {"Content-Type": "application/json"}
            })
        );
    }
}

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use envreg_common::constants::CONTENT_TYPE_JSON;
use envreg_common::{ApiResponse, RegistryError};
use serde_json::Value;
use std::time::Duration;

pub(crate) struct HttpResponse(pub ApiResponse);

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let ApiResponse {
            status_code,
            body,
            headers,
        } = self.0;

        let status =
            StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, body).into_response();

        for (name, value) in headers {
            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => tracing::warn!("Dropping invalid response header {}", name),
            }
        }

        response
    }
}

/// Extractor rejections answer like any other handled failure: `400` with a
/// JSON-encoded message.
pub(crate) fn rejection_response(operation: &str, reason: String) -> Response {
    let error = RegistryError::InvalidRequest(reason);
    tracing::warn!(operation, kind = error.kind(), "Request rejected: {}", error);
    HttpResponse(ApiResponse::failure(&error)).into_response()
}

pub(crate) fn timeout_response(operation: &str, window: Duration) -> Response {
    let message = Value::String(format!(
        "{} did not complete within {} ms",
        operation,
        window.as_millis()
    ));

    (
        StatusCode::GATEWAY_TIMEOUT,
        [(CONTENT_TYPE, CONTENT_TYPE_JSON)],
        message.to_string(),
    )
        .into_response()
}

use crate::response::HttpResponse;
use axum::http::{Method, Uri};
use axum::response::IntoResponse;
use envreg_common::{ApiResponse, RegistryError};

/// Answers any method/path pair outside the routing table.
pub async fn unsupported_route(method: Method, uri: Uri) -> impl IntoResponse {
    let error = RegistryError::UnsupportedRoute(format!("{} {}", method, uri.path()));
    tracing::warn!("{}", error);
    HttpResponse(ApiResponse::failure(&error))
}

use crate::response::{timeout_response, HttpResponse};
use axum::response::{IntoResponse, Response};
use envreg_common::ApiResponse;
use envreg_registry::{RegistryService, StoreEnum};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub(crate) struct ServerState {
    service: Arc<RegistryService<StoreEnum>>,
    request_timeout: Duration,
}

impl ServerState {
    pub fn new(service: Arc<RegistryService<StoreEnum>>, request_timeout: Duration) -> Self {
        Self {
            service,
            request_timeout,
        }
    }

    pub fn service(&self) -> &RegistryService<StoreEnum> {
        &self.service
    }

    /// Runs one operation inside the request's execution window. Running out
    /// of time fails this request only.
    pub async fn within_deadline(
        &self,
        operation: &str,
        call: impl Future<Output = ApiResponse>,
    ) -> Response {
        match tokio::time::timeout(self.request_timeout, call).await {
            Ok(response) => HttpResponse(response).into_response(),
            Err(_) => {
                tracing::error!(
                    "{} did not finish within {:?}",
                    operation,
                    self.request_timeout
                );
                timeout_response(operation, self.request_timeout)
            }
        }
    }
}

//! Dispatch for API-gateway style proxy events, where the gateway hands over
//! a route key instead of a raw HTTP request.

use crate::service::{respond, RegistryService};
use crate::store::EnvironmentStore;
use envreg_common::constants::{DELETE_ROUTE, ENV_NAME_KEY, GET_ROUTE, LIST_ROUTE, PUT_ROUTE};
use envreg_common::{ApiResponse, RegistryError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    pub route_key: String,
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

impl ProxyRequest {
    pub fn env_name(&self) -> &str {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(ENV_NAME_KEY))
            .map(String::as_str)
            .unwrap_or_default()
    }
}

impl<S: EnvironmentStore> RegistryService<S> {
    pub async fn handle_proxy(&self, request: &ProxyRequest) -> ApiResponse {
        tracing::debug!("Dispatching {}", request.route_key);

        match request.route_key.as_str() {
            LIST_ROUTE => self.list().await,
            GET_ROUTE => self.get(request.env_name()).await,
            PUT_ROUTE => {
                let body = request.body.as_deref().unwrap_or_default();
                self.upsert(body.as_bytes()).await
            }
            DELETE_ROUTE => self.delete(request.env_name()).await,
            other => respond(
                "dispatch",
                Err(RegistryError::UnsupportedRoute(other.to_string())),
            ),
        }
    }
}

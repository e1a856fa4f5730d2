use crate::response::rejection_response;
use crate::state::ServerState;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use envreg_common::constants::ENVIRONMENT_PATH;

pub const DELETE_ENDPOINT: &str = ENVIRONMENT_PATH;

pub async fn delete(
    State(state): State<ServerState>,
    env_name: Result<Path<String>, PathRejection>,
) -> Response {
    match env_name {
        Ok(Path(env_name)) => {
            state
                .within_deadline("delete", state.service().delete(&env_name))
                .await
        }
        Err(rejection) => rejection_response("delete", rejection.body_text()),
    }
}

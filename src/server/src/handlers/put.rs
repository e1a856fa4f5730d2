use crate::response::rejection_response;
use crate::state::ServerState;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::response::Response;
use envreg_common::constants::ENVIRONMENTS_PATH;

pub const PUT_ENDPOINT: &str = ENVIRONMENTS_PATH;

// raw bytes so that an unparseable body reaches the registry and gets its 400
pub async fn put(
    State(state): State<ServerState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    match body {
        Ok(body) => {
            state
                .within_deadline("upsert", state.service().upsert(&body))
                .await
        }
        Err(rejection) => rejection_response("upsert", rejection.body_text()),
    }
}

use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use envreg_common::constants::ENVIRONMENTS_PATH;

pub const LIST_ENDPOINT: &str = ENVIRONMENTS_PATH;

pub async fn list(State(state): State<ServerState>) -> impl IntoResponse {
    state.within_deadline("list", state.service().list()).await
}

use crate::handlers::delete::{delete, DELETE_ENDPOINT};
use crate::handlers::get::{get, GET_ENDPOINT};
use crate::handlers::list::{list, LIST_ENDPOINT};
use crate::handlers::put::{put, PUT_ENDPOINT};
use crate::state::ServerState;
use axum::routing::{self, MethodRouter};
use std::sync::LazyLock;

pub(super) static ROUTES: LazyLock<Vec<(&'static str, MethodRouter<ServerState>)>> =
    LazyLock::new(|| {
        vec![
            (LIST_ENDPOINT, routing::get(list)),
            (PUT_ENDPOINT, routing::put(put)),
            (GET_ENDPOINT, routing::get(get)),
            (DELETE_ENDPOINT, routing::delete(delete)),
        ]
    });

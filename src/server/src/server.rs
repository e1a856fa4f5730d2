use crate::handlers::fallback::unsupported_route;
use crate::routes::ROUTES;
use crate::state::ServerState;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method};
use axum::Router;
use envreg_registry::{RegistryService, StoreEnum};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PUT, Method::DELETE])
        .allow_headers([
            CONTENT_TYPE,
            HeaderName::from_static("x-amz-date"),
            AUTHORIZATION,
            HeaderName::from_static("x-api-key"),
        ])
}

fn get_router(state: ServerState) -> Router {
    let mut router = Router::new();
    for (path, method_router) in ROUTES.iter() {
        router = router.route(path, method_router.clone());
    }
    router
        .fallback(unsupported_route)
        .method_not_allowed_fallback(unsupported_route)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

pub struct RegistryServer {
    state: ServerState,
    listener: TcpListener,
    cancellation_token: CancellationToken,
}

impl RegistryServer {
    pub async fn bind(
        service: RegistryService<StoreEnum>,
        addr: SocketAddr,
        request_timeout: Duration,
    ) -> anyhow::Result<Self> {
        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) if e.kind() == io::ErrorKind::AddrInUse => {
                anyhow::bail!(
                    "Failed to start the registry: port {} is already in use.",
                    addr.port()
                );
            }
            Err(e) => anyhow::bail!("Failed to bind to address {}: {}", addr, e),
        };

        tracing::info!(
            "Registry bound to {} using the {} store",
            listener.local_addr()?,
            service.store().variant_name()
        );

        Ok(Self {
            state: ServerState::new(Arc::new(service), request_timeout),
            listener,
            cancellation_token: CancellationToken::new(),
        })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Cancelling the token stops accepting connections and lets in-flight
    /// requests finish before `run` returns.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation_token.clone()
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let token = self.cancellation_token.clone();
        axum::serve(self.listener, get_router(self.state))
            .with_graceful_shutdown(async move { token.cancelled().await })
            .await?;

        tracing::info!("Registry server stopped");
        Ok(())
    }
}

use envreg_registry::{InMemoryStore, RegistryService, StoreEnum};
use envreg_server::{RegistryClient, RegistryServer};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A registry on an ephemeral port, backed by the in-memory store.
pub struct Registry {
    pub addr: SocketAddr,
    pub client: RegistryClient,
    handle: JoinHandle<anyhow::Result<()>>,
    token: CancellationToken,
}

impl Registry {
    pub async fn start() -> Self {
        let service = RegistryService::new(StoreEnum::from(InMemoryStore::new()));
        let server = RegistryServer::bind(
            service,
            "127.0.0.1:0".parse().unwrap(),
            Duration::from_secs(30),
        )
        .await
        .expect("Failed to bind registry");

        let addr = server.local_addr().unwrap();
        let token = server.cancellation_token();
        let handle = tokio::spawn(server.run());

        Self {
            addr,
            client: RegistryClient::new(format!("http://{}", addr)),
            handle,
            token,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn stop(self) {
        self.token.cancel();
        self.handle
            .await
            .expect("server task panicked")
            .expect("server returned an error");
    }
}

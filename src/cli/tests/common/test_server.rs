use assert_cmd::assert::Assert;
use assert_cmd::Command;
use envreg_registry::{InMemoryStore, RegistryService, StoreEnum};
use envreg_server::RegistryServer;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub struct TestServer {
    handle: JoinHandle<anyhow::Result<()>>,
    addr: SocketAddr,
    token: CancellationToken,
}

impl TestServer {
    pub async fn launch() -> anyhow::Result<Self> {
        let addr: SocketAddr = "127.0.0.1:0".parse()?; // 0: means port will be picked by the OS
        let service = RegistryService::new(StoreEnum::from(InMemoryStore::new()));
        let server = RegistryServer::bind(service, addr, Duration::from_secs(30)).await?;

        let addr = server.local_addr()?;
        println!("server listening on {}", addr);

        let token = server.cancellation_token();
        let handle = tokio::task::spawn(server.run());

        Ok(Self {
            handle,
            addr,
            token,
        })
    }

    pub async fn send_command(&self, command: &[&str]) -> Assert {
        let mut cmd = Command::cargo_bin("envreg").unwrap();
        cmd.env("ENVREG_SERVER", self.addr.to_string());
        cmd.env("NO_COLOR", "1");
        cmd.env("RUST_BACKTRACE", "1");
        cmd.args(command);
        cmd.timeout(Duration::from_secs(30));

        tokio::task::spawn_blocking(move || cmd.assert())
            .await
            .unwrap()
    }

    pub async fn finished(self) -> anyhow::Result<()> {
        self.token.cancel();
        self.handle.await??;
        Ok(())
    }
}

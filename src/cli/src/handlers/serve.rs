use crate::config::{Config, StoreBackend};
use anyhow::{Context, Result};
use colored::Colorize;
use envreg_aws::DynamoDbClient;
use envreg_registry::{InMemoryStore, RegistryService, StoreEnum};
use envreg_server::RegistryServer;
use std::net::SocketAddr;
use std::time::Duration;

pub(crate) async fn build_store(config: &Config) -> Result<StoreEnum> {
    match config.store {
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory store: records are lost when the server stops");
            Ok(InMemoryStore::new().into())
        }
        StoreBackend::DynamoDb => {
            let client = DynamoDbClient::new(
                config.aws_init_type.clone(),
                &config.aws_region,
                &config.table_name,
                config.dynamodb_endpoint.as_deref(),
            )
            .await?;

            if config.bootstrap_table {
                let created = client
                    .ensure_table()
                    .await
                    .context("Failed to bootstrap the environments table")?;
                if created {
                    println!("Created table {}", client.table_name().cyan());
                }
            }

            Ok(client.into())
        }
    }
}

pub(crate) async fn serve(config: Config) -> Result<()> {
    let addr: SocketAddr = config
        .server
        .parse()
        .with_context(|| format!("Invalid server address '{}'", config.server))?;

    let store = build_store(&config).await?;
    let server = RegistryServer::bind(
        RegistryService::new(store),
        addr,
        Duration::from_millis(config.request_timeout_ms),
    )
    .await?;

    let token = server.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl-C, shutting down");
            token.cancel();
        }
    });

    println!(
        "{} listening on http://{}",
        "envreg".green().bold(),
        server.local_addr()?
    );
    server.run().await
}

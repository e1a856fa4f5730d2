use crate::commands::{Cli, Command};
use crate::config::{Config, ConfigLoader};
use crate::handlers::{records, serve};
use crate::logging::setup_logging;
use anyhow::Result;
use clap::Parser;
use envreg_server::RegistryClient;

pub fn process_cli() -> Result<()> {
    let cli = Cli::parse();
    // Use the --config flag, if provided, when loading the configuration
    let mut config = ConfigLoader::load_config(cli.config.as_deref())?;
    if let Some(server) = cli.server {
        config.server = server;
    }

    let runtime = tokio::runtime::Runtime::new()?;

    match cli.command {
        Command::Serve => {
            setup_logging(&config)?;
            runtime.block_on(serve::serve(config))
        }
        Command::Config => {
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        command => runtime.block_on(run_client_command(command, &config)),
    }
}

pub async fn run_client_command(command: Command, config: &Config) -> Result<()> {
    let client = RegistryClient::new(format!("http://{}", config.server));

    match command {
        Command::List { json } => records::list(&client, json).await,
        Command::Get { name } => records::get(&client, &name).await,
        Command::Put { record, file } => records::put(&client, record, file.as_deref()).await,
        Command::Delete { name } => records::delete(&client, &name).await,
        Command::Serve | Command::Config => {
            unreachable!("handled before a client is created")
        }
    }
}

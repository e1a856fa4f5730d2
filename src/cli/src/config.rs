use anyhow::{Context, Result};
use config::{Config as RConfig, Environment, File, FileFormat};
use envreg_aws::config::get_aws_default_profile;
use envreg_aws::AwsConfig;
use envreg_common::constants::{
    CONFIG_ENV_PREFIX, DEFAULT_AWS_REGION, DEFAULT_SERVER_PORT, REQUEST_TIMEOUT_MS, TABLE_NAME,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    DynamoDb,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub server: String,
    pub store: StoreBackend,
    pub table_name: String,

    pub aws_init_type: AwsConfig,
    pub aws_region: String,
    pub dynamodb_endpoint: Option<String>,
    pub bootstrap_table: bool,

    pub request_timeout_ms: u64,

    pub log_level: String,
    pub log_file: Option<String>,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the optional TOML file, then `ENVREG_*` variables.
    pub fn load_config(path: Option<&str>) -> Result<Config> {
        let mut builder = RConfig::builder()
            .set_default("server", format!("127.0.0.1:{}", DEFAULT_SERVER_PORT))?
            .set_default("store", "dynamodb")?
            .set_default("table_name", TABLE_NAME)?
            .set_default(
                "aws_init_type",
                AwsConfig::Profile(get_aws_default_profile()),
            )?
            .set_default("aws_region", DEFAULT_AWS_REGION)?
            .set_default("dynamodb_endpoint", None::<String>)?
            .set_default("bootstrap_table", false)?
            .set_default("request_timeout_ms", REQUEST_TIMEOUT_MS)?
            .set_default("log_level", "info")?
            .set_default("log_file", None::<String>)?;

        if let Some(path) = path {
            builder = builder.add_source(File::new(path, FileFormat::Toml).required(true));
        }

        builder = builder.add_source(Environment::with_prefix(CONFIG_ENV_PREFIX).try_parsing(true));

        builder
            .build()?
            .try_deserialize()
            .context("failed to parse config")
    }
}

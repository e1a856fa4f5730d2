use crate::attributes::{from_item, to_item};
use crate::config::{resolve_available_aws_config, AwsConfig};
use anyhow::{anyhow, Context, Result};
use aws_config::SdkConfig;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType,
    ScalarAttributeType, TableStatus,
};
use envreg_common::constants::ENV_NAME_KEY;
use envreg_common::EnvironmentRecord;
use std::time::Duration;

const TABLE_ACTIVE_POLL_ATTEMPTS: u32 = 30;
const TABLE_ACTIVE_POLL_DELAY: Duration = Duration::from_secs(2);

fn sdk_error(err: impl std::error::Error) -> anyhow::Error {
    anyhow!("{}", DisplayErrorContext(err))
}

/// Environments table backed by DynamoDB, keyed by `envName`.
pub struct DynamoDbClient {
    pub client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoDbClient {
    pub async fn new(
        initialization_conf: AwsConfig,
        region: &str,
        table_name: impl Into<String>,
        endpoint_url: Option<&str>,
    ) -> Result<Self> {
        let config = resolve_available_aws_config(initialization_conf, region)
            .await
            .context("No AWS credentials available for DynamoDB")?;

        Ok(Self::new_with_config(&config, table_name, endpoint_url))
    }

    pub fn new_with_config(
        config: &SdkConfig,
        table_name: impl Into<String>,
        endpoint_url: Option<&str>,
    ) -> Self {
        let mut builder = aws_sdk_dynamodb::config::Builder::from(config);
        if let Some(endpoint_url) = endpoint_url {
            tracing::debug!("Using DynamoDB endpoint override {}", endpoint_url);
            builder = builder.endpoint_url(endpoint_url);
        }

        Self {
            client: aws_sdk_dynamodb::Client::from_conf(builder.build()),
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Reads every item in the table. DynamoDB caps a single scan response,
    /// so the paginator is drained to return the complete set.
    pub async fn scan_all(&self) -> Result<Vec<EnvironmentRecord>> {
        let mut records = Vec::new();
        let mut pages = self
            .client
            .scan()
            .table_name(&self.table_name)
            .into_paginator()
            .send();

        while let Some(page) = pages.next().await {
            let page = page.map_err(sdk_error)?;
            for item in page.items.unwrap_or_default() {
                records.push(EnvironmentRecord::from_fields(from_item(item)?));
            }
        }

        tracing::debug!("Scanned {} items from {}", records.len(), self.table_name);
        Ok(records)
    }

    pub async fn get_item(&self, env_name: &str) -> Result<Option<EnvironmentRecord>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ENV_NAME_KEY, AttributeValue::S(env_name.to_string()))
            .send()
            .await
            .map_err(sdk_error)?;

        output
            .item
            .map(|item| from_item(item).map(EnvironmentRecord::from_fields))
            .transpose()
    }

    pub async fn put_item(&self, record: EnvironmentRecord) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(record.into_fields())))
            .send()
            .await
            .map_err(sdk_error)?;
        Ok(())
    }

    pub async fn delete_item(&self, env_name: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ENV_NAME_KEY, AttributeValue::S(env_name.to_string()))
            .send()
            .await
            .map_err(sdk_error)?;
        Ok(())
    }

    /// Creates the table with `envName` as its string partition key unless it
    /// already exists. Returns `true` when a table was created.
    pub async fn ensure_table(&self) -> Result<bool> {
        match self
            .client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
        {
            Ok(_) => {
                tracing::debug!("Table {} already exists", self.table_name);
                return Ok(false);
            }
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_resource_not_found_exception()) => {}
            Err(err) => return Err(sdk_error(err)),
        }

        tracing::info!("Creating table {}", self.table_name);
        self.client
            .create_table()
            .table_name(&self.table_name)
            .attribute_definitions(
                AttributeDefinition::builder()
                    .attribute_name(ENV_NAME_KEY)
                    .attribute_type(ScalarAttributeType::S)
                    .build()?,
            )
            .key_schema(
                KeySchemaElement::builder()
                    .attribute_name(ENV_NAME_KEY)
                    .key_type(KeyType::Hash)
                    .build()?,
            )
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .map_err(sdk_error)?;

        self.wait_until_active().await?;
        Ok(true)
    }

    async fn wait_until_active(&self) -> Result<()> {
        for attempt in 1..=TABLE_ACTIVE_POLL_ATTEMPTS {
            let status = self
                .client
                .describe_table()
                .table_name(&self.table_name)
                .send()
                .await
                .map_err(sdk_error)?
                .table
                .and_then(|table| table.table_status);

            if status == Some(TableStatus::Active) {
                tracing::info!("Table {} is active", self.table_name);
                return Ok(());
            }

            tracing::debug!(
                "Waiting for table {} to become active (attempt {}/{})",
                self.table_name,
                attempt,
                TABLE_ACTIVE_POLL_ATTEMPTS
            );
            tokio::time::sleep(TABLE_ACTIVE_POLL_DELAY).await;
        }

        anyhow::bail!(
            "Table {} did not become active after {} attempts",
            self.table_name,
            TABLE_ACTIVE_POLL_ATTEMPTS
        )
    }
}

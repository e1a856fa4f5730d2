use super::EnvironmentStore;
use anyhow::Result;
use envreg_aws::DynamoDbClient;
use envreg_common::EnvironmentRecord;

impl EnvironmentStore for DynamoDbClient {
    async fn list(&self) -> Result<Vec<EnvironmentRecord>> {
        self.scan_all().await
    }

    async fn get_by_key(&self, env_name: &str) -> Result<Option<EnvironmentRecord>> {
        self.get_item(env_name).await
    }

    async fn put(&self, record: EnvironmentRecord) -> Result<()> {
        self.put_item(record).await
    }

    async fn delete_by_key(&self, env_name: &str) -> Result<()> {
        self.delete_item(env_name).await
    }
}

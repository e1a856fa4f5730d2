use super::{EnvironmentStore, InMemoryStore};
use anyhow::Result;
use envreg_aws::DynamoDbClient;
use envreg_common::EnvironmentRecord;

pub enum StoreEnum {
    DynamoDb(DynamoDbClient),
    InMemory(InMemoryStore),
}

impl EnvironmentStore for StoreEnum {
    async fn list(&self) -> Result<Vec<EnvironmentRecord>> {
        match self {
            StoreEnum::DynamoDb(client) => client.list().await,
            StoreEnum::InMemory(store) => store.list().await,
        }
    }

    async fn get_by_key(&self, env_name: &str) -> Result<Option<EnvironmentRecord>> {
        match self {
            StoreEnum::DynamoDb(client) => client.get_by_key(env_name).await,
            StoreEnum::InMemory(store) => store.get_by_key(env_name).await,
        }
    }

    async fn put(&self, record: EnvironmentRecord) -> Result<()> {
        match self {
            StoreEnum::DynamoDb(client) => client.put(record).await,
            StoreEnum::InMemory(store) => store.put(record).await,
        }
    }

    async fn delete_by_key(&self, env_name: &str) -> Result<()> {
        match self {
            StoreEnum::DynamoDb(client) => client.delete_by_key(env_name).await,
            StoreEnum::InMemory(store) => store.delete_by_key(env_name).await,
        }
    }
}

impl StoreEnum {
    pub fn variant_name(&self) -> &'static str {
        match self {
            StoreEnum::DynamoDb(_) => "DynamoDb",
            StoreEnum::InMemory(_) => "InMemory",
        }
    }
}

impl From<InMemoryStore> for StoreEnum {
    fn from(store: InMemoryStore) -> Self {
        StoreEnum::InMemory(store)
    }
}

impl From<DynamoDbClient> for StoreEnum {
    fn from(client: DynamoDbClient) -> Self {
        StoreEnum::DynamoDb(client)
    }
}

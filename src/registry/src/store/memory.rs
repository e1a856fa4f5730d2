use super::EnvironmentStore;
use anyhow::{Context, Result};
use envreg_common::EnvironmentRecord;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local table. Used by tests and by `store = "memory"`.
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<String, EnvironmentRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl EnvironmentStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<EnvironmentRecord>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn get_by_key(&self, env_name: &str) -> Result<Option<EnvironmentRecord>> {
        Ok(self.records.read().await.get(env_name).cloned())
    }

    async fn put(&self, record: EnvironmentRecord) -> Result<()> {
        let env_name = record
            .env_name()
            .context("Record has no envName to store it under")?
            .to_string();
        self.records.write().await.insert(env_name, record);
        Ok(())
    }

    async fn delete_by_key(&self, env_name: &str) -> Result<()> {
        self.records.write().await.remove(env_name);
        Ok(())
    }
}

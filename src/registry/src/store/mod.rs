mod dynamodb;
mod memory;
mod store_enum;

pub use memory::InMemoryStore;
pub use store_enum::StoreEnum;

use anyhow::Result;
use envreg_common::EnvironmentRecord;

/// The key-value table the registry reads and writes.
///
/// Each method is one storage call. Implementations own their consistency:
/// a `put` must be visible to the next `get_by_key` on the same key, and
/// concurrent writers to one key resolve as last write wins.
#[allow(async_fn_in_trait)]
pub trait EnvironmentStore {
    async fn list(&self) -> Result<Vec<EnvironmentRecord>>;

    async fn get_by_key(&self, env_name: &str) -> Result<Option<EnvironmentRecord>>;

    /// Creates the record or fully replaces the one stored under its name.
    async fn put(&self, record: EnvironmentRecord) -> Result<()>;

    /// Removing a name that is not stored is not an error.
    async fn delete_by_key(&self, env_name: &str) -> Result<()>;
}

use crate::store::EnvironmentStore;
use envreg_common::{ApiResponse, EnvironmentRecord, RegistryError};
use serde_json::{Map, Value};

/// The four registry operations over an injected store.
///
/// Every call maps to exactly one store call and always produces a response:
/// failures come back as `400` with the error message, never as an `Err`.
pub struct RegistryService<S> {
    store: S,
}

impl<S: EnvironmentStore> RegistryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn list(&self) -> ApiResponse {
        respond("list", self.try_list().await)
    }

    /// A name with no record behind it answers `200` with `{}`.
    pub async fn get(&self, env_name: &str) -> ApiResponse {
        respond("get", self.try_get(env_name).await)
    }

    /// `body` is taken as raw bytes: it must be UTF-8 JSON or it is rejected.
    pub async fn upsert(&self, body: impl AsRef<[u8]>) -> ApiResponse {
        respond("upsert", self.try_upsert(body.as_ref()).await)
    }

    /// Deleting a name that is not stored still succeeds.
    pub async fn delete(&self, env_name: &str) -> ApiResponse {
        respond("delete", self.try_delete(env_name).await)
    }

    async fn try_list(&self) -> Result<ApiResponse, RegistryError> {
        let records = self.store.list().await?;
        tracing::debug!("Listing {} environments", records.len());

        Ok(ApiResponse::ok(Value::Array(
            records.into_iter().map(Value::from).collect(),
        )))
    }

    async fn try_get(&self, env_name: &str) -> Result<ApiResponse, RegistryError> {
        let env_name = require_key(env_name)?;
        let payload = match self.store.get_by_key(env_name).await? {
            Some(record) => Value::from(record),
            None => {
                tracing::debug!("No environment named {}", env_name);
                Value::Object(Map::new())
            }
        };

        Ok(ApiResponse::ok(payload))
    }

    async fn try_upsert(&self, body: &[u8]) -> Result<ApiResponse, RegistryError> {
        let record = EnvironmentRecord::from_slice(body)?;
        let env_name = record.env_name().ok_or(RegistryError::MissingKey)?.to_string();

        self.store.put(record).await?;
        Ok(ApiResponse::message(format!("Put env {}", env_name)))
    }

    async fn try_delete(&self, env_name: &str) -> Result<ApiResponse, RegistryError> {
        let env_name = require_key(env_name)?;

        self.store.delete_by_key(env_name).await?;
        Ok(ApiResponse::message(format!("Deleted env {}", env_name)))
    }
}

fn require_key(env_name: &str) -> Result<&str, RegistryError> {
    if env_name.is_empty() {
        return Err(RegistryError::MissingKey);
    }
    Ok(env_name)
}

pub(crate) fn respond(
    operation: &str,
    result: Result<ApiResponse, RegistryError>,
) -> ApiResponse {
    match result {
        Ok(response) => {
            tracing::debug!(operation, "Operation succeeded");
            response
        }
        Err(err) => {
            tracing::warn!(operation, kind = err.kind(), "Operation failed: {}", err);
            ApiResponse::failure(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use anyhow::anyhow;
    use rstest::rstest;
    use serde_json::json;
    use std::sync::Arc;

    /// Store whose every call fails the way an unreachable table would.
    struct FailingStore;

    impl EnvironmentStore for FailingStore {
        async fn list(&self) -> anyhow::Result<Vec<EnvironmentRecord>> {
            Err(anyhow!("connection refused"))
        }

        async fn get_by_key(&self, _: &str) -> anyhow::Result<Option<EnvironmentRecord>> {
            Err(anyhow!("connection refused"))
        }

        async fn put(&self, _: EnvironmentRecord) -> anyhow::Result<()> {
            Err(anyhow!("AccessDeniedException"))
        }

        async fn delete_by_key(&self, _: &str) -> anyhow::Result<()> {
            Err(anyhow!("ThrottlingException"))
        }
    }

    fn service() -> RegistryService<InMemoryStore> {
        RegistryService::new(InMemoryStore::new())
    }

    #[tokio::test]
    async fn prod_lifecycle() {
        let service = service();

        let put = service
            .upsert(r#"{"envName":"prod","region":"us-east-1"}"#)
            .await;
        assert_eq!(put.status_code, 200);
        assert!(put.json::<String>().unwrap().contains("prod"));

        let get = service.get("prod").await;
        assert_eq!(get.status_code, 200);
        assert_eq!(
            get.json::<Value>().unwrap(),
            json!({"envName": "prod", "region": "us-east-1"})
        );

        let delete = service.delete("prod").await;
        assert_eq!(delete.status_code, 200);
        assert_eq!(delete.json::<String>().unwrap(), "Deleted env prod");

        let gone = service.get("prod").await;
        assert_eq!(gone.status_code, 200);
        assert_eq!(gone.json::<Value>().unwrap(), json!({}));
    }

    #[tokio::test]
    async fn record_round_trips_unchanged() {
        let service = service();
        let record = json!({
            "envName": "staging",
            "replicas": 2,
            "tags": ["blue", "green"],
            "limits": {"cpu": 1.5, "memory": null}
        });

        let put = service.upsert(&record.to_string()).await;
        assert_eq!(put.json::<String>().unwrap(), "Put env staging");
        assert_eq!(service.get("staging").await.json::<Value>().unwrap(), record);
    }

    #[tokio::test]
    async fn upsert_replaces_without_merging() {
        let service = service();
        service
            .upsert(r#"{"envName":"dev","region":"eu-west-1","debug":true}"#)
            .await;
        service.upsert(r#"{"envName":"dev","region":"us-west-2"}"#).await;

        assert_eq!(
            service.get("dev").await.json::<Value>().unwrap(),
            json!({"envName": "dev", "region": "us-west-2"})
        );
    }

    #[tokio::test]
    async fn list_contains_every_record() {
        let service = service();
        service.upsert(r#"{"envName":"a","n":1}"#).await;
        service.upsert(r#"{"envName":"b","n":2}"#).await;

        let response = service.list().await;
        assert!(response.is_success());

        let records = response.json::<Vec<Value>>().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.contains(&json!({"envName": "a", "n": 1})));
        assert!(records.contains(&json!({"envName": "b", "n": 2})));
    }

    #[tokio::test]
    async fn list_of_empty_table_is_empty_array() {
        assert_eq!(service().list().await.body, "[]");
    }

    #[rstest]
    #[case::not_json("envName=prod")]
    #[case::empty_body("")]
    #[case::array(r#"[{"envName":"prod"}]"#)]
    #[case::no_name(r#"{"region":"us-east-1"}"#)]
    #[case::blank_name(r#"{"envName":""}"#)]
    #[tokio::test]
    async fn rejected_upsert_writes_nothing(#[case] body: &str) {
        let service = service();

        let response = service.upsert(body).await;
        assert_eq!(response.status_code, 400);
        assert!(service.store().is_empty().await);
    }

    #[tokio::test]
    async fn invalid_utf8_body_writes_nothing() {
        let service = service();

        let response = service
            .upsert(b"{\"envName\":\"prod\",\"note\":\"\xFF\"}".as_slice())
            .await;
        assert_eq!(response.status_code, 400);
        assert!(service.store().is_empty().await);
    }

    #[tokio::test]
    async fn missing_name_is_reported() {
        let response = service().upsert(r#"{"region":"us-east-1"}"#).await;
        assert_eq!(
            response.json::<String>().unwrap(),
            "Missing required key \"envName\""
        );
    }

    #[tokio::test]
    async fn delete_of_unknown_name_is_idempotent() {
        let service = service();

        let first = service.delete("ghost").await;
        let second = service.delete("ghost").await;
        assert_eq!(first, second);
        assert_eq!(first.status_code, 200);
        assert_eq!(first.json::<String>().unwrap(), "Deleted env ghost");
    }

    #[tokio::test]
    async fn empty_path_key_is_rejected() {
        let service = service();
        assert_eq!(service.get("").await.status_code, 400);
        assert_eq!(service.delete("").await.status_code, 400);
    }

    #[tokio::test]
    async fn storage_failures_become_bad_requests() {
        let service = RegistryService::new(FailingStore);

        let list = service.list().await;
        assert_eq!(list.status_code, 400);
        assert_eq!(list.json::<String>().unwrap(), "connection refused");

        assert_eq!(service.get("prod").await.status_code, 400);

        let put = service.upsert(r#"{"envName":"prod"}"#).await;
        assert_eq!(put.status_code, 400);
        assert_eq!(put.json::<String>().unwrap(), "AccessDeniedException");

        let delete = service.delete("prod").await;
        assert_eq!(delete.json::<String>().unwrap(), "ThrottlingException");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_upsert_and_delete_leave_no_corruption() {
        let service = Arc::new(service());
        let candidate = json!({"envName": "race", "region": "us-east-1", "size": 3});

        let mut tasks = Vec::new();
        for i in 0..50 {
            let service = service.clone();
            let body = candidate.to_string();
            tasks.push(tokio::spawn(async move {
                if i % 2 == 0 {
                    service.upsert(&body).await
                } else {
                    service.delete("race").await
                }
            }));
        }

        for response in futures_util::future::join_all(tasks).await {
            assert!(response.unwrap().is_success());
        }

        let state = service.get("race").await.json::<Value>().unwrap();
        assert!(state == json!({}) || state == candidate, "corrupted: {}", state);
    }
}

use anyhow::{anyhow, bail, Result};
use envreg_common::constants::ENVIRONMENTS_PATH;
use envreg_common::EnvironmentRecord;
use reqwest::{RequestBuilder, Url};
use serde_json::Value;

/// HTTP client for a running registry.
pub struct RegistryClient {
    base_uri: String,
    pub client: reqwest::Client,
}

impl RegistryClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_uri: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn get_url(&self, path: &str) -> String {
        format!("{}{}", self.base_uri, path)
    }

    fn environment_url(&self, env_name: &str) -> Result<Url> {
        let mut url = Url::parse(&self.get_url(ENVIRONMENTS_PATH))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("{} cannot be used as a base URL", self.base_uri))?
            .push(env_name);
        Ok(url)
    }

    /// Sends the request and returns the body of a `200`. Anything else is an
    /// error carrying the registry's decoded message.
    async fn send(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        let message = serde_json::from_str::<String>(&body).unwrap_or(body);
        bail!("Registry answered {}: {}", status, message)
    }

    pub async fn list(&self) -> Result<Vec<EnvironmentRecord>> {
        let body = self
            .send(self.client.get(self.get_url(ENVIRONMENTS_PATH)))
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `None` when the registry has nothing stored under `env_name`.
    pub async fn get(&self, env_name: &str) -> Result<Option<EnvironmentRecord>> {
        let body = self
            .send(self.client.get(self.environment_url(env_name)?))
            .await?;

        match serde_json::from_str::<Value>(&body)? {
            Value::Object(fields) if fields.is_empty() => Ok(None),
            Value::Object(fields) => Ok(Some(EnvironmentRecord::from_fields(fields))),
            other => bail!("Expected a JSON object, got {}", other),
        }
    }

    pub async fn put(&self, record: &EnvironmentRecord) -> Result<String> {
        self.put_raw(serde_json::to_string(record)?).await
    }

    /// Sends `body` untouched, for callers holding JSON text.
    pub async fn put_raw(&self, body: String) -> Result<String> {
        let body = self
            .send(
                self.client
                    .put(self.get_url(ENVIRONMENTS_PATH))
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .body(body),
            )
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn delete(&self, env_name: &str) -> Result<String> {
        let body = self
            .send(self.client.delete(self.environment_url(env_name)?))
            .await?;
        Ok(serde_json::from_str(&body)?)
    }
}

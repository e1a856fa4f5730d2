use thiserror::Error;

/// Failures an operation can report back to the caller.
///
/// Every variant is a handled failure: the registry turns it into a `400`
/// response instead of letting it escape the request.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The body is not JSON at all.
    #[error("{0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The body is JSON, but not an object that could become a record.
    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Missing required key \"envName\"")]
    MissingKey,

    /// The HTTP layer could not extract the request, e.g. a path segment
    /// that is not UTF-8 or a body over the size limit.
    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),

    #[error("Unsupported route: \"{0}\"")]
    UnsupportedRoute(String),
}

impl RegistryError {
    pub fn kind(&self) -> &'static str {
        match self {
            RegistryError::MalformedBody(_)
            | RegistryError::NotAnObject
            | RegistryError::InvalidRequest(_) => "malformed-input",
            RegistryError::MissingKey => "missing-key",
            RegistryError::Storage(_) => "storage-failure",
            RegistryError::UnsupportedRoute(_) => "unsupported-route",
        }
    }
}

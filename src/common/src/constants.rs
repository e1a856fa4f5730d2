pub const TABLE_NAME: &str = "environments";
pub const ENV_NAME_KEY: &str = "envName";

pub const ENVIRONMENTS_PATH: &str = "/environments";
pub const ENVIRONMENT_PATH: &str = "/environments/{envName}";

pub const LIST_ROUTE: &str = "GET /environments";
pub const GET_ROUTE: &str = "GET /environments/{envName}";
pub const PUT_ROUTE: &str = "PUT /environments";
pub const DELETE_ROUTE: &str = "DELETE /environments/{envName}";

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const DEFAULT_AWS_REGION: &str = "us-east-1";
// matches the execution window the handlers were originally deployed with
pub const REQUEST_TIMEOUT_MS: u64 = 300_000;

pub const CONFIG_ENV_PREFIX: &str = "ENVREG";

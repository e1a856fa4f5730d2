pub mod constants;
pub mod errors;
pub mod record;
pub mod response;

pub use errors::RegistryError;
pub use record::EnvironmentRecord;
pub use response::ApiResponse;

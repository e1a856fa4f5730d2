pub mod proxy;
pub mod service;
pub mod store;

pub use proxy::ProxyRequest;
pub use service::RegistryService;
pub use store::{EnvironmentStore, InMemoryStore, StoreEnum};

pub mod client;
mod handlers;
mod response;
mod routes;
pub mod server;
mod state;

pub use client::RegistryClient;
pub use server::RegistryServer;

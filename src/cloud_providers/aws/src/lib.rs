pub mod attributes;
pub mod config;
pub mod dynamodb;

pub use config::AwsConfig;
pub use dynamodb::DynamoDbClient;

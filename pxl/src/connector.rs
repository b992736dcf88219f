pub mod arn;
pub mod config;
pub mod debezium_postgres;
pub mod description;
pub mod state;
pub mod version;

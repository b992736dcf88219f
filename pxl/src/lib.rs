pub mod client;
pub mod connector;
pub mod error;
pub mod event;
pub mod handler;
pub mod settings;
pub mod updater;
pub mod yaml;

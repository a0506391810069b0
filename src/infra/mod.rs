pub mod app;
pub mod config;
pub mod error;
pub mod http_client;
pub mod livekit;
pub mod setup;

pub use error::InfraError;

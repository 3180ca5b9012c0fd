pub mod api;
pub mod api_doc;
pub mod config;
pub mod server;

pub use config::{Config, ConfigError};
pub use server::{build_app, run_server, AppState};

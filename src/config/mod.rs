/// HTTP listener configuration from config.toml and environment variables
pub mod server;

pub use server::{ServerConfig, load_config, load_server_config};

pub mod app_config;
pub mod cli;

pub use app_config::{AppConfig, normalize_url};
pub use cli::{Cli, EXAMPLE_USAGE};

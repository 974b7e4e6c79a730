pub mod config;

pub use config::{get_endpoint, load_config, save_config, Config};

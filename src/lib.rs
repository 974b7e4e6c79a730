// Module declarations
pub mod cascade;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod resource;

// Re-export commonly used items
pub use cascade::{CascadeController, SelectOption};
pub use client::CatalogClient;
pub use config::{get_endpoint, load_config, save_config, Config};
pub use error::{VoyageError, VoyageResult};
pub use models::*;
pub use resource::{AsyncResource, ResourceAction, Status};

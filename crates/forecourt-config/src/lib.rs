//! forecourt-config
//!
//! User configuration for the dealer desk: data locations, the default lot,
//! and display preferences. JSON persisted, independent of the domain crates.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{default_base_dir, Config, HOME_ENV_VAR};

//! Configuration file handling.

mod service;
mod types;
mod validation;

pub use service::{
    config_dir, default_config_path, init_config, load_config_from,
    resolve_config_path, save_config_to,
};
pub use types::AppConfig;
pub use validation::{ValidationWarning, validate_config};

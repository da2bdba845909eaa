//! File-system side of the generator.

pub mod config;
pub mod output;

pub use config::{load_config, ConfigError, GenConfig};
pub use output::{output_path, write_generated};

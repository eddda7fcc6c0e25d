pub mod boundary;
pub mod config;
pub mod error;
pub mod expand;
pub mod matcher;
pub mod models;
pub mod pattern;
pub mod render;
pub mod shell;
pub mod token;

// Re-export common items for convenience
pub use config::{config_file_path, get_config_dir, load_config, load_config_from, Config};
pub use error::{BrevError, Result};
pub use expand::{ExpandRequest, ExpandResult, Expander};
pub use models::{AbbrOptions, Abbreviation, Position};
pub use pattern::PatternCache;
pub use shell::{ShellExecutor, SystemShell};

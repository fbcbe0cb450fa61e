// Modules --------------------------------------------------------------------
mod config;
mod reader;


// Internal Dependencies ------------------------------------------------------
pub use self::config::{ConfigError, OutputConfig, ProjectConfig, CONFIG_FILE};
pub use self::reader::ProjectReader;

// STD Dependencies -----------------------------------------------------------
use std::fmt;
use std::path::{Path, PathBuf};


// External Dependencies ------------------------------------------------------
use serde::Deserialize;
use file_io::{FileReader, Logger};
use smsgfx::{Options, OutputFormat};


// Constants ------------------------------------------------------------------
pub const CONFIG_FILE: &str = "smstiles.toml";


// Configuration Errors -------------------------------------------------------
#[derive(Debug)]
pub struct ConfigError {
    pub path: PathBuf,
    pub message: String
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Failed to load configuration file \"{}\": {}", self.path.display(), self.message)
    }
}

impl std::error::Error for ConfigError {}


// Tile Converter Configuration -----------------------------------------------
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(skip)]
    pub path: Option<PathBuf>
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub colors: Option<bool>
}

impl ProjectConfig {

    pub fn parse(path: &Path, text: &str) -> Result<ProjectConfig, ConfigError> {
        let mut config = toml::from_str::<ProjectConfig>(text).map_err(|err| ConfigError {
            path: path.to_path_buf(),
            message: err.to_string()
        })?;
        config.path = Some(path.to_path_buf());
        config.format()?;
        Ok(config)
    }

    /// Loads an explicitly named configuration file.
    pub fn load<R: FileReader>(logger: &mut Logger, reader: &R, path: &Path) -> Result<ProjectConfig, ConfigError> {
        let (path, text) = reader.read_file(path).map_err(|err| ConfigError {
            path: err.path,
            message: err.io.to_string()
        })?;
        let config = Self::parse(&path, &text)?;
        logger.info(format!("Loaded configuration from {}", path.display()));
        Ok(config)
    }

    /// Looks for a configuration file in the reader's base directory and its
    /// parents, falling back to the defaults when there is none.
    pub fn discover<R: FileReader>(logger: &mut Logger, reader: &R) -> Result<ProjectConfig, ConfigError> {
        let mut dir = Some(reader.base_dir());
        while let Some(current) = dir {
            let config_file = current.join(CONFIG_FILE);
            if config_file.is_file() {
                return Self::load(logger, reader, &config_file);
            }
            dir = current.parent();
        }
        Ok(ProjectConfig::default())
    }

    fn format(&self) -> Result<Option<OutputFormat>, ConfigError> {
        self.output.format.as_deref().map(str::parse).transpose().map_err(|message| ConfigError {
            path: self.path.clone().unwrap_or_default(),
            message
        })
    }

    /// Merges command line flags over the configured values.
    pub fn options(&self, format: Option<OutputFormat>, colors: Option<bool>) -> Result<Options, ConfigError> {
        let defaults = Options::default();
        Ok(Options {
            format: format.or(self.format()?).unwrap_or(defaults.format),
            colors: colors.or(self.output.colors).unwrap_or(defaults.colors)
        })
    }

}


// Tests ----------------------------------------------------------------------
#[cfg(test)]
mod test {

    use std::path::Path;
    use smsgfx::{Options, OutputFormat};
    use super::ProjectConfig;

    fn parse(text: &str) -> ProjectConfig {
        ProjectConfig::parse(Path::new("smstiles.toml"), text).expect("Config failed to parse")
    }

    #[test]
    fn test_defaults() {
        let config = parse("");
        assert_eq!(config.options(None, None).unwrap(), Options::default());
        assert_eq!(config.options(None, None).unwrap(), Options {
            format: OutputFormat::Asm,
            colors: true
        });
    }

    #[test]
    fn test_config_values() {
        let config = parse("[output]\nformat = \"c\"\ncolors = false\n");
        assert_eq!(config.options(None, None).unwrap(), Options {
            format: OutputFormat::C,
            colors: false
        });
    }

    #[test]
    fn test_flags_override_config() {
        let config = parse("[output]\nformat = \"c\"\ncolors = false\n");
        assert_eq!(config.options(Some(OutputFormat::Asm), Some(true)).unwrap(), Options {
            format: OutputFormat::Asm,
            colors: true
        });
        assert_eq!(config.options(None, Some(true)).unwrap(), Options {
            format: OutputFormat::C,
            colors: true
        });
    }

    #[test]
    fn test_invalid_format() {
        let err = ProjectConfig::parse(Path::new("smstiles.toml"), "[output]\nformat = \"bin\"\n").unwrap_err();
        assert_eq!(err.path, Path::new("smstiles.toml"));
        assert!(err.message.contains("bin"));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(ProjectConfig::parse(Path::new("smstiles.toml"), "[output\n").is_err());
        assert!(ProjectConfig::parse(Path::new("smstiles.toml"), "[output]\ncolours = true\n").is_err());
        assert!(ProjectConfig::parse(Path::new("smstiles.toml"), "[output]\ncolors = \"yes\"\n").is_err());
    }

}

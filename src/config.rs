use crate::game::Cell;
use crate::options::{AuraSpec, Options, OptionsError};
use log::LevelFilter;
use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings read from the TOML configuration file
#[derive(Clone, Deserialize, Debug, PartialEq)]
#[serde(try_from = "RawConfig")]
pub(crate) struct Config {
    /// Gameplay options
    pub(crate) options: Options,

    /// File to write log messages to.  If unset, a default location is used.
    pub(crate) log_file: Option<PathBuf>,

    /// Most verbose level of log messages to write
    pub(crate) log_level: LevelFilter,
}

impl Config {
    /// Return the path at which the configuration file is looked for when
    /// none is given on the command line
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Return the default log file path, if one can be determined
    pub(crate) fn default_log_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("gridsnake").join("gridsnake.log"))
    }

    /// Parse the TOML file at `path`.  A nonexistent file yields the default
    /// settings when `allow_missing` is true.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file cannot be read, is not valid TOML, or holds
    /// out-of-range settings.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        match fs_err::read_to_string(path) {
            Ok(src) => Ok(toml::from_str(&src)?),
            Err(e) if allow_missing && e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Config::default())
            }
            Err(e) => Err(ConfigError::Read(e)),
        }
    }

    /// Return the file that logs should be written to: the configured one,
    /// or else the default
    pub(crate) fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(Config::default_log_path)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            options: Options::default(),
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct RawConfig {
    speed: Option<u32>,
    board_length: Option<u16>,
    origin: Option<(i32, i32)>,
    auras: Option<[RawAura; 2]>,
    log_file: Option<PathBuf>,
    log_level: Option<String>,
}

#[derive(Clone, Copy, Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
struct RawAura {
    max: f64,
    opacity: f64,
}

impl TryFrom<RawConfig> for Config {
    type Error = InvalidConfig;

    fn try_from(value: RawConfig) -> Result<Config, InvalidConfig> {
        let mut options = Options::default();
        if let Some(speed) = value.speed {
            options.speed = NonZeroU32::new(speed).ok_or(OptionsError::Speed)?;
        }
        if let Some(board_length) = value.board_length {
            options.board_length = board_length;
        }
        if let Some(origin) = value.origin {
            options.origin = Cell::from(origin);
        }
        if let Some([a, b]) = value.auras {
            options.auras = [
                AuraSpec::new(a.max, a.opacity)?,
                AuraSpec::new(b.max, b.opacity)?,
            ];
        }
        let log_level = match value.log_level {
            Some(s) => s.parse::<LevelFilter>().map_err(|_| InvalidConfig::LogLevel(s))?,
            None => LevelFilter::Info,
        };
        Ok(Config {
            options: options.validate()?,
            log_file: value.log_file,
            log_level,
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum InvalidConfig {
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error("invalid log level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("could not locate a configuration directory for this user")]
    NoPath,
    #[error("configuration file could not be read")]
    Read(#[from] std::io::Error),
    #[error("configuration file is malformed")]
    Parse(#[from] toml::de::Error),
}

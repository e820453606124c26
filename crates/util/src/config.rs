//! Resolved startup configuration for the dashboard shell.
//!
//! The CLI parses flags (with environment fallbacks) and hands the raw values
//! to [`ShellConfig::resolve`], which applies defaults and validates ranges.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use safra_types::ThemeMode;
use thiserror::Error;
use tracing::debug;

use crate::paths::{default_log_path, expand_tilde};

/// Terminal width, in columns, at or above which the desktop layout is used.
pub const DEFAULT_BREAKPOINT: u16 = 100;

/// Narrowest accepted breakpoint. The collapsed desktop sidebar plus the
/// content area do not fit below this.
pub const MIN_BREAKPOINT: u16 = 40;

pub const MAX_BREAKPOINT: u16 = 400;

/// Interval between ticker advances.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("breakpoint {value} is outside {MIN_BREAKPOINT}..={MAX_BREAKPOINT} columns")]
    BreakpointOutOfRange { value: u16 },
    #[error("fixtures file {0} does not exist")]
    MissingFixtures(PathBuf),
    #[error("cannot create log directory {path}: {source}")]
    LogDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Raw values as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigInputs {
    pub theme: Option<ThemeMode>,
    pub breakpoint: Option<u16>,
    pub fixtures: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub theme: ThemeMode,
    pub breakpoint: u16,
    pub fixtures: Option<PathBuf>,
    pub log_file: PathBuf,
    pub tick_interval: Duration,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            breakpoint: DEFAULT_BREAKPOINT,
            fixtures: None,
            log_file: default_log_path(),
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl ShellConfig {
    /// Applies defaults to `inputs` and validates the result.
    pub fn resolve(inputs: ConfigInputs) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let breakpoint = inputs.breakpoint.unwrap_or(defaults.breakpoint);
        if !(MIN_BREAKPOINT..=MAX_BREAKPOINT).contains(&breakpoint) {
            return Err(ConfigError::BreakpointOutOfRange { value: breakpoint });
        }

        let fixtures = inputs.fixtures.as_deref().map(expand_tilde);
        if let Some(path) = &fixtures
            && !path.is_file()
        {
            return Err(ConfigError::MissingFixtures(path.clone()));
        }

        let config = Self {
            theme: inputs.theme.unwrap_or(defaults.theme),
            breakpoint,
            fixtures,
            log_file: inputs.log_file.as_deref().map(expand_tilde).unwrap_or(defaults.log_file),
            tick_interval: defaults.tick_interval,
        };
        debug!(theme = %config.theme, breakpoint = config.breakpoint, "resolved shell config");
        Ok(config)
    }

    /// Creates the parent directory of the log file if needed.
    pub fn ensure_log_dir(&self) -> Result<&Path, ConfigError> {
        if let Some(parent) = self.log_file.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| ConfigError::LogDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(&self.log_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_use_defaults() {
        let config = ShellConfig::resolve(ConfigInputs::default()).expect("defaults resolve");
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.breakpoint, DEFAULT_BREAKPOINT);
        assert!(config.fixtures.is_none());
        assert!(config.log_file.ends_with("safra.log"));
    }

    #[test]
    fn breakpoint_outside_range_is_rejected() {
        let inputs = ConfigInputs {
            breakpoint: Some(10),
            ..ConfigInputs::default()
        };
        let error = ShellConfig::resolve(inputs).unwrap_err();
        assert!(matches!(error, ConfigError::BreakpointOutOfRange { value: 10 }));
        assert_eq!(error.to_string(), "breakpoint 10 is outside 40..=400 columns");
    }

    #[test]
    fn missing_fixtures_file_is_rejected() {
        let inputs = ConfigInputs {
            fixtures: Some("/nowhere/dashboard.json".into()),
            ..ConfigInputs::default()
        };
        assert!(matches!(ShellConfig::resolve(inputs), Err(ConfigError::MissingFixtures(_))));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let dir = std::env::temp_dir().join("safra-config-test");
        let inputs = ConfigInputs {
            theme: Some(ThemeMode::Dark),
            breakpoint: Some(120),
            log_file: Some(dir.join("out.log").to_string_lossy().into_owned()),
            ..ConfigInputs::default()
        };
        let config = ShellConfig::resolve(inputs).expect("resolve");
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.breakpoint, 120);
        assert_eq!(config.ensure_log_dir().expect("log dir"), dir.join("out.log"));
        assert!(dir.is_dir());
    }
}

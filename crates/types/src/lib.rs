//! Shared type definitions for the Safra dashboard workspace.
//!
//! Holds the navigation catalog model, the dashboard fixture model, and the
//! message/effect vocabulary exchanged between the TUI components and the
//! runtime.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod dashboard;
pub mod navigation;

pub use dashboard::*;
pub use navigation::*;

/// Colour scheme exposed by the theme provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseThemeModeError),
        }
    }
}

/// Rejected `--theme` / `SAFRA_THEME` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid theme; expected 'light' or 'dark'")]
pub struct ParseThemeModeError;

/// Top-level screens. Only `Shell` requires an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Registration,
    Shell,
}

/// Messages delivered to the application by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick (ticker animation)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// Second half of a deferred navigation transition
    CommitDeferredNavigation,
}

/// Side effects requested by components and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Change the top-level screen
    SwitchTo(Screen),
    /// End the session and return to the login screen
    Logout,
    /// Flip between light and dark themes
    ToggleTheme,
    /// Queue `Msg::CommitDeferredNavigation` behind the current event
    ScheduleNavigationCommit,
    /// Leave the application
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_parses_and_toggles() {
        assert_eq!(" Dark ".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("blue".parse::<ThemeMode>(), Err(ParseThemeModeError));
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn theme_parse_error_names_accepted_values() {
        let error = "blue".parse::<ThemeMode>().expect_err("unknown theme");
        assert_eq!(error.to_string(), "invalid theme; expected 'light' or 'dark'");
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(error);
        assert_eq!(boxed.to_string(), error.to_string());
    }
}

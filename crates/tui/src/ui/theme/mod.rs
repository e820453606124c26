//! Theme styling for the dashboard UI.
//!
//! Two palettes built from the brand manual (light and dark) share the same
//! semantic roles. Components ask the [`ThemeProvider`] for the active theme
//! and never hard-code colours.

use safra_types::ThemeMode;
use tracing::debug;

pub mod brand;
pub mod roles;
pub mod theme_helpers;

pub use brand::{SafraDarkTheme, SafraLightTheme};
pub use roles::Theme;

/// Owns the active palette and the light/dark toggle.
#[derive(Debug)]
pub struct ThemeProvider {
    mode: ThemeMode,
    theme: Box<dyn Theme>,
}

impl ThemeProvider {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            theme: build(mode),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn theme(&self) -> &dyn Theme {
        &*self.theme
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.theme = build(self.mode);
        debug!(mode = %self.mode, "theme toggled");
        self.mode
    }
}

fn build(mode: ThemeMode) -> Box<dyn Theme> {
    match mode {
        ThemeMode::Light => Box::new(SafraLightTheme::new()),
        ThemeMode::Dark => Box::new(SafraDarkTheme::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_swaps_palette() {
        let mut provider = ThemeProvider::new(ThemeMode::Light);
        assert_eq!(provider.theme().roles().sidebar_bg, brand::PRIMARY_GREEN);
        assert_eq!(provider.toggle(), ThemeMode::Dark);
        assert_ne!(provider.theme().roles().sidebar_bg, brand::PRIMARY_GREEN);
        assert_eq!(provider.toggle(), ThemeMode::Light);
    }
}

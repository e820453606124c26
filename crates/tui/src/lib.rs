//! # Safra dashboard TUI
//!
//! Terminal rendition of the Safra agribusiness dashboard: login and
//! registration screens, a collapsible navigation sidebar, a header with
//! search, notifications and the user menu, a scrolling price ticker, and
//! the overview and placeholder pages.
//!
//! ## Architecture
//!
//! `App` owns all state. Components under `ui::components`
//! render from it and turn input into navigation transitions and
//! [`Effect`](safra_types::Effect)s, which the runtime executes. The sidebar
//! state machine itself lives in `safra-navigation`; the shell only drives it.

mod app;
pub mod auth;
pub mod pages;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use safra_fixtures::DataSource;
use safra_util::ShellConfig;

pub use auth::{AuthGate, SessionGate};

/// Runs the dashboard until the user quits.
///
/// # Errors
///
/// Fails when the terminal cannot be put into (or restored from) raw mode or
/// when drawing a frame fails.
pub async fn run(config: ShellConfig, data: Arc<dyn DataSource>) -> Result<()> {
    ui::runtime::run_app(config, data).await
}

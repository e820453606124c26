use std::{
    fs::OpenOptions,
    sync::{Arc, Mutex},
};

use anyhow::{Context, Result};
use clap::Parser;
use safra_fixtures::{DataSource, StaticDataSource};
use safra_types::ThemeMode;
use safra_util::{ConfigInputs, ShellConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Safra agribusiness dashboard in the terminal.
#[derive(Parser, Debug)]
#[command(name = "safra", version, about)]
struct Args {
    /// Initial colour scheme (light or dark)
    #[arg(long, env = "SAFRA_THEME")]
    theme: Option<ThemeMode>,

    /// Terminal width, in columns, from which the desktop layout is used
    #[arg(long, env = "SAFRA_BREAKPOINT")]
    breakpoint: Option<u16>,

    /// JSON fixtures file used instead of the built-in data
    #[arg(long, value_name = "PATH")]
    fixtures: Option<String>,

    /// Where tracing output is written
    #[arg(long, value_name = "PATH")]
    log_file: Option<String>,

    /// Validate the fixtures and exit without starting the TUI
    #[arg(long)]
    check_fixtures: bool,
}

impl Args {
    fn config_inputs(&self) -> ConfigInputs {
        ConfigInputs {
            theme: self.theme,
            breakpoint: self.breakpoint,
            fixtures: self.fixtures.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

/// Sends tracing output to `config.log_file`; the terminal belongs to the TUI.
/// `RUST_LOG` overrides the default `info` filter.
fn init_tracing(config: &ShellConfig) -> Result<()> {
    let path = config.ensure_log_dir()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false).with_target(true))
        .try_init()
        .context("install tracing subscriber")?;
    Ok(())
}

fn describe(data: &dyn DataSource) -> String {
    let fixtures = data.fixtures();
    let pages = fixtures.navigation.leaves().filter(|leaf| leaf.target_page().is_some()).count();
    format!(
        "fixtures ok: {} navigation items, {} pages, {} notifications, {} ticker quotes",
        fixtures.navigation.items().len(),
        pages,
        fixtures.notifications.len(),
        fixtures.ticker.len()
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = ShellConfig::resolve(args.config_inputs()).context("invalid configuration")?;

    let source = StaticDataSource::load(config.fixtures.as_deref()).context("failed to load fixtures")?;
    if args.check_fixtures {
        println!("{}", describe(&source));
        return Ok(());
    }

    init_tracing(&config)?;
    info!(theme = %config.theme, breakpoint = config.breakpoint, log = %config.log_file.display(), "starting safra");
    safra_tui::run(config, Arc::new(source)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_supplies_theme_and_breakpoint() {
        temp_env::with_vars([("SAFRA_THEME", Some("dark")), ("SAFRA_BREAKPOINT", Some("120"))], || {
            let args = Args::try_parse_from(["safra"]).expect("parse");
            let config = ShellConfig::resolve(args.config_inputs()).expect("resolve");
            assert_eq!(config.theme, ThemeMode::Dark);
            assert_eq!(config.breakpoint, 120);
        });
    }

    #[test]
    fn flags_win_over_environment() {
        temp_env::with_var("SAFRA_THEME", Some("dark"), || {
            let args = Args::try_parse_from(["safra", "--theme", "light"]).expect("parse");
            assert_eq!(args.theme, Some(ThemeMode::Light));
        });
    }

    #[test]
    fn unknown_theme_is_a_usage_error() {
        temp_env::with_var_unset("SAFRA_THEME", || {
            assert!(Args::try_parse_from(["safra", "--theme", "blue"]).is_err());
        });
    }

    #[test]
    fn fixtures_flag_must_point_to_a_file() {
        temp_env::with_vars_unset(["SAFRA_THEME", "SAFRA_BREAKPOINT"], || {
            let args = Args::try_parse_from(["safra", "--fixtures", "/no/such/fixtures.json"]).expect("parse");
            assert!(ShellConfig::resolve(args.config_inputs()).is_err());
        });
    }

    #[test]
    fn check_summary_counts_embedded_fixtures() {
        let source = StaticDataSource::embedded().expect("embedded");
        let summary = describe(&source);
        assert!(summary.starts_with("fixtures ok: 7 navigation items"));
        assert!(summary.ends_with("3 notifications, 6 ticker quotes"));
    }

    #[test]
    fn log_file_is_created_with_parent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let log = dir.path().join("nested").join("safra.log");
        let inputs = ConfigInputs {
            log_file: Some(log.to_string_lossy().into_owned()),
            ..ConfigInputs::default()
        };
        let config = ShellConfig::resolve(inputs).expect("resolve");
        assert_eq!(config.ensure_log_dir().expect("create dir"), log.as_path());
        assert!(log.parent().is_some_and(|parent| parent.is_dir()));
    }
}

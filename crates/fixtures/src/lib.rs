//! Mock data source for the Safra dashboard.
//!
//! The shell never embeds its data. It receives a [`DataSource`] whose
//! fixtures come either from the JSON file compiled into this crate or from a
//! JSON file chosen at startup. Both paths run the same validation.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use safra_types::{DashboardFixtures, OVERVIEW_PAGE};
use safra_util::expand_tilde;
use thiserror::Error;
use tracing::debug;

/// Fixture document compiled into the binary.
const EMBEDDED_FIXTURES: &str = include_str!("../data/dashboard.json");

/// Error raised when fixtures cannot be read or fail validation.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixtures from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse fixtures: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("navigation has no 'overview' page")]
    MissingOverview,
    #[error("page '{0}' is targeted by more than one navigation item")]
    DuplicatePage(String),
}

/// Supplies the dashboard fixtures to the shell.
pub trait DataSource: Send + Sync + std::fmt::Debug {
    fn fixtures(&self) -> &DashboardFixtures;
}

/// Data source holding an already validated fixture set.
#[derive(Debug, Clone)]
pub struct StaticDataSource {
    fixtures: DashboardFixtures,
}

impl StaticDataSource {
    /// Loads the fixtures compiled into the binary.
    pub fn embedded() -> Result<Self, FixtureError> {
        Self::from_json(EMBEDDED_FIXTURES)
    }

    /// Loads fixtures from a JSON file. `~` is expanded.
    pub fn from_path(path: &str) -> Result<Self, FixtureError> {
        let resolved = expand_tilde(path);
        let content = fs::read_to_string(&resolved).map_err(|source| FixtureError::Io {
            path: resolved.clone(),
            source,
        })?;
        debug!(path = %resolved.display(), "loaded fixtures file");
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let fixtures: DashboardFixtures = serde_json::from_str(json)?;
        validate(&fixtures)?;
        Ok(Self { fixtures })
    }

    /// Loads from `path` when given, otherwise the embedded fixtures.
    pub fn load(path: Option<&Path>) -> Result<Self, FixtureError> {
        match path {
            Some(path) => Self::from_path(&path.to_string_lossy()),
            None => Self::embedded(),
        }
    }
}

impl DataSource for StaticDataSource {
    fn fixtures(&self) -> &DashboardFixtures {
        &self.fixtures
    }
}

/// Checks the constraints serde cannot express: the overview page exists and
/// every page has a single navigation entry.
fn validate(fixtures: &DashboardFixtures) -> Result<(), FixtureError> {
    let mut pages = HashSet::new();
    for leaf in fixtures.navigation.leaves() {
        if let Some(page) = leaf.target_page()
            && !pages.insert(page.as_str())
        {
            return Err(FixtureError::DuplicatePage(page.to_string()));
        }
    }
    if !pages.contains(OVERVIEW_PAGE) {
        return Err(FixtureError::MissingOverview);
    }
    Ok(())
}

use std::path::PathBuf;

use dirs_next::{data_dir, home_dir};

/// Directory name used under the platform data dir.
pub const APP_DIR_NAME: &str = "safra";

/// Default tracing output file name.
pub const LOG_FILE_NAME: &str = "safra.log";

/// Expands a leading `~` to the current user's home directory.
///
/// Paths without a tilde prefix are returned trimmed but otherwise untouched.
/// When the home directory is unknown the tilde is kept literally.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    if trimmed == "~" {
        return home();
    }
    match trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        Some(rest) => home().join(rest),
        None => PathBuf::from(trimmed),
    }
}

/// Location of the log file when `--log-file` is not given:
/// `<data dir>/safra/safra.log`, or the working directory if the platform
/// reports no data dir.
pub fn default_log_path() -> PathBuf {
    data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_only_trimmed() {
        assert_eq!(expand_tilde("  data/dashboard.json "), PathBuf::from("data/dashboard.json"));
        assert_eq!(expand_tilde("/etc/safra.json"), PathBuf::from("/etc/safra.json"));
    }

    #[cfg(unix)]
    #[test]
    fn tilde_expands_from_home() {
        temp_env::with_var("HOME", Some("/home/ana"), || {
            assert_eq!(expand_tilde("~"), PathBuf::from("/home/ana"));
            assert_eq!(expand_tilde("~/fixtures.json"), PathBuf::from("/home/ana/fixtures.json"));
        });
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn default_log_path_follows_xdg_data_home() {
        temp_env::with_var("XDG_DATA_HOME", Some("/tmp/xdg-data"), || {
            assert_eq!(default_log_path(), PathBuf::from("/tmp/xdg-data/safra/safra.log"));
        });
    }
}

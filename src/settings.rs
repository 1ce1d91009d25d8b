//! Layered settings: built-in defaults, optional `config.toml` in the platform
//! config directory, optional `makan.toml` in the working directory, an
//! explicit `--config` file, then `MAKAN_*` environment variables.

use anyhow::{anyhow, Context, Result};
use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

const QUALIFIER: &str = "in";
const ORGANIZATION: &str = "makanonrental";
const APPLICATION: &str = "makan";

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOGIN_DELAY_MS: i64 = 1000;
const DEFAULT_INTEREST_DELAY_MS: i64 = 1000;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the durable session storage
    pub data_dir: PathBuf,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Artificial latency of the mock login
    pub login_delay_ms: u64,
    /// Artificial latency of interest submissions
    pub interest_delay_ms: u64,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

fn default_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".makan"))
}

/// Optional configuration files consulted before any explicit one
fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Some(dirs) = project_dirs() {
        files.push(dirs.config_dir().join("config.toml"));
    }
    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join("makan.toml"));
    }

    files
}

impl Settings {
    /// Resolve settings, reading `explicit` as a required file when given.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::build(default_config_files(), explicit, true)
    }

    fn build(defaults: Vec<PathBuf>, explicit: Option<&Path>, with_env: bool) -> Result<Self> {
        let data_dir = default_data_dir();
        let mut builder = Config::builder()
            .set_default("data_dir", data_dir.to_string_lossy().into_owned())?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .set_default("login_delay_ms", DEFAULT_LOGIN_DELAY_MS)?
            .set_default("interest_delay_ms", DEFAULT_INTEREST_DELAY_MS)?;

        for path in defaults {
            builder = builder.add_source(File::from(path).required(false));
        }
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }
        if with_env {
            builder = builder.add_source(
                Environment::with_prefix("MAKAN")
                    .prefix_separator("_")
                    .try_parsing(true),
            );
        }

        builder
            .build()
            .context("Failed to assemble configuration")?
            .try_deserialize()
            .map_err(|e| anyhow!("Invalid configuration: {}", e))
    }

    /// Replace the data directory when the command line names one
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn interest_delay(&self) -> Duration {
        Duration::from_millis(self.interest_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_files() {
        let settings = Settings::build(Vec::new(), None, false).unwrap();
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.login_delay(), Duration::from_secs(1));
        assert_eq!(settings.interest_delay_ms, 1000);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("makan.toml");
        std::fs::write(
            &path,
            "log_level = \"debug\"\nlogin_delay_ms = 0\ndata_dir = \"/tmp/makan-test\"\n",
        )
        .unwrap();

        let settings = Settings::build(Vec::new(), Some(&path), false).unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.login_delay(), Duration::ZERO);
        assert_eq!(settings.interest_delay_ms, 1000);
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/makan-test"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(Settings::build(Vec::new(), Some(&missing), false).is_err());
    }

    #[test]
    fn command_line_data_dir_wins() {
        let settings = Settings::build(Vec::new(), None, false)
            .unwrap()
            .with_data_dir(Some(PathBuf::from("/srv/makan")));
        assert_eq!(settings.data_dir, PathBuf::from("/srv/makan"));
    }

    #[test]
    fn default_files_include_working_directory() {
        assert!(default_config_files()
            .iter()
            .any(|path| path.ends_with("makan.toml")));
    }
}

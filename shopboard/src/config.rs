use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use shopboard_core::orders::DEFAULT_PAGE_SIZE;
use shopboard_core::{Breakpoints, ThemeMode};
use thiserror::Error;

const CONFIG_ENV: &str = "SHOPBOARD_CONFIG";
const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
const DEFAULT_TOAST_TIMEOUT_MS: u64 = 3000;
const DEFAULT_BULK_ACTION_DELAY_MS: u64 = 1000;

/// Errors emitted while reading the dashboard config.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("config IO failed")]
    Io(#[from] std::io::Error),
    #[error("config JSON failed")]
    Json(#[from] serde_json::Error),
}

/// Read-only startup configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct DashboardConfig {
    pub(crate) theme: ThemeMode,
    pub(crate) page_size: usize,
    pub(crate) search_debounce_ms: u64,
    pub(crate) toast_timeout_ms: u64,
    pub(crate) bulk_action_delay_ms: u64,
    pub(crate) export_dir: Option<PathBuf>,
    pub(crate) breakpoints: Breakpoints,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
            bulk_action_delay_ms: DEFAULT_BULK_ACTION_DELAY_MS,
            export_dir: None,
            breakpoints: Breakpoints::default(),
        }
    }
}

impl DashboardConfig {
    pub(crate) fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub(crate) fn toast_timeout(&self) -> Duration {
        Duration::from_millis(self.toast_timeout_ms)
    }

    pub(crate) fn bulk_action_delay(&self) -> Duration {
        Duration::from_millis(self.bulk_action_delay_ms)
    }

    /// Directory CSV exports are written to.
    pub(crate) fn export_dir(&self) -> PathBuf {
        if let Some(dir) = &self.export_dir {
            return dir.clone();
        }
        match std::env::var("HOME") {
            Ok(home) => Path::new(&home).join("Downloads"),
            Err(_) => std::env::temp_dir(),
        }
    }

    fn normalized(mut self) -> Self {
        if self.page_size == 0 {
            log::warn!(
                "page_size 0 is not usable, falling back to {DEFAULT_PAGE_SIZE}"
            );
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }
}

/// How the config file was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Load the config, falling back to defaults on any problem.
pub(crate) fn load_config() -> DashboardConfig {
    let path = config_path();
    match load_config_from_path(&path) {
        Ok((config, ConfigLoadStatus::Loaded)) => {
            log::info!("config loaded from {}", path.display());
            config
        },
        Ok((config, ConfigLoadStatus::Missing)) => {
            log::debug!("no config at {}, using defaults", path.display());
            config
        },
        Ok((config, ConfigLoadStatus::Invalid(message))) => {
            log::warn!("config {} invalid: {message}", path.display());
            config
        },
        Err(err) => {
            log::warn!("config {} unreadable: {err}", path.display());
            DashboardConfig::default()
        },
    }
}

fn load_config_from_path(
    path: &Path,
) -> Result<(DashboardConfig, ConfigLoadStatus), ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok((DashboardConfig::default(), ConfigLoadStatus::Missing));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<DashboardConfig>(&data) {
        Ok(config) => Ok((config.normalized(), ConfigLoadStatus::Loaded)),
        Err(err) => Ok((
            DashboardConfig::default(),
            ConfigLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("shopboard")
            .join("config.json");
    }

    std::env::temp_dir().join("shopboard").join("config.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use shopboard_core::ThemeMode;

    use super::{ConfigLoadStatus, DashboardConfig, load_config_from_path};

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join("config.json");
        fs::write(&path, contents).expect("config should be written");
        (dir, path)
    }

    #[test]
    fn given_missing_file_when_loading_then_defaults_are_used() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let (config, status) =
            load_config_from_path(&dir.path().join("absent.json"))
                .expect("missing file is not an error");

        assert_eq!(status, ConfigLoadStatus::Missing);
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn given_partial_file_when_loading_then_unset_fields_keep_defaults() {
        let (_dir, path) = write_config(
            r#"{"theme": "dark", "page_size": 25, "breakpoints": {"wide_min": 1600}}"#,
        );

        let (config, status) =
            load_config_from_path(&path).expect("config should load");

        assert_eq!(status, ConfigLoadStatus::Loaded);
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.page_size, 25);
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.breakpoints.wide_min, 1600);
        assert_eq!(config.breakpoints.mobile_max, 768);
    }

    #[test]
    fn given_invalid_json_when_loading_then_defaults_with_invalid_status() {
        let (_dir, path) = write_config("{ not json");

        let (config, status) =
            load_config_from_path(&path).expect("invalid file is recovered");

        assert!(matches!(status, ConfigLoadStatus::Invalid(_)));
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn given_zero_page_size_when_loading_then_default_page_size_is_used() {
        let (_dir, path) = write_config(r#"{"page_size": 0}"#);
        let (config, _) =
            load_config_from_path(&path).expect("config should load");
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn given_export_dir_when_resolving_then_configured_dir_wins() {
        let config = DashboardConfig {
            export_dir: Some(PathBuf::from("/tmp/exports")),
            ..DashboardConfig::default()
        };
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/exports"));
    }
}

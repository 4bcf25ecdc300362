use crate::{Error, Result};
use chrono::Duration;
use dwell_engine::{EngagementThresholds, OverCeilingPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. DWELL_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.dwell (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("DWELL_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("dwell"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".dwell"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Upper bound for every `*_secs` setting: one year.
const MAX_CONFIG_SECS: i64 = 366 * 24 * 60 * 60;

/// `[analytics]` section: reconciliation and backfill thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub min_engagement_secs: i64,
    pub max_session_secs: i64,
    pub bounce_threshold_secs: i64,
    pub over_ceiling: OverCeilingPolicy,
    /// Heartbeat age after which an incomplete session counts as abandoned.
    pub session_timeout_secs: i64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        let thresholds = EngagementThresholds::default();
        Self {
            min_engagement_secs: thresholds.min_engagement_secs,
            max_session_secs: thresholds.max_session_secs,
            bounce_threshold_secs: thresholds.bounce_threshold_secs,
            over_ceiling: thresholds.over_ceiling,
            session_timeout_secs: 1800,
        }
    }
}

/// `[database]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Relative paths resolve against the data directory.
    pub file: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("dwell.db"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Load and validate; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let a = &self.analytics;

        if a.max_session_secs <= 0 {
            return Err(Error::Config(
                "analytics.max_session_secs must be positive".to_string(),
            ));
        }
        if a.min_engagement_secs < 0 {
            return Err(Error::Config(
                "analytics.min_engagement_secs must not be negative".to_string(),
            ));
        }
        if a.min_engagement_secs > a.max_session_secs {
            return Err(Error::Config(format!(
                "analytics.min_engagement_secs ({}) exceeds max_session_secs ({})",
                a.min_engagement_secs, a.max_session_secs
            )));
        }
        if a.bounce_threshold_secs < 0 {
            return Err(Error::Config(
                "analytics.bounce_threshold_secs must not be negative".to_string(),
            ));
        }
        if a.session_timeout_secs <= 0 {
            return Err(Error::Config(
                "analytics.session_timeout_secs must be positive".to_string(),
            ));
        }
        for (name, value) in [
            ("max_session_secs", a.max_session_secs),
            ("bounce_threshold_secs", a.bounce_threshold_secs),
            ("session_timeout_secs", a.session_timeout_secs),
        ] {
            if value > MAX_CONFIG_SECS {
                return Err(Error::Config(format!(
                    "analytics.{} ({}) exceeds the limit of {} seconds",
                    name, value, MAX_CONFIG_SECS
                )));
            }
        }

        Ok(())
    }

    pub fn thresholds(&self) -> EngagementThresholds {
        EngagementThresholds {
            min_engagement_secs: self.analytics.min_engagement_secs,
            max_session_secs: self.analytics.max_session_secs,
            bounce_threshold_secs: self.analytics.bounce_threshold_secs,
            over_ceiling: self.analytics.over_ceiling,
        }
    }

    /// Saturates for configs built in code without `validate`.
    pub fn session_timeout(&self) -> Duration {
        Duration::try_seconds(self.analytics.session_timeout_secs).unwrap_or(Duration::MAX)
    }

    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        if self.database.file.is_absolute() {
            self.database.file.clone()
        } else {
            data_dir.join(&self.database.file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("config.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.thresholds(), EngagementThresholds::default());
        assert_eq!(config.session_timeout(), Duration::minutes(30));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[analytics]\nover_ceiling = \"clamp\"\nbounce_threshold_secs = 15\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.analytics.over_ceiling, OverCeilingPolicy::Clamp);
        assert_eq!(config.analytics.bounce_threshold_secs, 15);
        assert_eq!(config.analytics.max_session_secs, 3600);
        assert_eq!(config.database.file, PathBuf::from("dwell.db"));
    }

    #[test]
    fn test_save_and_reload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.analytics.session_timeout_secs = 600;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_rejects_floor_above_ceiling() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[analytics]\nmin_engagement_secs = 100\nmax_session_secs = 50\n",
        )
        .unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("exceeds max_session_secs"));
    }

    #[test]
    fn test_rejects_out_of_range_seconds() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        std::fs::write(
            &path,
            "[analytics]\nsession_timeout_secs = 9223372036854775807\n",
        )
        .unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("session_timeout_secs"));

        std::fs::write(&path, "[analytics]\nmax_session_secs = 99999999999\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("max_session_secs"));

        std::fs::write(
            &path,
            format!("[analytics]\nsession_timeout_secs = {}\n", MAX_CONFIG_SECS),
        )
        .unwrap();
        assert!(Config::load_from(&path).is_ok());
    }

    #[test]
    fn test_session_timeout_saturates_without_validation() {
        let mut config = Config::default();
        config.analytics.session_timeout_secs = i64::MAX;
        assert_eq!(config.session_timeout(), Duration::MAX);
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[analytics]\nover_ceiling = \"ignore\"\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_database_path_resolution() {
        let mut config = Config::default();
        assert_eq!(
            config.database_path(Path::new("/data")),
            PathBuf::from("/data/dwell.db")
        );

        config.database.file = PathBuf::from("/var/lib/dwell/prod.db");
        assert_eq!(
            config.database_path(Path::new("/data")),
            PathBuf::from("/var/lib/dwell/prod.db")
        );
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/tmp/dwell"), PathBuf::from("/tmp/dwell"));
    }
}

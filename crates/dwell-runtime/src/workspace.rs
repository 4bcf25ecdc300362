use crate::services::maintenance::MaintenanceService;
use crate::services::report::ReportService;
use crate::{Config, Error, Result};
use dwell_engine::SessionAnalyticsReconciler;
use dwell_index::Database;
use std::path::{Path, PathBuf};

/// An opened data directory: configuration plus the database handle the
/// services borrow.
pub struct Workspace {
    config: Config,
    db: Database,
}

impl Workspace {
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Open an existing workspace. Fails when the database file is absent so
    /// a mistyped `--data-dir` does not silently create an empty store.
    pub fn open(data_dir: &Path, config_path: Option<&Path>) -> Result<Self> {
        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| data_dir.join(Self::CONFIG_FILE));
        let config = Config::load_from(&config_path)?;

        let db_path = config.database_path(data_dir);
        if !db_path.exists() {
            return Err(Error::NotInitialized(format!(
                "no database at {}. Run `dwell init` first",
                db_path.display()
            )));
        }

        let db = Database::open(&db_path)?;
        tracing::debug!(data_dir = %data_dir.display(), "workspace opened");

        Ok(Self {
            config,
            db,
        })
    }

    /// Create the data directory, write a default config (unless one exists
    /// and `force` is false) and create or upgrade the database.
    pub fn init(data_dir: &Path, config_path: Option<&Path>, force: bool) -> Result<InitOutcome> {
        std::fs::create_dir_all(data_dir)?;

        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| data_dir.join(Self::CONFIG_FILE));

        let config_written = force || !config_path.exists();
        let config = if config_written {
            let config = Config::default();
            config.save_to(&config_path)?;
            config
        } else {
            Config::load_from(&config_path)?
        };

        let db_path = config.database_path(data_dir);
        let db_created = !db_path.exists();
        Database::open(&db_path)?;

        tracing::info!(
            config = %config_path.display(),
            database = %db_path.display(),
            config_written,
            db_created,
            "workspace initialized"
        );

        Ok(InitOutcome {
            config_path,
            db_path,
            config_written,
            db_created,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn reports(&self) -> ReportService<'_> {
        ReportService::new(
            &self.db,
            SessionAnalyticsReconciler::new(self.config.thresholds()),
        )
    }

    pub fn maintenance(&self) -> MaintenanceService<'_> {
        MaintenanceService::new(
            &self.db,
            self.config.thresholds(),
            self.config.session_timeout(),
        )
    }
}

/// What `Workspace::init` did.
#[derive(Debug, Clone, serde::Serialize)]
pub struct InitOutcome {
    pub config_path: PathBuf,
    pub db_path: PathBuf,
    pub config_written: bool,
    pub db_created: bool,
}

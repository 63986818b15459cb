//! Runtime configuration for the CLI.
//!
//! Values come from command-line flags first, then `WAYFARER_*` environment
//! variables, then defaults.

use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use std::path::PathBuf;
use tracing::{debug, warn};
use wayfarer_core::storage::SNAPSHOT_KEY;
use wayfarer_core::{FileStorage, SnapshotStorage, SqliteStorage, VisitedStore};

pub const DEFAULT_DATA_DIR: &str = "~/.config/wayfarer/";
pub const DATABASE_FILE: &str = "wayfarer.db";

pub const ENV_DATA_DIR: &str = "WAYFARER_DATA_DIR";
pub const ENV_BACKEND: &str = "WAYFARER_BACKEND";
pub const ENV_LOG: &str = "WAYFARER_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Json,
}

impl Backend {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sqlite" | "db" => Some(Backend::Sqlite),
            "json" | "file" => Some(Backend::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Sqlite => "sqlite",
            Backend::Json => "json",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the snapshot (tilde already expanded)
    pub data_dir: PathBuf,
    pub backend: Backend,
    /// `tracing-subscriber` filter directive
    pub log_filter: String,
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        Self::resolve(
            matches.get_one::<String>("data-dir").map(String::as_str),
            matches.get_one::<String>("backend").map(String::as_str),
            matches.get_count("verbose"),
            |key| std::env::var(key).ok(),
        )
    }

    pub fn resolve(
        data_dir: Option<&str>,
        backend: Option<&str>,
        verbosity: u8,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let data_dir = data_dir
            .map(str::to_string)
            .or_else(|| env(ENV_DATA_DIR))
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        let data_dir = PathBuf::from(shellexpand::tilde(&data_dir).as_ref());

        let backend_name = backend
            .map(str::to_string)
            .or_else(|| env(ENV_BACKEND))
            .unwrap_or_else(|| Backend::Sqlite.as_str().to_string());
        let backend = Backend::from_str(&backend_name)
            .ok_or_else(|| anyhow!("Unknown storage backend '{}'", backend_name))?;

        let log_filter = match verbosity {
            0 => env(ENV_LOG).unwrap_or_else(|| "warn".to_string()),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        };

        Ok(Self {
            data_dir,
            backend,
            log_filter,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        match self.backend {
            Backend::Sqlite => self.db_path(),
            Backend::Json => FileStorage::new(&self.data_dir).path().to_path_buf(),
        }
    }

    pub fn snapshot_exists(&self) -> Result<bool> {
        match self.backend {
            Backend::Json => Ok(FileStorage::new(&self.data_dir).path().exists()),
            Backend::Sqlite => {
                if !SqliteStorage::exists(&self.db_path()) {
                    return Ok(false);
                }
                let storage = SqliteStorage::new(&self.db_path())?;
                Ok(storage.get()?.is_some())
            }
        }
    }

    /// Open the store on the configured backend.
    ///
    /// A missing data directory or a medium that cannot be opened means the
    /// store runs detached on a seeded catalog.
    pub fn open_store(&self) -> Result<VisitedStore> {
        if !self.data_dir.exists() {
            warn!(
                "Data directory {} does not exist, changes will not be saved",
                self.data_dir.display()
            );
            return Ok(VisitedStore::detached());
        }
        match self.open_attached_store() {
            Ok(store) => Ok(store),
            Err(e) => {
                warn!("{:#}, changes will not be saved", e);
                Ok(VisitedStore::detached())
            }
        }
    }

    /// Open the store, creating the data directory if needed
    pub fn create_store(&self) -> Result<VisitedStore> {
        std::fs::create_dir_all(&self.data_dir).with_context(|| {
            format!("Failed to create data directory {}", self.data_dir.display())
        })?;
        self.open_attached_store()
    }

    fn open_attached_store(&self) -> Result<VisitedStore> {
        debug!(
            "Opening {} storage for '{}' in {}",
            self.backend.as_str(),
            SNAPSHOT_KEY,
            self.data_dir.display()
        );
        let store = match self.backend {
            Backend::Json => VisitedStore::new(FileStorage::new(&self.data_dir)),
            Backend::Sqlite => {
                let path = self.db_path();
                let storage = SqliteStorage::new(&path)
                    .with_context(|| format!("Failed to open database {}", path.display()))?;
                VisitedStore::new(storage)
            }
        };
        Ok(store)
    }
}

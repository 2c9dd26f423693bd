use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE: &str = "training.db";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// Optional settings read from `trainlog.toml`. CLI flags take precedence.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TrainlogConfig {
    pub database: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub pool_size: Option<u32>,
}

impl TrainlogConfig {
    pub fn database_path(&self) -> PathBuf {
        self.database
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn pool_size(&self) -> u32 {
        self.pool_size.unwrap_or(crate::storage::DEFAULT_POOL_SIZE)
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merged_with(self, overrides: TrainlogConfig) -> TrainlogConfig {
        TrainlogConfig {
            database: overrides.database.or(self.database),
            host: overrides.host.or(self.host),
            port: overrides.port.or(self.port),
            pool_size: overrides.pool_size.or(self.pool_size),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("trainlog.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<TrainlogConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: TrainlogConfig = toml::from_str(&contents)
        .with_context(|| format!("invalid config in {}", path.display()))?;
    Ok(Some(config))
}

/// Resolve settings as CLI flag > config file > built-in default.
///
/// Unset fields in the result fall back to defaults through the accessors.
pub fn resolve_config(path: Option<&Path>, overrides: TrainlogConfig) -> anyhow::Result<TrainlogConfig> {
    let file = load_config(path)?.unwrap_or_default();
    Ok(file.merged_with(overrides))
}

pub fn write_config(path: &Path, config: &TrainlogConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!("Wrote config to {}", path.display());
    Ok(())
}

/// Create missing parent directories of the database file
pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    match db_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create database directory {}", parent.display()))?;
            tracing::debug!("Created database directory {}", parent.display());
        }
        _ => {}
    }
    Ok(())
}

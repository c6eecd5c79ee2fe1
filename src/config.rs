//! Review configuration loading.
//!
//! Configuration is loaded with the following precedence (highest to
//! lowest):
//!
//! 1. Environment variables
//! 2. An explicit file passed with `--config`, otherwise `.sql-review.toml`
//!    in the current directory, otherwise
//!    `~/.config/sql-review/config.toml`
//! 3. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! engine = "mysql"             # mysql, tidb, postgres
//! charset = "utf8mb4"
//! collation = "utf8mb4_general_ci"
//!
//! [[rules]]
//! type = "column.require-default"
//! level = "WARNING"
//!
//! [[rules]]
//! type = "statement.affected-row-limit"
//! level = "ERROR"
//! payload = '{"number": 1000}'
//!
//! [[rules]]
//! type = "naming.table"
//! level = "WARNING"
//! engines = ["postgres"]
//! payload = '{"format": "^[a-z]+(_[a-z]+)*$"}'
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SQL_REVIEW_ENGINE` | Engine name |
//! | `SQL_REVIEW_CHARSET` | Database charset |
//! | `SQL_REVIEW_COLLATION` | Database collation |
//! | `SQL_REVIEW_CONFIG` | Config file for `sql-review check` (same as `--config`) |

use std::{
    env, fs,
    path::{Path, PathBuf}
};

use serde::{Deserialize, Serialize};

use crate::{
    advisor::{Engine, SqlReviewRule},
    error::{AppResult, config_error, file_read_error}
};

/// File looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = ".sql-review.toml";

/// Review configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewConfig {
    #[serde(default)]
    pub engine:    Engine,
    #[serde(default)]
    pub charset:   String,
    #[serde(default)]
    pub collation: String,
    #[serde(default)]
    pub rules:     Vec<SqlReviewRule>
}

impl ReviewConfig {
    /// Load configuration from the default locations and the environment
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sql-review")
                .join("config.toml");
            if home_config.exists() {
                config = Self::from_path(&home_config)?;
            }
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            config = Self::from_path(&local_config)?;
        }

        config.apply_env()?;
        Ok(config)
    }

    /// Load configuration from `path`, then apply environment overrides
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let mut config = Self::from_path(path)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Parse one configuration file without environment overrides
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| file_read_error(&display, e))?;
        log::debug!("loading review config from {}", display);
        Self::from_toml(&content)
            .map_err(|e| config_error(format!("Invalid config file '{}': {}", display, e)))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| config_error(e.to_string()))
    }

    fn apply_env(&mut self) -> AppResult<()> {
        if let Ok(engine) = env::var("SQL_REVIEW_ENGINE") {
            self.engine = engine.parse()?;
        }
        if let Ok(charset) = env::var("SQL_REVIEW_CHARSET") {
            self.charset = charset;
        }
        if let Ok(collation) = env::var("SQL_REVIEW_COLLATION") {
            self.collation = collation;
        }
        Ok(())
    }
}

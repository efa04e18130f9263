//! Config module - engine configuration from files and environment
//!
//! Sources are layered, later overriding earlier:
//!
//! 1. Built-in defaults (6x6, seed 1, downward, four-color palette)
//! 2. A JSON file via [`EngineConfig::load`]
//! 3. Environment variables via [`EngineConfig::with_env_overrides`]
//!
//! # Environment Variables
//!
//! - `BLOCKWARS_ROWS`: Row count
//! - `BLOCKWARS_COLUMNS`: Column count
//! - `BLOCKWARS_SEED`: Spawn seed (0 is treated as 1 by the engine)
//! - `BLOCKWARS_FILL_DIRECTION`: `downward`/`upward` or an integer
//!
//! Unparseable environment values are ignored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::palette::Palette;
use crate::types::{ColorToken, FillDirection, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SEED};

pub const ENV_ROWS: &str = "BLOCKWARS_ROWS";
pub const ENV_COLUMNS: &str = "BLOCKWARS_COLUMNS";
pub const ENV_SEED: &str = "BLOCKWARS_SEED";
pub const ENV_FILL_DIRECTION: &str = "BLOCKWARS_FILL_DIRECTION";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive")]
    InvalidDimension { field: &'static str },
    #[error("palette entry {index} has an empty key")]
    InvalidColor { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rows: usize,
    pub columns: usize,
    pub fill_direction: FillDirection,
    pub seed: u32,
    pub palette: Vec<ColorToken>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            fill_direction: FillDirection::Downward,
            seed: DEFAULT_SEED,
            palette: Palette::default().as_slice().to_vec(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON document
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Apply `BLOCKWARS_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable lookup (the environment in production)
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse_dim = |name: &str| {
            lookup(name)
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|v| *v > 0)
        };

        if let Some(rows) = parse_dim(ENV_ROWS) {
            self.rows = rows;
        }
        if let Some(columns) = parse_dim(ENV_COLUMNS) {
            self.columns = columns;
        }
        if let Some(seed) = lookup(ENV_SEED).and_then(|s| s.trim().parse::<u32>().ok()) {
            self.seed = seed;
        }
        if let Some(direction) = lookup(ENV_FILL_DIRECTION).and_then(|s| FillDirection::from_str(&s)) {
            self.fill_direction = direction;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::InvalidDimension { field: "rows" });
        }
        if self.columns == 0 {
            return Err(ConfigError::InvalidDimension { field: "columns" });
        }
        if let Some(index) = self.palette.iter().position(|t| t.key.is_empty()) {
            return Err(ConfigError::InvalidColor { index });
        }
        Ok(())
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.palette.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{"rows": 8, "fill_direction": "upward"}"#).unwrap();
        assert_eq!(config.rows, 8);
        assert_eq!(config.columns, DEFAULT_COLUMNS);
        assert_eq!(config.fill_direction, FillDirection::Upward);
        assert_eq!(config.palette.len(), 4);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = EngineConfig::from_json(r#"{"columns": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDimension { field: "columns" }));
    }

    #[test]
    fn test_empty_palette_key_rejected() {
        let err = EngineConfig::from_json(r##"{"palette": [{"key": "red", "hex": "#f00"}, {"key": "", "hex": "#000"}]}"##)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { index: 1 }));
    }

    #[test]
    fn test_overrides_ignore_garbage() {
        let vars: HashMap<&str, &str> = [
            (ENV_ROWS, "9"),
            (ENV_COLUMNS, "zero"),
            (ENV_SEED, "77"),
            (ENV_FILL_DIRECTION, "-1"),
        ]
        .into();
        let config = EngineConfig::default().with_overrides(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.rows, 9);
        assert_eq!(config.columns, DEFAULT_COLUMNS);
        assert_eq!(config.seed, 77);
        assert_eq!(config.fill_direction, FillDirection::Upward);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EngineConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.json");
        std::fs::write(&path, r#"{"rows": 4, "columns": 5, "seed": 3}"#).unwrap();
        let config = EngineConfig::load(&path).unwrap();
        assert_eq!((config.rows, config.columns, config.seed), (4, 5, 3));
    }
}

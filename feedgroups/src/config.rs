//! Configuration for the admin binary, stored in `feedgroups.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Binary configuration (TOML).
///
/// Edited by humans; missing fields default to sensible values. The library
/// never reads this; the binary resolves it and injects the results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Path to the JSON database file holding all group documents.
    pub database_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("feedgroups.json"),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.database_path.as_os_str().is_empty() {
            return Err(anyhow!("database_path must not be empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `Config::default()`.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        let cfg = Config::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: Config =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_reads_database_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("feedgroups.toml");
        fs::write(&path, "database_path = \"state/bot.json\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.database_path, PathBuf::from("state/bot.json"));
    }

    #[test]
    fn empty_database_path_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("feedgroups.toml");
        fs::write(&path, "database_path = \"\"\n").expect("write");

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}

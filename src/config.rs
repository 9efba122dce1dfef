// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_PATH_VAR: &str = "CONSTRUCTION_DATA_PATH";
pub const OUTPUT_DIR_VAR: &str = "CONSTRUCTION_OUTPUT_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_path: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/construction_top_6_europe_2020.csv"),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl Config {
    /// Environment variables win over values from `config.toml`.
    pub fn apply_env(mut self) -> Self {
        if let Ok(path) = env::var(DATA_PATH_VAR) {
            self.data_path = PathBuf::from(path);
        }
        if let Ok(dir) = env::var(OUTPUT_DIR_VAR) {
            self.output_dir = PathBuf::from(dir);
        }
        self
    }
}

fn get_config_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("config.toml");
    path
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: Config = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(config)
}

/// Load `config.toml` if present, fall back to defaults, then apply
/// environment overrides.
pub fn load_config() -> anyhow::Result<Config> {
    let config_path = get_config_path();
    let config = if config_path.exists() {
        load_config_from(&config_path)?
    } else {
        Config::default()
    };
    Ok(config.apply_env())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;

    #[test]
    fn test_partial_config_uses_defaults() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "output_dir = \"charts\"")?;

        let config = load_config_from(file.path())?;
        assert_eq!(config.output_dir, PathBuf::from("charts"));
        assert_eq!(config.data_path, Config::default().data_path);
        Ok(())
    }

    #[test]
    fn test_invalid_config_is_an_error() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "data_path = [1, 2]")?;

        assert!(load_config_from(file.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_env_overrides_file_values() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "data_path = \"from_file.csv\"")?;
        writeln!(file, "output_dir = \"file_output\"")?;

        env::set_var(DATA_PATH_VAR, "from_env.csv");
        env::remove_var(OUTPUT_DIR_VAR);
        let config = load_config_from(file.path())?.apply_env();
        assert_eq!(config.data_path, PathBuf::from("from_env.csv"));
        assert_eq!(config.output_dir, PathBuf::from("file_output"));

        env::set_var(OUTPUT_DIR_VAR, "env_output");
        let config = load_config_from(file.path())?.apply_env();
        assert_eq!(config.output_dir, PathBuf::from("env_output"));

        env::remove_var(DATA_PATH_VAR);
        env::remove_var(OUTPUT_DIR_VAR);
        let config = load_config_from(file.path())?.apply_env();
        assert_eq!(config.data_path, PathBuf::from("from_file.csv"));
        Ok(())
    }
}

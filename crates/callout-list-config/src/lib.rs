use callout_list_engine::FilterConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub vault_path: PathBuf,
    #[serde(default = "default_callout_type_filter")]
    pub callout_type_filter: String,
    #[serde(default)]
    pub include_path_filter: String,
    #[serde(default)]
    pub exclude_path_filter: String,
}

fn default_callout_type_filter() -> String {
    "todo".to_string()
}

impl Config {
    pub fn new(vault_path: PathBuf) -> Self {
        Self {
            vault_path,
            callout_type_filter: default_callout_type_filter(),
            include_path_filter: String::new(),
            exclude_path_filter: String::new(),
        }
    }

    /// The filter settings as the engine expects them, by value per run
    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            callout_type_filter: self.callout_type_filter.clone(),
            include_path_filter: self.include_path_filter.clone(),
            exclude_path_filter: self.exclude_path_filter.clone(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded vault path
        config.vault_path = Self::expand_path(&config.vault_path).unwrap_or(config.vault_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/callout-list");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/callout-list/config.toml"));
    }

    #[test]
    fn test_new_config_uses_filter_defaults() {
        let config = Config::new(PathBuf::from("/tmp/vault"));
        assert_eq!(config.callout_type_filter, "todo");
        assert_eq!(config.include_path_filter, "");
        assert_eq!(config.exclude_path_filter, "");
    }

    #[test]
    fn test_filter_config_conversion() {
        let mut config = Config::new(PathBuf::from("/tmp/vault"));
        config.callout_type_filter = "todo, note".to_string();
        config.include_path_filter = "Notes".to_string();

        let filters = config.filter_config();
        assert_eq!(filters.callout_type_filter, "todo, note");
        assert_eq!(filters.include_path_filter, "Notes");
        assert_eq!(filters.exclude_path_filter, "");
    }

    #[test]
    fn test_missing_filter_fields_fall_back_to_defaults() {
        let config_content = r#"
vault_path = "/tmp/vault"
"#;

        let config: Config = toml::from_str(config_content).unwrap();
        assert_eq!(config.callout_type_filter, "todo");
        assert_eq!(config.include_path_filter, "");
        assert_eq!(config.exclude_path_filter, "");
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let mut test_config = Config::new(PathBuf::from("/tmp/test-vault"));
        test_config.exclude_path_filter = "Templates".to_string();

        test_config.save_to_path(&config_file).unwrap();

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.vault_path, test_config.vault_path);
        assert_eq!(loaded_config.exclude_path_filter, "Templates");
    }

    #[test]
    fn test_config_with_tilde_in_toml() {
        let config_content = r#"
vault_path = "~/test/vault"
"#;

        let mut config: Config = toml::from_str(config_content).unwrap();
        config.vault_path = Config::expand_path(&config.vault_path).unwrap_or(config.vault_path);

        let expanded_path = config.vault_path.to_string_lossy();
        assert!(!expanded_path.starts_with('~'));
        assert!(expanded_path.contains("test/vault"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }
}

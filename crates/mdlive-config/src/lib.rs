use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR: &str = "~/.config/mdlive";
const DEFAULT_SESSION_DIR: &str = "~/.local/share/mdlive/session";
const DEFAULT_EXPORT_DIR: &str = "~";
const DEFAULT_LOG_FILE: &str = "~/.local/state/mdlive/mdlive.log";

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

/// Where the editor keeps its session, writes exports and logs.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the persisted document and its history.
    pub session_dir: PathBuf,
    /// Directory that `Document.md` exports are written to.
    pub export_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_dir: PathBuf::from(DEFAULT_SESSION_DIR),
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
        .expanded()
    }
}

impl Config {
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

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config.expanded()))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// The config at `config_path`, or the defaults when there is no file.
    pub fn load_or_default_from_path<P: AsRef<Path>>(
        config_path: P,
    ) -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(config_path)?.unwrap_or_default())
    }

    pub fn load_or_default() -> Result<Self, ConfigError> {
        Self::load_or_default_from_path(Self::config_path())
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
        let config_dir = shellexpand::tilde(CONFIG_DIR);
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands shell variables and tilde in every path. Paths that fail to
    /// expand are kept as written.
    fn expanded(self) -> Self {
        Self {
            session_dir: expand_or_keep(self.session_dir),
            export_dir: expand_or_keep(self.export_dir),
            log_file: expand_or_keep(self.log_file),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(e) => {
                log::warn!("Could not expand {}: {e}", path.display());
                None
            }
        }
    }
}

fn expand_or_keep(path: PathBuf) -> PathBuf {
    Config::expand_path(&path).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/mdlive/config.toml"));
    }

    #[test]
    fn test_defaults_are_expanded() {
        let config = Config::default();
        assert!(!config.session_dir.to_string_lossy().starts_with('~'));
        assert!(config.session_dir.ends_with("mdlive/session"));
        assert!(config.log_file.ends_with("mdlive.log"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            session_dir: PathBuf::from("/tmp/session"),
            export_dir: PathBuf::from("/tmp/export"),
            log_file: PathBuf::from("/tmp/mdlive.log"),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: Config = toml::from_str(r#"export_dir = "/exports""#).unwrap();
        assert_eq!(config.export_dir, PathBuf::from("/exports"));
        assert_eq!(config.session_dir, Config::default().session_dir);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_unknown_variable_keeps_path() {
        let path = PathBuf::from("$MDLIVE_SURELY_UNSET_VAR/x");
        assert_eq!(expand_or_keep(path.clone()), path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_or_default_from_path(&non_existent_config).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_config_is_not_replaced_by_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "log_file = 3").unwrap();

        let result = Config::load_or_default_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_malformed_config_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "session_dir = [").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            session_dir: PathBuf::from("/tmp/session"),
            export_dir: PathBuf::from("/tmp/export"),
            log_file: PathBuf::from("/tmp/mdlive.log"),
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_config_with_env_var_in_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, r#"session_dir = "$MDLIVE_TEST_ROOT/session""#).unwrap();

        unsafe {
            env::set_var("MDLIVE_TEST_ROOT", "/custom/root");
        }
        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        unsafe {
            env::remove_var("MDLIVE_TEST_ROOT");
        }

        assert_eq!(config.session_dir, PathBuf::from("/custom/root/session"));
    }
}

use crate::core::transfer::ImportMode;
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const REMOTE_URL_ENV: &str = "QUOTEGEN_REMOTE_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
    pub remote: Option<RemoteConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Durable storage: the quote list and the selected category
    pub data_dir: PathBuf,
    /// Session storage: the last shown quote
    pub session_dir: PathBuf,
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default)]
    pub import_mode: ImportMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub url: String,
    #[serde(default = "default_sync_interval")]
    pub sync_interval_secs: u64,
    #[serde(default = "default_category")]
    pub default_category: String,
    #[serde(default = "default_true")]
    pub push_on_add: bool,
    #[serde(default = "default_true")]
    pub sync_on_import: bool,
}

fn default_true() -> bool {
    true
}

fn default_sync_interval() -> u64 {
    30
}

fn default_category() -> String {
    "General".to_string()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: "https://jsonplaceholder.typicode.com/posts".to_string(),
            sync_interval_secs: default_sync_interval(),
            default_category: default_category(),
            push_on_add: true,
            sync_on_import: true,
        }
    }
}

impl RemoteConfig {
    pub fn sync_interval(&self) -> Duration {
        Duration::from_secs(self.sync_interval_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quotegen");

        Self {
            general: GeneralConfig {
                data_dir,
                session_dir: std::env::temp_dir().join("quotegen-session"),
                color: true,
                import_mode: ImportMode::Merge,
            },
            remote: Some(RemoteConfig::default()),
        }
    }
}

impl Config {
    /// Load `config_path`, writing the defaults there first if it does not exist
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .map_err(|e| AppError::Io(e.to_string()))?;
            Self::parse(&content)?
        } else {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            default_config
        };

        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(REMOTE_URL_ENV)
            && !url.trim().is_empty()
        {
            let remote = self.remote.get_or_insert_with(RemoteConfig::default);
            remote.url = url.trim().to_string();
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.general.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory cannot be empty".to_string()));
        }

        if self.general.session_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Session directory cannot be empty".to_string(),
            ));
        }

        if let Some(remote) = &self.remote {
            if remote.url.trim().is_empty() {
                return Err(AppError::Config("Remote URL cannot be empty".to_string()));
            }
            if !remote.url.starts_with("http://") && !remote.url.starts_with("https://") {
                return Err(AppError::Config(format!(
                    "Remote URL must be http(s): {}",
                    remote.url
                )));
            }
            if remote.sync_interval_secs == 0 {
                return Err(AppError::Config(
                    "Sync interval must be at least one second".to_string(),
                ));
            }
            if remote.default_category.trim().is_empty() {
                return Err(AppError::Config(
                    "Default category cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quotegen")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.import_mode, ImportMode::Merge);
        assert_eq!(config.remote.unwrap().sync_interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_fills_defaults() {
        let config = Config::parse(
            r#"
            [general]
            data_dir = "/tmp/q"
            session_dir = "/tmp/q-session"

            [remote]
            url = "http://localhost:3000/quotes"
            "#,
        )
        .unwrap();

        assert!(config.general.color);
        let remote = config.remote.unwrap();
        assert_eq!(remote.default_category, "General");
        assert_eq!(remote.sync_interval_secs, 30);
        assert!(remote.push_on_add);
    }

    #[test]
    fn test_remote_section_is_optional() {
        let config = Config::parse(
            r#"
            [general]
            data_dir = "/tmp/q"
            session_dir = "/tmp/q-session"
            import_mode = "replace"
            "#,
        )
        .unwrap();

        assert!(config.remote.is_none());
        assert_eq!(config.general.import_mode, ImportMode::Replace);
    }

    #[test]
    fn test_validate_rejects_bad_remote() {
        let mut config = Config::default();
        if let Some(remote) = config.remote.as_mut() {
            remote.sync_interval_secs = 0;
        }
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let mut config = Config::default();
        if let Some(remote) = config.remote.as_mut() {
            remote.url = "ftp://example.com".to_string();
        }
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_load_custom_writes_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.toml");

        let config = Config::load_custom(&path).unwrap();

        assert!(path.exists());
        let reloaded = Config::load_custom(&path).unwrap();
        assert_eq!(reloaded.general.data_dir, config.general.data_dir);
    }

    #[test]
    fn test_load_custom_reports_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "general = 5").unwrap();

        assert!(matches!(Config::load_custom(&path), Err(AppError::Config(_))));
    }
}

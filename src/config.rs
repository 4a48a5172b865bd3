use crate::core::data::Prompt;
use crate::dispatch::OverlapPolicy;
use crate::render::Escaping;
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SERVER_URL_ENV: &str = "IDEASCOUT_SERVER_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_presets")]
    pub presets: Vec<String>,
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub server_url: String,
    #[serde(default)]
    pub escaping: Escaping,
    #[serde(default)]
    pub overlap: OverlapPolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

fn default_presets() -> Vec<String> {
    [
        "🚀 Fintech",
        "🏥 Healthcare",
        "🌱 Sustainability",
        "🎓 EdTech",
        "🛒 E-commerce",
        "🤖 AI Tools",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            presets: default_presets(),
            general: GeneralConfig {
                server_url: "http://127.0.0.1:5000".to_string(),
                escaping: Escaping::Html,
                overlap: OverlapPolicy::LastCompleted,
                timeout_secs: None,
                color: true,
            },
        }
    }
}

impl Config {
    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            Config::default().save_to(&config_path)?;
        }
        Ok(())
    }

    /// Load `config_path`, layer the environment and command-line overrides on
    /// top, then validate the merged result once
    pub fn resolve(config_path: &Path, server: Option<&str>, raw: bool) -> AppResult<Self> {
        let mut config = Self::load_custom(config_path)?;
        if let Some(server) = server {
            config.general.server_url = server.trim().to_string();
        }
        if raw {
            config.general.escaping = Escaping::Raw;
        }
        config.validate()?;
        Ok(config)
    }

    /// Load from `config_path`, writing defaults there first when it is missing.
    ///
    /// Environment overrides are applied; the result is not validated.
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        let mut config = if config_path.exists() {
            let content =
                std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;
            toml::from_str::<Config>(&content)
                .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?
        } else {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            default_config
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(SERVER_URL_ENV).filter(|u| !u.trim().is_empty()) {
            tracing::debug!(server_url = %url, "server url overridden from environment");
            self.general.server_url = url.trim().to_string();
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        let url = self.general.server_url.trim();
        if url.is_empty() {
            return Err(AppError::Config("Server URL cannot be empty".to_string()));
        }

        let parsed = reqwest::Url::parse(url)
            .map_err(|e| AppError::Config(format!("Invalid server URL '{}': {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "Server URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        if self.general.timeout_secs == Some(0) {
            return Err(AppError::Config(
                "timeout_secs must be positive when set".to_string(),
            ));
        }

        for label in &self.presets {
            if Prompt::from_preset_label(label).is_none() {
                return Err(AppError::Config(format!(
                    "Preset '{}' has no text left after removing decoration",
                    label
                )));
            }
        }

        Ok(())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::System(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ideascout")
            .join("config.toml")
    }

    /// Endpoint the dispatcher posts prompts to
    pub fn endpoint(&self) -> String {
        format!(
            "{}/generate_ideas",
            self.general.server_url.trim().trim_end_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoint(), "http://127.0.0.1:5000/generate_ideas");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let mut config = Config::default();
        config.general.server_url = "https://ideas.example.com/".to_string();
        assert_eq!(config.endpoint(), "https://ideas.example.com/generate_ideas");
    }

    #[test]
    fn test_load_custom_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_custom(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.presets, default_presets());
    }

    #[test]
    fn test_load_custom_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
presets = ["🎮 Gaming"]

[general]
server_url = "http://localhost:8080"
escaping = "raw"
overlap = "latest-only"
timeout_secs = 30
"#,
        )
        .unwrap();

        let config = Config::load_custom(&path).unwrap();
        assert_eq!(config.general.escaping, Escaping::Raw);
        assert_eq!(config.general.overlap, OverlapPolicy::LatestOnly);
        assert_eq!(config.general.timeout_secs, Some(30));
        assert!(config.general.color);
        assert_eq!(config.presets, vec!["🎮 Gaming".to_string()]);
    }

    const BAD_SERVER: &str = r#"
[general]
server_url = "not a url"
"#;

    #[test]
    fn test_server_flag_replaces_bad_file_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, BAD_SERVER).unwrap();

        let config = Config::resolve(&path, Some(" http://127.0.0.1:9 "), true).unwrap();
        assert_eq!(config.general.server_url, "http://127.0.0.1:9");
        assert_eq!(config.general.escaping, Escaping::Raw);
    }

    #[test]
    fn test_resolve_rejects_bad_file_url_without_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, BAD_SERVER).unwrap();

        assert!(Config::load_custom(&path).is_ok());
        assert!(matches!(
            Config::resolve(&path, None, false),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_env_override() {
        let mut config = Config::default();
        config.apply_overrides(|key| {
            (key == SERVER_URL_ENV).then(|| "https://override.example.com".to_string())
        });
        assert_eq!(config.general.server_url, "https://override.example.com");

        config.apply_overrides(|_| Some("   ".to_string()));
        assert_eq!(config.general.server_url, "https://override.example.com");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.general.server_url = "ftp://example.com".to_string();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let mut config = Config::default();
        config.general.server_url = String::new();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.presets.push("✨!!".to_string());
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.general.timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }
}

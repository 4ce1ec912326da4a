//! Configuration management for chatpane
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    AUTO_CLOSE_MS, DEFAULT_THINKING_PHRASES, ELAPSED_TICK_MS, INPUT_PLACEHOLDER, PANEL_TRANSITION_MS,
    PHRASE_ROTATE_MS, PROMPT_STAGGER_MS, PROMPT_START_DELAY_MS, TYPEWRITER_SPEED_MS,
};
use crate::error::ChatError;
use crate::ui::theme::ThemeMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub timing: TimingConfig,
    pub thinking: ThinkingConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme: "dark" or "light"
    pub theme: ThemeMode,
    /// Show message timestamps
    pub show_timestamps: bool,
    /// Start with the navigation rail expanded
    pub nav_expanded: bool,
    /// Maximum input length in characters (0 = unlimited)
    pub input_max_length: usize,
    /// Placeholder shown in the empty input box
    pub placeholder: String,
}

/// Animation timing, all values in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub open_close_ms: u64,
    pub typewriter_speed_ms: u64,
    pub prompt_start_delay_ms: u64,
    pub prompt_stagger_ms: u64,
    pub auto_close_ms: u64,
    pub phrase_rotate_ms: u64,
    pub elapsed_tick_ms: u64,
}

/// Thinking indicator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThinkingConfig {
    /// Phrases drawn at random while a response is pending
    pub phrases: Vec<String>,
    /// Report the total thinking time when the indicator stops
    pub report_completion: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
    /// Minimum level: error, warn, info, debug or trace
    pub level: String,
    /// Log file path; defaults to the XDG data directory
    pub file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            show_timestamps: true,
            nav_expanded: false,
            input_max_length: 4000,
            placeholder: INPUT_PLACEHOLDER.to_string(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            open_close_ms: PANEL_TRANSITION_MS,
            typewriter_speed_ms: TYPEWRITER_SPEED_MS,
            prompt_start_delay_ms: PROMPT_START_DELAY_MS,
            prompt_stagger_ms: PROMPT_STAGGER_MS,
            auto_close_ms: AUTO_CLOSE_MS,
            phrase_rotate_ms: PHRASE_ROTATE_MS,
            elapsed_tick_ms: ELAPSED_TICK_MS,
        }
    }
}

impl Default for ThinkingConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_THINKING_PHRASES.iter().map(|p| p.to_string()).collect(),
            report_completion: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl TimingConfig {
    pub fn open_close(&self) -> Duration {
        Duration::from_millis(self.open_close_ms)
    }

    pub fn typewriter_speed(&self) -> Duration {
        Duration::from_millis(self.typewriter_speed_ms)
    }

    pub fn prompt_start_delay(&self) -> Duration {
        Duration::from_millis(self.prompt_start_delay_ms)
    }

    pub fn prompt_stagger(&self) -> Duration {
        Duration::from_millis(self.prompt_stagger_ms)
    }

    pub fn auto_close(&self) -> Duration {
        Duration::from_millis(self.auto_close_ms)
    }

    pub fn phrase_rotate(&self) -> Duration {
        Duration::from_millis(self.phrase_rotate_ms)
    }

    pub fn elapsed_tick(&self) -> Duration {
        Duration::from_millis(self.elapsed_tick_ms)
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }

    /// Resolve the log file location
    pub fn resolve_file(&self) -> Result<PathBuf> {
        if let Some(path) = &self.file {
            return Ok(path.clone());
        }
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .map(|dir| dir.join("chatpane").join("chatpane.log"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine a directory for the log file"))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// The file configuration is read from, or the default location when none exists yet
    pub fn config_path() -> Result<PathBuf> {
        match Self::find_config_file() {
            Some(path) => Ok(path),
            None => Self::get_default_config_path(),
        }
    }

    /// Write this configuration to `path`, creating parent directories
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))
    }

    /// Record `theme` as `ui.theme` in the file at `path`, keeping its other settings
    pub fn save_theme<P: AsRef<Path>>(path: P, theme: ThemeMode) -> Result<()> {
        let mut config = if path.as_ref().exists() {
            Self::load_from_file(&path)?
        } else {
            Self::default()
        };
        config.ui.theme = theme;
        config.save_to_file(&path)?;
        log::info!("Saved theme '{}' to {}", theme.label(), path.as_ref().display());
        Ok(())
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("chatpane.toml");
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        let xdg_config = dirs::config_dir()?.join("chatpane").join("config.toml");
        xdg_config.exists().then_some(xdg_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.thinking.phrases.is_empty() {
            anyhow::bail!(ChatError::InvalidConfig("thinking.phrases must contain at least one phrase".into()));
        }
        if self.thinking.phrases.iter().any(|p| p.trim().is_empty()) {
            anyhow::bail!(ChatError::InvalidConfig("thinking.phrases cannot contain blank phrases".into()));
        }

        let timings = [
            ("open_close_ms", self.timing.open_close_ms),
            ("typewriter_speed_ms", self.timing.typewriter_speed_ms),
            ("auto_close_ms", self.timing.auto_close_ms),
            ("phrase_rotate_ms", self.timing.phrase_rotate_ms),
            ("elapsed_tick_ms", self.timing.elapsed_tick_ms),
        ];
        for (name, value) in timings {
            if value == 0 {
                anyhow::bail!(ChatError::InvalidConfig(format!("timing.{} must be greater than zero", name)));
            }
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# chatpane configuration file\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("Generated default configuration file: {}", path.as_ref().display());
        Ok(())
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("chatpane").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timing.open_close(), Duration::from_millis(600));
        assert_eq!(config.thinking.phrases.len(), 15);
    }

    #[test]
    fn test_empty_phrases_rejected() {
        let mut config = Config::default();
        config.thinking.phrases.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut config = Config::default();
        config.timing.typewriter_speed_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("typewriter_speed_ms"));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [ui]
            theme = "light"

            [timing]
            typewriter_speed_ms = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme, ThemeMode::Light);
        assert_eq!(config.timing.typewriter_speed_ms, 10);
        assert_eq!(config.timing.open_close_ms, 600);
        assert!(config.ui.show_timestamps);
    }

    #[test]
    fn test_generate_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        Config::generate_default_config(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.timing.auto_close_ms, 800);
        assert_eq!(loaded.thinking.phrases, Config::default().thinking.phrases);
    }
}

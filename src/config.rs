use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Roster, DEFAULT_COLS, DEFAULT_ROWS, LINE_LEN};

/// Board size and player colors for a new game.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    /// Player colors in turn order.
    pub players: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            height: DEFAULT_ROWS,
            width: DEFAULT_COLS,
            players: vec!["red".to_string(), "yellow".to_string()],
        }
    }
}

/// Terminal front-end settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll interval in milliseconds.
    pub tick_rate_ms: u64,
    pub show_help: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            tick_rate_ms: 100,
            show_help: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.height == 0 {
            return Err(ConfigError::Validation("game.height must be > 0".into()));
        }
        if self.game.width == 0 {
            return Err(ConfigError::Validation("game.width must be > 0".into()));
        }
        if self.game.height < LINE_LEN && self.game.width < LINE_LEN {
            return Err(ConfigError::Validation(format!(
                "game.height or game.width must be >= {LINE_LEN}"
            )));
        }
        // Column keys 1-9 are the only direct column shortcuts.
        if self.game.width > 9 {
            return Err(ConfigError::Validation("game.width must be <= 9".into()));
        }
        if self.game.height > 20 {
            return Err(ConfigError::Validation("game.height must be <= 20".into()));
        }
        Roster::from_colors(&self.game.players)
            .map_err(|e| ConfigError::Validation(format!("game.players: {e}")))?;

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.tick_rate_ms must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

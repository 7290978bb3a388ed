use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::tree::{LabelMarkup, PathTreeRenderer, DEFAULT_ROOT_LABEL};

/// Longest allowed delay between animation frames.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub tui: TuiConfig,
    pub play: PlayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Label of the tree root
    pub root_label: String,
    /// Label markup: plain, html
    pub label_markup: LabelMarkup,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Terminal window title
    pub title: String,
    /// Expand the whole chain on start (otherwise only the root)
    pub expand_all: bool,
    /// Show the step number next to each state
    pub show_step_numbers: bool,
    /// Highlight the blank tile
    pub highlight_blank: bool,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Delay between frames in milliseconds
    pub delay_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            root_label: DEFAULT_ROOT_LABEL.to_string(),
            label_markup: LabelMarkup::Plain,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            title: "Puzzle Solution Tree".to_string(),
            expand_all: true,
            show_step_numbers: true,
            highlight_blank: true,
            tick_rate_ms: 250,
        }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self { delay_ms: 1000 }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location if it exists.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(default) if default.is_file() => Self::from_file(&default)?,
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// `<config dir>/puzzle-path-tree/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("puzzle-path-tree").join("config.toml"))
    }

    fn from_file(path: &Path) -> std::result::Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Reading configuration");

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.display.root_label.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "display.root_label must not be empty".into(),
            ));
        }
        if self.tui.title.trim().is_empty() {
            return Err(ConfigError::Invalid("tui.title must not be empty".into()));
        }
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid(
                "tui.tick_rate_ms must be greater than 0".into(),
            ));
        }
        if !(1..=MAX_DELAY_MS).contains(&self.play.delay_ms) {
            return Err(ConfigError::Invalid(format!(
                "play.delay_ms must be 1-{}, got {}",
                MAX_DELAY_MS, self.play.delay_ms
            )));
        }
        Ok(())
    }

    /// Renderer set up from the `[display]` section.
    pub fn renderer(&self) -> PathTreeRenderer {
        PathTreeRenderer::new()
            .with_root_label(self.display.root_label.clone())
            .with_markup(self.display.label_markup)
    }
}

//! Configuration file support
//!
//! Loads settings from ~/.codepress.toml (or
//! %USERPROFILE%\.codepress.toml on Windows). Missing file means
//! defaults; command-line flags override whatever was loaded.
//!
//! Example:
//! ```text
//! # codepress configuration
//! theme = "catppuccin-mocha"
//! chunk-size = 55
//! line-height = 11.0
//! font-size = 8.0
//! include-project = true
//! ```

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::theme::DEFAULT_THEME;

/// Configuration settings threaded through the rendering run
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Selected theme name
    pub theme: String,
    /// Maximum lines per rendered chunk
    pub chunk_size: usize,
    /// Line height in points
    pub line_height: f32,
    /// Font size in points
    pub font_size: f32,
    /// Whether to pull in sibling project files
    pub include_project: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            chunk_size: 55,
            line_height: 11.0,
            font_size: 8.0,
            include_project: true,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".codepress.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".codepress.toml"))
        }
    }

    /// Load configuration from file, falling back to defaults
    pub fn load() -> Self {
        match Self::config_path().and_then(|path| fs::read_to_string(path).ok()) {
            Some(contents) => Self::parse(&contents),
            None => Config::default(),
        }
    }

    /// Parse config file contents; a malformed file is reported and
    /// ignored rather than aborting the run
    fn parse(contents: &str) -> Self {
        match toml::from_str(contents) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: ignoring malformed config file: {}", e);
                Config::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, DEFAULT_THEME);
        assert_eq!(config.chunk_size, 55);
        assert_eq!(config.line_height, 11.0);
        assert_eq!(config.font_size, 8.0);
        assert!(config.include_project);
    }

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            r#"
theme = "catppuccin-mocha"
chunk-size = 40
line-height = 12.5
font-size = 9.0
include-project = false
"#,
        );
        assert_eq!(config.theme, "catppuccin-mocha");
        assert_eq!(config.chunk_size, 40);
        assert_eq!(config.line_height, 12.5);
        assert_eq!(config.font_size, 9.0);
        assert!(!config.include_project);
    }

    #[test]
    fn test_parse_partial_keeps_defaults() {
        let config = Config::parse("theme = \"kanagawa-lotus\"\n");
        assert_eq!(config.theme, "kanagawa-lotus");
        assert_eq!(config.chunk_size, 55);
    }

    #[test]
    fn test_parse_malformed_falls_back() {
        let config = Config::parse("chunk-size = \"not a number\"");
        assert_eq!(config.chunk_size, 55);
    }
}

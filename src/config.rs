//! Configuration management for the resume parser

use crate::error::{Result, ResumeParserError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parsing: ParsingConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Knobs for the profile heuristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// How many leading lines the name guesser inspects
    pub name_scan_lines: usize,
    /// Lines longer than this (in characters) are never a name
    pub name_max_chars: usize,
    /// Minimum share of capitalized words for a name candidate
    pub name_min_capitalized_ratio: f32,
    /// Skill tokens longer than this (in characters) are dropped
    pub max_skill_chars: usize,
    pub max_portfolio_urls: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Number of job description keywords used for coverage
    pub top_keywords: usize,
    pub min_keyword_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            name_scan_lines: 7,
            name_max_chars: 70,
            name_min_capitalized_ratio: 0.6,
            max_skill_chars: 40,
            max_portfolio_urls: 3,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            top_keywords: 30,
            min_keyword_chars: 3,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            format: OutputFormat::Console,
            color_output: true,
        }
    }
}

impl Config {
    /// Load the user configuration, writing the defaults on first use
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ResumeParserError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeParserError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-parser")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::from_toml("[scoring]\ntop_keywords = 10\n").unwrap();

        assert_eq!(config.scoring.top_keywords, 10);
        assert_eq!(config.scoring.min_keyword_chars, 3);
        assert_eq!(config.parsing, ParsingConfig::default());
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let result = Config::from_toml("[parsing]\nname_scan_lines = \"seven\"\n");
        assert!(matches!(result, Err(ResumeParserError::Configuration(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }
}

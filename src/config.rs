use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::extract::date::MonthOverflow;
use crate::extract::vocabulary::Vocabulary;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct JourneyConfig {
    pub server: ServerConfig,
    pub extractor: ExtractorConfig,
    pub agenda: AgendaConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Built-in vocabularies to merge, in order.
    pub locales: Vec<String>,
    /// Extra vocabulary TOML files merged after the built-in locales.
    pub vocabulary_files: Vec<String>,
    pub keyword_limit: usize,
    pub min_title_len: usize,
    pub max_action_len: usize,
    pub dedupe: bool,
    pub month_overflow: MonthOverflow,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AgendaConfig {
    pub max_priorities_per_day: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            locales: vec!["en".into(), "id".into()],
            vocabulary_files: Vec::new(),
            keyword_limit: 3,
            min_title_len: 3,
            max_action_len: 120,
            dedupe: true,
            month_overflow: MonthOverflow::Clamp,
        }
    }
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            max_priorities_per_day: 3,
        }
    }
}

/// Returns `~/.journey/`
pub fn default_journey_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".journey")
}

/// Returns the default config file path: `~/.journey/config.toml`, or
/// `JOURNEY_CONFIG` when set.
pub fn default_config_path() -> PathBuf {
    match std::env::var("JOURNEY_CONFIG") {
        Ok(path) => expand_tilde(&path),
        Err(_) => default_journey_dir().join("config.toml"),
    }
}

impl JourneyConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            JourneyConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (JOURNEY_LOG_LEVEL, JOURNEY_LOCALES).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("JOURNEY_LOG_LEVEL") {
            self.server.log_level = val;
        }
        if let Ok(val) = std::env::var("JOURNEY_LOCALES") {
            self.extractor.locales = parse_locales(&val);
        }
    }
}

impl ExtractorConfig {
    /// Merge the configured built-in locales, then every vocabulary file.
    pub fn load_vocabulary(&self) -> Result<Vocabulary> {
        let mut vocabulary = Vocabulary::for_locales(&self.locales)?;
        for file in &self.vocabulary_files {
            let path = expand_tilde(file);
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read vocabulary file: {}", path.display()))?;
            let extra = Vocabulary::from_toml(&contents)
                .with_context(|| format!("failed to parse vocabulary file: {}", path.display()))?;
            info!(path = %path.display(), "vocabulary file merged");
            vocabulary.merge(extra);
        }
        Ok(vocabulary)
    }

    /// Compile an extractor from this section.
    pub fn build_extractor(&self) -> Result<crate::extract::Extractor> {
        let vocabulary = self.load_vocabulary()?;
        crate::extract::Extractor::new(self, vocabulary).context("failed to compile vocabulary")
    }
}

/// Split a comma-separated locale list, dropping blanks.
fn parse_locales(val: &str) -> Vec<String> {
    val.split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_lowercase)
        .collect()
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use yaml_rust2::YamlEmitter;

use crate::yaml_include::load_yaml_with_includes;

/// Which summary tables the reporter prints.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    /// Head of the ranked table plus the first adjusted predictions.
    #[default]
    Preview,
    /// Customer table with top categories, segment counts and analysis.
    Store,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse YAML in {path}: {message}")]
    Yaml { path: String, message: String },
    #[error("Failed to resolve include '{include}' from {path}")]
    Include { path: String, include: String },
    #[error("Failed to deserialize config: {0}")]
    Deserialize(#[from] serde_yml::Error),
    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CommonConfig {
    pub project_name: String,
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            project_name: "rfm".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Largest accepted `generator.recency_days.high`, one hundred years.
pub const MAX_RECENCY_DAYS: i64 = 36_525;

/// Half-open integer range `[low, high)` used by the data generator.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RangeConfig {
    pub low: i64,
    pub high: i64,
}

impl RangeConfig {
    pub const fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub customers: usize,
    pub seed: u64,
    pub recency_days: RangeConfig,
    pub frequency: RangeConfig,
    pub monetary: RangeConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            customers: 100,
            seed: 0,
            recency_days: RangeConfig::new(1, 100),
            frequency: RangeConfig::new(1, 10),
            monetary: RangeConfig::new(100, 5000),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RankingConfig {
    pub bins: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self { bins: 3 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RecommendationConfig {
    /// One base-score vector is drawn per category, in this order.
    pub categories: Vec<String>,
    /// Number of categories listed per customer; 0 disables the selection.
    pub top_n: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            categories: vec!["prediction".to_string()],
            top_n: 0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    pub style: ReportStyle,
    pub format: ReportFormat,
    pub head_rows: usize,
    pub preview_recommendations: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            style: ReportStyle::Preview,
            format: ReportFormat::Text,
            head_rows: 5,
            preview_recommendations: 5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub common: CommonConfig,
    pub generator: GeneratorConfig,
    pub ranking: RankingConfig,
    pub recommendation: RecommendationConfig,
    pub report: ReportConfig,
}

impl Config {
    /// Loads a config file, resolving `!include` lines relative to it.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let merged = load_yaml_with_includes(config_path.as_ref())?;

        let mut contents = String::new();
        {
            let mut emitter = YamlEmitter::new(&mut contents);
            emitter.dump(&merged).map_err(|e| ConfigError::Yaml {
                path: config_path.as_ref().display().to_string(),
                message: e.to_string(),
            })?;
        }

        let config: Config = serde_yml::from_str(&contents)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, range) in [
            ("generator.recency_days", self.generator.recency_days),
            ("generator.frequency", self.generator.frequency),
            ("generator.monetary", self.generator.monetary),
        ] {
            if range.low >= range.high {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("empty range [{}, {})", range.low, range.high),
                });
            }
        }
        if self.generator.recency_days.low < 0 {
            return Err(ConfigError::Invalid {
                field: "generator.recency_days",
                reason: "days since last purchase cannot be negative".to_string(),
            });
        }
        if self.generator.recency_days.high > MAX_RECENCY_DAYS {
            return Err(ConfigError::Invalid {
                field: "generator.recency_days",
                reason: format!(
                    "upper bound {} exceeds {MAX_RECENCY_DAYS} days",
                    self.generator.recency_days.high
                ),
            });
        }
        if self.ranking.bins == 0 {
            return Err(ConfigError::Invalid {
                field: "ranking.bins",
                reason: "at least one bin is required".to_string(),
            });
        }
        if self.recommendation.categories.is_empty() {
            return Err(ConfigError::Invalid {
                field: "recommendation.categories",
                reason: "at least one category is required".to_string(),
            });
        }
        Ok(())
    }
}

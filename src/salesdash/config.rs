use crate::chart::ChartType;
use crate::error::{DashError, Result};
use crate::generator::DEFAULT_RECORD_COUNT;
use crate::page::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by [`DashConfig::set`], in display order.
pub const CONFIG_KEYS: [&str; 5] = ["record-count", "page-size", "chart-type", "theme", "seed"];

/// Presentation defaults, stored in `<config dir>/config.json`.
///
/// Only startup settings live here. Records and view state are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashConfig {
    /// Number of mock records generated at startup
    #[serde(default = "default_record_count")]
    pub record_count: usize,

    /// Rows per table page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default)]
    pub chart_type: ChartType,

    #[serde(default)]
    pub theme: Theme,

    /// Fixed seed for the mock data; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_record_count() -> usize {
    DEFAULT_RECORD_COUNT
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            page_size: DEFAULT_PAGE_SIZE,
            chart_type: ChartType::default(),
            theme: Theme::default(),
            seed: None,
        }
    }
}

impl DashConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DashConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Current value of `key` as display text.
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "record-count" => self.record_count.to_string(),
            "page-size" => self.page_size.to_string(),
            "chart-type" => self.chart_type.to_string(),
            "theme" => self.theme.to_string(),
            "seed" => self
                .seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "random".to_string()),
            other => return Err(DashError::Config(format!("Unknown config key: {}", other))),
        };
        Ok(value)
    }

    /// Parses and stores `value` under `key`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "record-count" => {
                self.record_count = value
                    .trim()
                    .parse()
                    .map_err(|_| DashError::Config(format!("record-count must be a whole number, got '{}'", value)))?;
            }
            "page-size" => {
                let size: usize = value.trim().parse().map_err(|_| {
                    DashError::Config(format!("page-size must be a whole number, got '{}'", value))
                })?;
                self.page_size = validate_page_size(size)?;
            }
            "chart-type" => self.chart_type = value.parse()?,
            "theme" => self.theme = value.parse()?,
            "seed" => {
                self.seed = match value.trim() {
                    "random" | "" => None,
                    raw => Some(raw.parse().map_err(|_| {
                        DashError::Config(format!("seed must be a number or 'random', got '{}'", raw))
                    })?),
                };
            }
            other => return Err(DashError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

/// Accepts only the page sizes the table offers.
pub fn validate_page_size(size: usize) -> Result<usize> {
    if PAGE_SIZE_OPTIONS.contains(&size) {
        Ok(size)
    } else {
        Err(DashError::Config(format!(
            "page size must be one of {:?}, got {}",
            PAGE_SIZE_OPTIONS, size
        )))
    }
}

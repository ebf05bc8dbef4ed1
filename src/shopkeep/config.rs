use crate::error::{Result, ShopkeepError};
use crate::model::SortOption;
use crate::query::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for shopkeep, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopkeepConfig {
    /// Products per page in listings
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Ordering used when a listing does not ask for one
    #[serde(default)]
    pub default_sort: SortOption,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ShopkeepConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: SortOption::default(),
        }
    }
}

impl ShopkeepConfig {
    pub const KEYS: [&'static str; 2] = ["page-size", "default-sort"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShopkeepError::Io)?;
        let config: ShopkeepConfig =
            serde_json::from_str(&content).map_err(ShopkeepError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShopkeepError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShopkeepError::Serialization)?;
        fs::write(config_path, content).map_err(ShopkeepError::Io)?;
        Ok(())
    }

    /// Current value of `key`, rendered for display.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "page-size" => Ok(self.page_size.to_string()),
            "default-sort" => Ok(self.default_sort.to_string()),
            other => Err(ShopkeepError::Api(format!("Unknown config key: {}", other))),
        }
    }

    /// Parses and stores `value` under `key`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "page-size" => {
                let size: usize = value
                    .parse()
                    .ok()
                    .filter(|n| *n >= 1)
                    .ok_or_else(|| {
                        ShopkeepError::Api(format!("page-size must be a positive integer, got '{}'", value))
                    })?;
                self.page_size = size;
            }
            "default-sort" => {
                self.default_sort = value.parse().map_err(ShopkeepError::Api)?;
            }
            other => return Err(ShopkeepError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

//! tierprice configuration
//!
//! Loaded from a YAML file (`.tierprice.yaml` by default). Every field has
//! a default, so an empty file is a valid configuration. Tiers themselves
//! are fixed and cannot be configured.
//!
//! ```yaml
//! version: 1
//! dispatch:
//!   mode: multiplier        # or discounted_price
//! demo:
//!   price: "100"
//!   codes: [1, 5, 7]
//! ```

use crate::catalog::TierCode;
use crate::error::{Error, Result};
use crate::pricing::ensure_exact_price;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up by [`Config::load_from_dir`]
pub const CONFIG_FILE: &str = ".tierprice.yaml";

/// Supported schema version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "tierprice config")]
pub struct Config {
    /// Schema version for migrations
    #[serde(default = "default_version")]
    pub version: u32,

    /// Dispatch path settings
    #[serde(default)]
    pub dispatch: DispatchConfig,

    /// Demo driver settings
    #[serde(default)]
    pub demo: DemoConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            dispatch: DispatchConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

/// What the dispatch path returns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    /// Return the raw discount multiplier, ignoring the price
    #[default]
    Multiplier,
    /// Return `price * discount`, matching the lookup path
    DiscountedPrice,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DispatchConfig {
    #[serde(default)]
    pub mode: DispatchMode,
}

/// Demo driver inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DemoConfig {
    /// Sample price, as a decimal string or integer
    #[serde(default = "default_demo_price", deserialize_with = "exact_price")]
    #[schemars(with = "String")]
    pub price: Decimal,

    /// Tier codes to price, in order
    #[serde(default = "default_demo_codes")]
    pub codes: Vec<TierCode>,
}

/// Prices as YAML text or integers; floats are refused since they are not exact
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Int(i64),
    Text(String),
}

fn exact_price<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    match RawPrice::deserialize(deserializer) {
        Ok(RawPrice::Int(n)) => Ok(Decimal::from(n)),
        Ok(RawPrice::Text(s)) => Decimal::from_str_exact(s.trim())
            .map_err(|e| de::Error::custom(format!("invalid price '{}': {}", s, e))),
        Err(_) => Err(de::Error::custom(
            "price must be a quoted decimal string or an integer",
        )),
    }
}

fn default_demo_price() -> Decimal {
    Decimal::from(100)
}

fn default_demo_codes() -> Vec<TierCode> {
    vec![1, 5, 7]
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            price: default_demo_price(),
            codes: default_demo_codes(),
        }
    }
}

impl Config {
    /// Parse configuration from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_norway::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_yaml(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Load `.tierprice.yaml` from a directory, if present
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let file = dir.join(CONFIG_FILE);
        if !file.exists() {
            return Ok(None);
        }
        Self::load(&file).map(Some)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_norway::to_string(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(Error::Config(format!(
                "Unsupported config version: {}",
                self.version
            )));
        }
        ensure_exact_price(self.demo.price)?;
        Ok(())
    }
}

//! Server configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shop_api::CalculatorLimits;
use shop_observability::LogConfig;

/// Server configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Shop API listener.
    #[serde(default)]
    pub shop: ShopConfig,

    /// Calculator API listener and limits.
    #[serde(default)]
    pub calculator: CalculatorConfig,

    /// Log level and format, shared by both services.
    #[serde(default)]
    pub logging: LogConfig,
}

impl ServerConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to render config as TOML")
    }
}

/// Shop API listener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port (default: 8000).
    #[serde(default = "default_shop_port")]
    pub port: u16,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_shop_port(),
        }
    }
}

/// Calculator API listener and input ceilings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port (default: 8001).
    #[serde(default = "default_calculator_port")]
    pub port: u16,

    /// Largest `n` accepted by `/factorial`.
    #[serde(default = "default_max_factorial_n")]
    pub max_factorial_n: u64,

    /// Largest `n` accepted by `/fibonacci`.
    #[serde(default = "default_max_fibonacci_n")]
    pub max_fibonacci_n: u64,
}

impl CalculatorConfig {
    pub fn limits(&self) -> CalculatorLimits {
        CalculatorLimits {
            max_factorial_n: self.max_factorial_n,
            max_fibonacci_n: self.max_fibonacci_n,
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_calculator_port(),
            max_factorial_n: default_max_factorial_n(),
            max_fibonacci_n: default_max_fibonacci_n(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_shop_port() -> u16 {
    8000
}

fn default_calculator_port() -> u16 {
    8001
}

fn default_max_factorial_n() -> u64 {
    CalculatorLimits::default().max_factorial_n
}

fn default_max_fibonacci_n() -> u64 {
    CalculatorLimits::default().max_fibonacci_n
}

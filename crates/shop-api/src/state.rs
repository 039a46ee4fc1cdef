//! Shared router state.

use std::sync::Arc;

use shop_core::Shop;
use shop_observability::{LogConfig, MetricsError, MetricsRegistry};

/// Logging and metrics context shared by every request of one service.
#[derive(Debug, Clone)]
pub struct Telemetry {
    /// Service name stamped on every log line.
    pub service: &'static str,
    /// Log level and format.
    pub log: LogConfig,
    /// Aggregated request metrics.
    pub metrics: MetricsRegistry,
}

impl Telemetry {
    pub fn new(service: &'static str, log: LogConfig) -> Result<Self, MetricsError> {
        Ok(Self {
            service,
            log,
            metrics: MetricsRegistry::new()?,
        })
    }
}

/// State of the shop router.
#[derive(Debug, Clone)]
pub struct ShopState {
    pub shop: Arc<Shop>,
    pub telemetry: Telemetry,
}

impl ShopState {
    /// Fresh, empty shop.
    pub fn new(log: LogConfig) -> Result<Self, MetricsError> {
        Ok(Self {
            shop: Arc::new(Shop::new()),
            telemetry: Telemetry::new("shop", log)?,
        })
    }
}

/// Upper bounds on `n` accepted by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLimits {
    pub max_factorial_n: u64,
    pub max_fibonacci_n: u64,
}

impl Default for CalculatorLimits {
    fn default() -> Self {
        Self {
            max_factorial_n: 20_000,
            max_fibonacci_n: 100_000,
        }
    }
}

/// State of the calculator router.
#[derive(Debug, Clone)]
pub struct CalculatorState {
    pub limits: CalculatorLimits,
    pub telemetry: Telemetry,
}

impl CalculatorState {
    pub fn new(limits: CalculatorLimits, log: LogConfig) -> Result<Self, MetricsError> {
        Ok(Self {
            limits,
            telemetry: Telemetry::new("calculator", log)?,
        })
    }
}

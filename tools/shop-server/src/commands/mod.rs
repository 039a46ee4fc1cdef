//! Server commands.

pub mod config;
pub mod serve;

use clap::Args;
use shop_observability::{LogConfig, LogFormat, LogLevel};

/// Listener and logging overrides for a serve command.
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Minimum log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<LogLevel>,

    /// Log line format (json, human)
    #[arg(long)]
    pub log_format: Option<LogFormat>,
}

impl ServeArgs {
    /// Override a host/port pair and the log settings with any flags given.
    pub fn apply(&self, host: &mut String, port: &mut u16, logging: &mut LogConfig) {
        if let Some(h) = &self.host {
            host.clone_from(h);
        }
        if let Some(p) = self.port {
            *port = p;
        }
        if let Some(level) = self.log_level {
            logging.level = level;
        }
        if let Some(format) = self.log_format {
            logging.format = format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    #[test]
    fn test_flags_override_file_values() {
        let mut config = ServerConfig::default();
        let args = ServeArgs {
            port: Some(9100),
            log_level: Some(LogLevel::Debug),
            ..ServeArgs::default()
        };

        args.apply(
            &mut config.shop.host,
            &mut config.shop.port,
            &mut config.logging,
        );
        assert_eq!(config.shop.host, "127.0.0.1");
        assert_eq!(config.shop.port, 9100);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let mut config = ServerConfig::default();
        ServeArgs::default().apply(
            &mut config.calculator.host,
            &mut config.calculator.port,
            &mut config.logging,
        );
        assert_eq!(config, ServerConfig::default());
    }
}

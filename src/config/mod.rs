#[cfg(feature = "cli")]
pub mod args;
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use args::CliConfig;

use crate::core::ConfigProvider;
use crate::domain::model::SourceOptions;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::net::SocketAddr;
use toml_config::TomlConfig;

pub const DEFAULT_SOURCE_PATH: &str = "trab5_editada.csv";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 10000;

/// Fully resolved settings: built-in defaults, then the optional TOML file,
/// then command-line flags and the `PORT` environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub source_path: String,
    pub source: SourceOptions,
    pub host: String,
    pub port: u16,
    pub monitor: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source_path: DEFAULT_SOURCE_PATH.to_string(),
            source: SourceOptions::default(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            monitor: false,
        }
    }
}

impl DashboardConfig {
    pub fn apply_file(mut self, file: &TomlConfig) -> Result<Self> {
        if let Some(source) = &file.source {
            if let Some(path) = &source.path {
                self.source_path = path.clone();
            }
            if let Some(skip_rows) = source.skip_rows {
                self.source.skip_rows = skip_rows;
            }
            if let Some(delimiter) = &source.delimiter {
                self.source.delimiter = validation::validate_delimiter("source.delimiter", delimiter)?;
            }
            if let Some(encoding) = source.encoding {
                self.source.encoding = encoding;
            }
        }

        if let Some(server) = &file.server {
            if let Some(host) = &server.host {
                self.host = host.clone();
            }
            if let Some(port) = server.port {
                self.port = port;
            }
        }

        self.monitor |= file.monitoring_enabled();
        Ok(self)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = validation::validate_host("server.host", &self.host)?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl ConfigProvider for DashboardConfig {
    fn source_path(&self) -> &str {
        &self.source_path
    }

    fn source_options(&self) -> SourceOptions {
        self.source.clone()
    }
}

impl Validate for DashboardConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source.path", &self.source_path)?;
        validation::validate_host("server.host", &self.host)?;
        validation::validate_positive_number("server.port", self.port as usize, 1)?;
        Ok(())
    }
}

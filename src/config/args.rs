use crate::config::toml_config::TomlConfig;
use crate::config::DashboardConfig;
use crate::domain::model::TextEncoding;
use crate::utils::error::Result;
use crate::utils::validation;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "dengue-dashboard")]
#[command(about = "Dengue case dashboard: aggregates a notification file and serves it as charts")]
pub struct CliConfig {
    /// Path to the semicolon-delimited notification file
    #[arg(long)]
    pub data_path: Option<String>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of leading non-data lines in the source file
    #[arg(long)]
    pub skip_rows: Option<usize>,

    /// Field delimiter of the source file
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Text encoding of the source file (latin-1 or utf-8)
    #[arg(long)]
    pub encoding: Option<TextEncoding>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Log memory and timing after each start-up stage")]
    pub monitor: bool,

    #[arg(long, help = "Build the dashboard, print a summary and exit without serving")]
    pub dry_run: bool,
}

impl CliConfig {
    /// Defaults, then the settings file (if any), then explicit flags.
    pub fn resolve(&self) -> Result<DashboardConfig> {
        let mut config = DashboardConfig::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path);
            config = config.apply_file(&TomlConfig::from_file(path)?)?;
        }

        if let Some(path) = &self.data_path {
            config.source_path = path.clone();
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(skip_rows) = self.skip_rows {
            config.source.skip_rows = skip_rows;
        }
        if let Some(delimiter) = &self.delimiter {
            config.source.delimiter = validation::validate_delimiter("--delimiter", delimiter)?;
        }
        if let Some(encoding) = self.encoding {
            config.source.encoding = encoding;
        }
        config.monitor |= self.monitor;

        Ok(config)
    }
}

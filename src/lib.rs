pub mod charts;
pub mod config;
pub mod core;
pub mod domain;
pub mod presenter;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::charts::Dashboard;
pub use crate::config::{cli::LocalStorage, DashboardConfig};
pub use crate::core::engine::{DashboardBuild, DashboardEngine, DashboardPipeline};
pub use crate::utils::error::{DashboardError, Result};

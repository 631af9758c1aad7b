use crate::charts::Dashboard;
use crate::core::{cleaner, loader};
use crate::domain::model::{Aggregates, CaseRecord, RawTable};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::domain::schema::SourceSchema;
use crate::utils::error::Result;
use crate::utils::monitor::StageMonitor;

/// The notification-file pipeline wired to a storage backend and a config.
pub struct DashboardPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    schema: SourceSchema,
}

impl<S: Storage, C: ConfigProvider> DashboardPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            schema: SourceSchema::dengue(),
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for DashboardPipeline<S, C> {
    fn load(&self) -> Result<RawTable> {
        loader::load_source(
            &self.storage,
            self.config.source_path(),
            &self.schema,
            &self.config.source_options(),
        )
    }

    fn clean(&self, table: RawTable) -> Vec<CaseRecord> {
        cleaner::clean(table, &self.schema)
    }

    fn aggregate(&self, records: &[CaseRecord]) -> Aggregates {
        Aggregates::from_records(records)
    }

    fn build_charts(&self, aggregates: &Aggregates) -> Dashboard {
        Dashboard::build(aggregates)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub rows_loaded: usize,
    pub rows_kept: usize,
    pub municipalities: usize,
}

impl BuildStats {
    pub fn rows_dropped(&self) -> usize {
        self.rows_loaded - self.rows_kept
    }
}

/// Result of the one-off start-up run.
#[derive(Debug, Clone)]
pub struct DashboardBuild {
    pub stats: BuildStats,
    pub aggregates: Aggregates,
    pub dashboard: Dashboard,
}

pub struct DashboardEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
}

impl<P: Pipeline> DashboardEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    /// Load, clean, aggregate and chart, in that order. Only loading can fail.
    pub fn run(&self) -> Result<DashboardBuild> {
        let mut monitor = StageMonitor::new(self.monitor_enabled);

        tracing::info!("📥 Loading source data...");
        let table = self.pipeline.load()?;
        let rows_loaded = table.len();
        tracing::info!("Loaded {} rows", rows_loaded);
        monitor.mark("load");

        let records = self.pipeline.clean(table);
        tracing::info!(
            "🧹 Cleaned data: {} rows kept, {} dropped",
            records.len(),
            rows_loaded - records.len()
        );
        monitor.mark("clean");

        let aggregates = self.pipeline.aggregate(&records);
        tracing::info!(
            "📊 Aggregated {} long-format points across {} municipalities",
            aggregates.confirmed_long.len(),
            aggregates.municipalities.len()
        );
        monitor.mark("aggregate");

        let dashboard = self.pipeline.build_charts(&aggregates);
        tracing::debug!(
            "Built charts: line chart has {} series",
            dashboard.line.figure.data.len()
        );
        monitor.mark("charts");
        monitor.log_final_stats();

        Ok(DashboardBuild {
            stats: BuildStats {
                rows_loaded,
                rows_kept: records.len(),
                municipalities: aggregates.municipalities.len(),
            },
            aggregates,
            dashboard,
        })
    }
}

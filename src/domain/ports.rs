use crate::charts::Dashboard;
use crate::domain::model::{Aggregates, CaseRecord, RawTable, SourceOptions};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider: Send + Sync {
    fn source_path(&self) -> &str;
    fn source_options(&self) -> SourceOptions;
}

/// Start-up stages, run once in order by `DashboardEngine`.
pub trait Pipeline: Send + Sync {
    fn load(&self) -> Result<RawTable>;
    fn clean(&self, table: RawTable) -> Vec<CaseRecord>;
    fn aggregate(&self, records: &[CaseRecord]) -> Aggregates;
    fn build_charts(&self, aggregates: &Aggregates) -> Dashboard;
}

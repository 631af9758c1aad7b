pub mod aggregator;
pub mod cleaner;
pub mod engine;
pub mod loader;

pub use crate::domain::model::{Aggregates, CaseRecord, RawTable};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

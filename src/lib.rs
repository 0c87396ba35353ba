pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use app::{FileReportSink, Session};
pub use config::RosterConfig;
pub use crate::core::{
    compute_bonus, BonusEntry, BonusReport, Dependent, RecordService, SharedRecordService, Worker,
};
pub use utils::error::{HrError, Result};

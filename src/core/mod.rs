pub mod report;
pub mod service;
pub mod shared;

pub use crate::domain::model::{BonusEntry, Dependent, Worker};
pub use crate::domain::ports::{ConfigProvider, ReportSink, Storage};
pub use crate::utils::error::Result;
pub use report::BonusReport;
pub use service::{compute_bonus, RecordService};
pub use shared::SharedRecordService;

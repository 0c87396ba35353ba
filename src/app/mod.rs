pub mod presenter;
pub mod session;
pub mod sink;

pub use session::{Command, Outcome, Session};
pub use sink::FileReportSink;

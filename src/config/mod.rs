#[cfg(feature = "cli")]
pub mod cli;
pub mod roster;

#[cfg(feature = "cli")]
pub use cli::{CliCommand, CliConfig, ReportArgs, ResolvedReportConfig, ShellArgs};
pub use roster::RosterConfig;

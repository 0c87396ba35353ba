use crate::config::roster::SUPPORTED_FORMATS;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "rh-bonus")]
#[command(about = "Worker records and monthly dependent bonus report")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Load a roster file, print the bonus report and write it to disk
    Report(ReportArgs),
    /// Interactive session reading commands from stdin
    Shell(ShellArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    /// TOML roster with `[report]` settings and `[[workers]]`
    #[arg(short, long)]
    pub roster: String,

    /// Overrides `report.output_path` from the roster
    #[arg(long)]
    pub output_path: Option<String>,

    /// Overrides `report.output_formats` from the roster
    #[arg(long, value_delimiter = ',')]
    pub formats: Vec<String>,

    /// Write plain `.` decimals instead of R$ amounts in the text file
    #[arg(long)]
    pub no_currency: bool,

    /// Overrides `report.filename` from the roster
    #[arg(long)]
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ShellArgs {
    /// Optional roster to preload
    #[arg(short, long)]
    pub roster: Option<String>,

    /// Base directory for `save`
    #[arg(long, default_value = ".")]
    pub output_path: String,
}

/// Report settings after applying command-line overrides to the roster.
#[derive(Debug, Clone)]
pub struct ResolvedReportConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub filename: String,
    pub currency_display: bool,
}

impl ResolvedReportConfig {
    pub fn resolve<C: ConfigProvider>(args: &ReportArgs, roster: &C) -> Self {
        Self {
            output_path: args
                .output_path
                .clone()
                .unwrap_or_else(|| roster.output_path().to_string()),
            output_formats: if args.formats.is_empty() {
                roster.output_formats().to_vec()
            } else {
                args.formats.clone()
            },
            filename: args
                .filename
                .clone()
                .unwrap_or_else(|| roster.report_filename().to_string()),
            currency_display: roster.currency_display() && !args.no_currency,
        }
    }
}

impl ConfigProvider for ResolvedReportConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn report_filename(&self) -> &str {
        &self.filename
    }

    fn currency_display(&self) -> bool {
        self.currency_display
    }
}

impl Validate for ResolvedReportConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_formats("formats", &self.output_formats, &SUPPORTED_FORMATS)?;
        validation::validate_non_empty_string("filename", &self.filename)
    }
}

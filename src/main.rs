use clap::Parser;
use rh_bonus::app::presenter;
use rh_bonus::config::{CliCommand, ReportArgs, ResolvedReportConfig, ShellArgs};
use rh_bonus::core::ReportSink;
use rh_bonus::utils::error::ErrorSeverity;
use rh_bonus::utils::{logger, validation::Validate};
use rh_bonus::{
    CliConfig, FileReportSink, HrError, LocalStorage, RecordService, RosterConfig, Session,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting rh-bonus");
    tracing::debug!("CLI config: {:?}", config);

    let result = match config.command {
        CliCommand::Report(args) => run_report(args).await,
        CliCommand::Shell(args) => run_shell(args).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "rh-bonus failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn load_roster(path: &str) -> Result<RosterConfig, HrError> {
    tracing::info!("Loading roster from: {}", path);
    let roster = RosterConfig::from_file(path)?;
    roster.validate()?;
    tracing::info!("Roster loaded: {} worker(s)", roster.workers.len());
    Ok(roster)
}

async fn run_report(args: ReportArgs) -> Result<(), HrError> {
    let roster = load_roster(&args.roster)?;
    let settings = ResolvedReportConfig::resolve(&args, &roster);
    settings.validate()?;

    let mut service = RecordService::new();
    roster.seed(&mut service)?;

    let report = service.bonus_report();
    for line in presenter::display_lines(&report) {
        println!("{}", line);
    }

    let storage = LocalStorage::new(settings.output_path.clone());
    let sink = FileReportSink::new(storage.clone(), settings);
    let written = sink.publish(&report).await?;
    for path in written {
        println!("📁 Report saved to: {}", storage.resolve(&path).display());
    }
    Ok(())
}

async fn run_shell(args: ShellArgs) -> Result<(), HrError> {
    let mut service = RecordService::new();
    if let Some(path) = &args.roster {
        load_roster(path)?.seed(&mut service)?;
    }

    let storage = LocalStorage::new(args.output_path.clone());
    let mut session = Session::new(service, storage);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    session.run(stdin, tokio::io::stdout()).await
}

use clap::Parser;
use spec_gate::{AppConfig, CliArgs, LoggingConfig, RunOutcome, init_logging, run};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let logging_config = LoggingConfig::from_env();
    let _guard = init_logging(logging_config)?;

    let cli = CliArgs::parse();
    let config = AppConfig::from_args(cli)?;

    // Validate configuration before running (fail-fast)
    config.validate()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run(&config, &mut out)? {
        RunOutcome::Completed => Ok(ExitCode::SUCCESS),
        RunOutcome::Denied => Ok(ExitCode::FAILURE),
    }
}

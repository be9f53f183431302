pub mod config;
pub mod domain;
pub mod error;
pub mod gate;
pub mod logging;
pub mod rules;
pub mod scenario;
pub mod specification;

pub use config::{AppConfig, CliArgs, Command};
pub use domain::{User, UserType};
pub use error::{ErrorCode, GateError, GateResult};
pub use gate::{AccessGate, AccessGrant};
pub use logging::{LoggingConfig, init_logging};
pub use rules::{RuleCatalog, RuleName};
pub use specification::{SpecRef, Specification, SpecificationExt, all_of, any_of, not};

use anyhow::Result;
use std::io::Write;

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    /// An access gate refused the user
    Denied,
}

/// Executes the configured command, writing console output to `out`.
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> Result<RunOutcome> {
    let rules = RuleCatalog::new(config.short_name_threshold);

    tracing::info!(
        command = ?config.command,
        short_name_threshold = config.short_name_threshold,
        "running command"
    );

    match &config.command {
        Command::Demo => {
            scenario::run_scenario(&rules, out)?;
            Ok(RunOutcome::Completed)
        }
        Command::Rules => {
            for (name, description) in rules.describe_all() {
                let name = name.to_string();
                writeln!(out, "{name:<22} {description}")?;
            }
            Ok(RunOutcome::Completed)
        }
        Command::Check(check) => {
            let user = check.user.to_user();
            let satisfied = rules.get(check.rule).is_satisfied_by(&user);
            writeln!(out, "{}: {}? {}", user, check.rule, satisfied)?;
            Ok(RunOutcome::Completed)
        }
        Command::Access(access) => {
            let user = access.user.to_user();
            let gate_name = access.gate_name();
            let message = format!("execute {gate_name}");
            let gate = AccessGate::new(gate_name, rules.get(access.rule), move |_: &User| {
                message.clone()
            });
            let decision = gate.check_access(&user);
            let outcome = if decision.is_ok() {
                RunOutcome::Completed
            } else {
                RunOutcome::Denied
            };
            scenario::report(decision, out)?;
            Ok(outcome)
        }
    }
}

use crate::domain::{User, UserType};
use crate::rules::{DEFAULT_SHORT_NAME_THRESHOLD, RuleName};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "spec-gate",
    about = "Evaluate composable user specifications and access gates",
    version
)]
pub struct CliArgs {
    #[arg(
        long,
        env = "SPEC_GATE_SHORT_NAME_THRESHOLD",
        value_name = "N",
        help = "Maximum name length matched by the is-name-short rule",
        value_parser = clap::value_parser!(usize),
        global = true
    )]
    pub short_name_threshold: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the walkthrough of rule checks and access gates (default)
    Demo,
    /// List the predefined rules
    Rules,
    /// Evaluate one rule against a user
    Check(CheckArgs),
    /// Run a user through an access gate guarded by a rule
    Access(AccessArgs),
}

/// A user described on the command line
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct UserArgs {
    #[arg(long = "type", value_name = "TYPE", help = "personal, admin or super-admin")]
    pub kind: UserType,

    #[arg(long, value_name = "NAME")]
    pub name: String,

    #[arg(long, help = "Mark the user as locked")]
    pub locked: bool,
}

impl UserArgs {
    pub fn to_user(&self) -> User {
        User::new(self.kind, self.name.clone()).with_locked(self.locked)
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CheckArgs {
    #[arg(long, value_enum, value_name = "RULE")]
    pub rule: RuleName,

    #[command(flatten)]
    pub user: UserArgs,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AccessArgs {
    #[arg(long, value_enum, value_name = "RULE")]
    pub rule: RuleName,

    #[arg(long, value_name = "NAME", help = "Gate name (defaults to the rule name)")]
    pub gate: Option<String>,

    #[command(flatten)]
    pub user: UserArgs,
}

impl AccessArgs {
    pub fn gate_name(&self) -> String {
        self.gate
            .clone()
            .unwrap_or_else(|| self.rule.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub short_name_threshold: usize,
    pub command: Command,
}

impl AppConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            short_name_threshold,
            command,
        } = args;

        Ok(Self {
            short_name_threshold: short_name_threshold.unwrap_or(DEFAULT_SHORT_NAME_THRESHOLD),
            command: command.unwrap_or(Command::Demo),
        })
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.short_name_threshold >= 1,
            "short name threshold must be at least 1 (got {})",
            self.short_name_threshold
        );
        Ok(())
    }
}

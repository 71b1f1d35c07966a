//! Command-line interface for `podium`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::logging;

/// `podium` - Admin console display toolkit.
#[derive(Parser, Debug)]
#[command(name = "podium")]
#[command(
    author,
    version,
    about = "Admin console display toolkit for hackathon platforms",
    long_about = None,
    after_help = "Display-only: no network calls, no database, no provisioning."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file (defaults to ./podium.yaml when present)
    #[arg(long, global = true, value_name = "FILE", env = "PODIUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List status codes and their label keys
    Labels(LabelsArgs),

    /// Inspect deployment templates
    Template(TemplateCommand),

    /// Strip markup from text (argument or stdin)
    Strip(StripArgs),

    /// Show version information
    Version,
}

/// A status domain of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Domain {
    /// VM image review states
    Image,
    /// Registration audit states
    Audit,
    /// User roles within an event
    Role,
    /// Experiment environment lifecycle
    Experiment,
    /// Organization kinds
    Organization,
}

impl Domain {
    pub const ALL: [Self; 5] = [
        Self::Image,
        Self::Audit,
        Self::Role,
        Self::Experiment,
        Self::Organization,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image_status",
            Self::Audit => "audit_status",
            Self::Role => "user_role",
            Self::Experiment => "experiment_status",
            Self::Organization => "organization_type",
        }
    }
}

#[derive(Args, Debug)]
pub struct LabelsArgs {
    /// Domain to list (all domains when omitted)
    #[arg(value_enum)]
    pub domain: Option<Domain>,
}

#[derive(Args, Debug)]
pub struct TemplateCommand {
    /// Template subcommand
    #[command(subcommand)]
    pub command: Option<TemplateSubcommand>,
}

#[derive(Subcommand, Debug)]
pub enum TemplateSubcommand {
    /// Summarize a template
    Show(TemplateArgs),

    /// Parse a template and report its shape
    Check(TemplateArgs),

    /// Print the raw template verbatim (as forwarded to provisioning)
    Emit(TemplateArgs),

    /// Print the descriptor JSON schema
    Schema,
}

#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Template name (resolved in the templates dir) or path
    pub template: String,
}

#[derive(Args, Debug)]
pub struct StripArgs {
    /// Text to strip (reads stdin when omitted)
    pub text: Option<String>,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Labels(args)) => commands::labels::execute(&args, cli.json)?,
        Some(Commands::Template(command)) => {
            commands::template::execute(&command, &config, cli.json)?;
        }
        Some(Commands::Strip(args)) => commands::strip::execute(&args)?,
        Some(Commands::Version) => commands::version::execute(cli.json)?,
        None => println!("podium - admin console display toolkit. Use --help for usage."),
    }

    Ok(())
}

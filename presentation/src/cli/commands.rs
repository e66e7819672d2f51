//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for rendered plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored console text
    Text,
    /// HTML fragment
    Html,
    /// The rendered layout as JSON
    Json,
}

impl From<OutputFormat> for planner_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => planner_domain::OutputFormat::Text,
            OutputFormat::Html => planner_domain::OutputFormat::Html,
            OutputFormat::Json => planner_domain::OutputFormat::Json,
        }
    }
}

/// What to do after the form has been restored
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Edit the form interactively (default)
    Edit,
    /// Print the current form
    Show,
    /// Send the saved form to the solver and print the plans
    Generate,
    /// Print the output restored from the last run
    Output,
    /// Forget the saved form and output
    Reset,
}

/// CLI arguments for dinner-planner
#[derive(Parser, Debug)]
#[command(name = "dinner-planner")]
#[command(author, version, about = "Plan a rotating dinner party")]
#[command(long_about = r#"
Dinner Planner keeps a form of couples and their constraints, saves it after
every edit, and hands it to an external solver that proposes rotations.

A rotation has three courses: starter, main and dessert. Hosting couples may
be excluded from hosting specific courses, and forbidden pairs are never
seated together.

Configuration files are loaded from (in priority order):
1. PLANNER_* environment variables
2. --config <path>        Explicit config file
3. ./planner.toml         Project-level config
4. ~/.config/dinner-planner/config.toml   Global config

Example:
  dinner-planner                 Edit the form interactively
  dinner-planner generate -o html
  dinner-planner --ephemeral show
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides the configured one)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Keep the form in memory only; nothing is read or written on disk
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

impl Cli {
    /// The command to run, defaulting to the interactive editor
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Edit)
    }
}

use crate::config::Config;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "identity-mock")]
#[command(about = "Mock harness for the Clarity identity contract", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a scenario file of mocked identity contract calls
    Run(RunArgs),

    /// Invoke a single mocked operation and print its return value
    Call(CallArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the scenario TOML file
    #[arg(short, long)]
    pub scenario: PathBuf,

    /// Output format (defaults to the config file, then text)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Parser)]
pub struct CallArgs {
    /// Operation name (e.g. create-identity)
    #[arg(short, long)]
    pub operation: String,

    /// Operation arguments as JSON array (e.g., '["Test metadata"]')
    #[arg(short, long)]
    pub args: Option<String>,

    /// Mocked return value, OPERATION=json (repeatable)
    #[arg(short, long, value_name = "OPERATION=JSON")]
    pub mock: Vec<String>,

    /// Output format (defaults to the config file, then text)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Picks the command-line flag, then the config file, then text.
    pub fn resolve(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
        if let Some(format) = flag {
            return format;
        }
        match config.output.format.as_deref() {
            Some(f) if f.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Trace,
}

impl Verbosity {
    pub fn to_log_level(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "debug",
            Verbosity::Trace => "trace",
        }
    }
}

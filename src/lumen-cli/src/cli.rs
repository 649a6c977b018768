//! CLI argument parsing and command dispatch.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use lumen_suggest::TargetLevel;

/// Log verbosity level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Target conformance level argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    /// 7:1, normal text
    Aaa,
    /// 4.5:1, normal text
    Aa,
    /// 3:1, large text
    AaLarge,
}

impl From<TargetArg> for TargetLevel {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Aaa => TargetLevel::Aaa,
            TargetArg::Aa => TargetLevel::Aa,
            TargetArg::AaLarge => TargetLevel::AaLarge,
        }
    }
}

/// Lumen - WCAG palette contrast checker.
#[derive(Parser)]
#[command(name = "lumen")]
#[command(author, version)]
#[command(about = "Lumen - WCAG palette contrast checker", long_about = None)]
pub struct Cli {
    /// Log verbosity (the LUMEN_LOG environment variable takes precedence)
    #[arg(
        long = "log-level",
        global = true,
        value_enum,
        default_value_t = LogLevel::Warn
    )]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate pairwise contrast across a palette
    Check(CheckArgs),
    /// Contrast ratio and level flags for one color pair
    Ratio(RatioArgs),
    /// Suggest an adjusted color that meets a target level
    Suggest(SuggestArgs),
}

/// Arguments for `lumen check`.
#[derive(Args)]
pub struct CheckArgs {
    /// Palette colors as #RRGGBB hex strings
    #[arg(required = true)]
    pub colors: Vec<String>,

    /// Exclude pure black and white from the comparison set
    #[arg(long = "no-black-white")]
    pub no_black_white: bool,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `lumen ratio`.
#[derive(Args)]
pub struct RatioArgs {
    /// Background color
    pub color1: String,

    /// Text color
    pub color2: String,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `lumen suggest`.
#[derive(Args)]
pub struct SuggestArgs {
    /// Background color
    pub color1: String,

    /// Text color
    pub color2: String,

    /// Adjust the background color instead of the text color
    #[arg(long = "adjust-background")]
    pub adjust_background: bool,

    /// Target level (defaults to the next level up from the current ratio)
    #[arg(long, value_enum)]
    pub target: Option<TargetArg>,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

/// Initialize tracing to stderr.
///
/// `LUMEN_LOG` overrides the `--log-level` flag when set.
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_env("LUMEN_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Dispatch a parsed CLI invocation to its command handler.
pub fn dispatch_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check(args) => crate::check_cmd::run(&args),
        Commands::Ratio(args) => crate::ratio_cmd::run(&args),
        Commands::Suggest(args) => crate::suggest_cmd::run(&args),
    }
}

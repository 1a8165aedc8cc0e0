//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// keycalc: replay calculator key presses from the command line
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate PREVIOUS OPERATION CURRENT
    Eval(EvalArgs),

    /// Format an operand with thousands separators
    Format(FormatArgs),

    /// Press a sequence of keys and print the display
    Run(RunArgs),
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Left-hand operand
    #[arg(allow_hyphen_values = true)]
    pub previous: String,

    /// Operator symbol (+, -, *, /)
    #[arg(allow_hyphen_values = true)]
    pub operation: String,

    /// Right-hand operand
    #[arg(allow_hyphen_values = true)]
    pub current: String,
}

/// Arguments for the format command
#[derive(Parser, Debug)]
pub struct FormatArgs {
    /// Operand to format
    #[arg(allow_hyphen_values = true)]
    pub operand: String,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Key labels to press in order (e.g. 1 + 2 =)
    pub keys: Vec<String>,

    /// Read whitespace-separated key labels from a file (after KEYS)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Maximum length of the operand being typed
    #[arg(long, value_name = "N", conflicts_with = "web")]
    pub max_digits: Option<usize>,

    /// Use the web front end's operand cap
    #[arg(long)]
    pub web: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Print the display after every key
    #[arg(long)]
    pub steps: bool,
}

/// Color choice argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Two display lines
    #[default]
    Text,
    /// State and display as JSON
    Json,
}

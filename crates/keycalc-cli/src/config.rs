//! CLI configuration

use crate::commands::{Cli, ColorArg, FormatArg, RunArgs};
use keycalc::ReducerConfig;
use serde::{Deserialize, Serialize};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - state transitions
    Verbose,
    /// Debug - rejected actions too
    Debug,
}

impl Verbosity {
    /// Maps `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Default `tracing` filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => console::Term::stdout().features().colors_supported(),
        }
    }
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Always => Self::Always,
            ColorArg::Auto => Self::Auto,
            ColorArg::Never => Self::Never,
        }
    }
}

/// How `run` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Two display lines
    #[default]
    Text,
    /// State and display as JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Output format for `run`
    pub output_format: OutputFormat,
    /// Reducer settings for `run`
    pub reducer: ReducerConfig,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the configuration from global flags
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new()
            .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
            .with_color(cli.color.into())
    }

    /// Applies `run` options on top
    #[must_use]
    pub fn with_run_args(self, args: &RunArgs) -> Self {
        let reducer = if args.web {
            ReducerConfig::web()
        } else {
            args.max_digits.map_or_else(ReducerConfig::default, |n| {
                ReducerConfig::default().with_max_operand_len(n)
            })
        };
        self.with_output_format(args.format.into())
            .with_reducer(reducer)
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set output format
    #[must_use]
    pub const fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    /// Set reducer configuration
    #[must_use]
    pub const fn with_reducer(mut self, reducer: ReducerConfig) -> Self {
        self.reducer = reducer;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::Parser;

    mod verbosity_tests {
        use super::*;

        #[test]
        fn test_default_verbosity() {
            assert_eq!(Verbosity::default(), Verbosity::Normal);
        }

        #[test]
        fn test_from_flags() {
            assert_eq!(Verbosity::from_flags(true, 3), Verbosity::Quiet);
            assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
            assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
            assert_eq!(Verbosity::from_flags(false, 5), Verbosity::Debug);
        }

        #[test]
        fn test_filter_directive() {
            assert_eq!(Verbosity::Quiet.filter_directive(), "error");
            assert_eq!(Verbosity::Normal.filter_directive(), "warn");
            assert_eq!(Verbosity::Verbose.filter_directive(), "debug");
            assert_eq!(Verbosity::Debug.filter_directive(), "trace");
        }
    }

    mod color_tests {
        use super::*;

        #[test]
        fn test_fixed_choices() {
            assert!(ColorChoice::Always.should_color());
            assert!(!ColorChoice::Never.should_color());
        }

        #[test]
        fn test_from_arg() {
            assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
            assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
        }
    }

    mod config_tests {
        use super::*;

        fn run_args(argv: &[&str]) -> (Cli, RunArgs) {
            let mut cli = Cli::try_parse_from(argv).unwrap();
            let crate::commands::Commands::Run(args) = std::mem::replace(
                &mut cli.command,
                crate::commands::Commands::Format(crate::commands::FormatArgs {
                    operand: String::new(),
                }),
            ) else {
                panic!("expected run command");
            };
            (cli, args)
        }

        #[test]
        fn test_default_config() {
            let config = CliConfig::new();
            assert_eq!(config.verbosity, Verbosity::Normal);
            assert_eq!(config.color, ColorChoice::Auto);
            assert_eq!(config.output_format, OutputFormat::Text);
            assert_eq!(config.reducer, ReducerConfig::default());
        }

        #[test]
        fn test_from_cli_flags() {
            let (cli, _) = run_args(&["keycalc", "-q", "--color", "never", "run"]);
            let config = CliConfig::from_cli(&cli);
            assert_eq!(config.verbosity, Verbosity::Quiet);
            assert_eq!(config.color, ColorChoice::Never);
        }

        #[test]
        fn test_run_args_max_digits() {
            let (cli, args) = run_args(&["keycalc", "run", "--max-digits", "8", "--format", "json"]);
            let config = CliConfig::from_cli(&cli).with_run_args(&args);
            assert_eq!(config.reducer.max_operand_len, 8);
            assert_eq!(config.output_format, OutputFormat::Json);
        }

        #[test]
        fn test_run_args_web() {
            let (cli, args) = run_args(&["keycalc", "run", "--web"]);
            let config = CliConfig::from_cli(&cli).with_run_args(&args);
            assert_eq!(config.reducer, ReducerConfig::web());
        }

        #[test]
        fn test_config_serializes() {
            let json = serde_json::to_string(&CliConfig::new()).unwrap();
            assert!(json.contains("\"max_operand_len\":15"));
        }
    }
}

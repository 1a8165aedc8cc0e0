//! keycalc: calculator key presses from the command line
//!
//! ## Usage
//!
//! ```bash
//! keycalc eval 2 / 4              # 0.5
//! keycalc format 1234567.5        # 1,234,567.5
//! keycalc run 1 + 2 =             # press keys, print the display
//! keycalc run -f keys.txt --steps # keys from a file, display after each
//! ```

use clap::Parser;
use keycalc_cli::{init_logging, render_error, Cli, CliConfig, CliResult, CommandRunner, Commands};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = CliConfig::from_cli(&cli);
    let use_color = config.color.should_color();
    init_logging(config.verbosity, use_color);

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", render_error(&e.to_string(), use_color));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: CliConfig) -> CliResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Eval(args) => CommandRunner::new(config).eval(&args, &mut out)?,
        Commands::Format(args) => CommandRunner::new(config).format(&args, &mut out)?,
        Commands::Run(args) => {
            let config = config.with_run_args(&args);
            CommandRunner::new(config).run(&args, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

//! Command execution

use crate::commands::{EvalArgs, FormatArgs, RunArgs};
use crate::config::{CliConfig, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::DisplayRenderer;
use keycalc::{evaluate, format_operand, Operation, Session};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Executes subcommands against a writer
#[derive(Debug, Clone)]
pub struct CommandRunner {
    config: CliConfig,
}

impl CommandRunner {
    /// Create a runner
    #[must_use]
    pub const fn new(config: CliConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &CliConfig {
        &self.config
    }

    /// `eval PREVIOUS OPERATION CURRENT`
    ///
    /// Operands are read leniently; the operator must be one of `+ - * /`.
    pub fn eval(&self, args: &EvalArgs, out: &mut impl Write) -> CliResult<()> {
        let operation: Operation = args.operation.parse()?;
        let result = evaluate(
            Some(args.current.as_str()),
            Some(args.previous.as_str()),
            Some(operation),
        );
        debug!(previous = %args.previous, %operation, current = %args.current, %result, "evaluated");
        writeln!(out, "{result}")?;
        Ok(())
    }

    /// `format OPERAND`
    pub fn format(&self, args: &FormatArgs, out: &mut impl Write) -> CliResult<()> {
        let formatted = format_operand(Some(args.operand.as_str())).unwrap_or_default();
        writeln!(out, "{formatted}")?;
        Ok(())
    }

    /// `run [KEYS]...`
    ///
    /// Stops at the first unknown key; nothing is printed in that case
    /// unless `--steps` already printed the earlier displays.
    pub fn run(&self, args: &RunArgs, out: &mut impl Write) -> CliResult<()> {
        let mut keys = args.keys.clone();
        if let Some(path) = &args.file {
            keys.extend(read_key_file(path)?);
        }

        let renderer = DisplayRenderer::new(
            self.config.output_format,
            self.config.color.should_color(),
        );
        let mut session = Session::with_config(self.config.reducer);
        info!(keys = keys.len(), max_operand_len = session.config().max_operand_len, "pressing keys");

        for key in &keys {
            session.press(key)?;
            if args.steps {
                if self.config.output_format == OutputFormat::Text {
                    writeln!(out, "> {key}")?;
                }
                writeln!(out, "{}", renderer.render(session.state())?)?;
            }
        }

        if !args.steps || keys.is_empty() {
            writeln!(out, "{}", renderer.render(session.state())?)?;
        }
        Ok(())
    }
}

/// Reads whitespace-separated key labels
pub fn read_key_file(path: &Path) -> CliResult<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        CliError::invalid_argument(format!("cannot read key file {}: {e}", path.display()))
    })?;
    Ok(contents.split_whitespace().map(str::to_string).collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::Parser;
    use keycalc::{CalcError, ReducerConfig};

    fn run_args(keys: &[&str]) -> RunArgs {
        let mut argv = vec!["run"];
        argv.extend_from_slice(keys);
        RunArgs::try_parse_from(argv).unwrap()
    }

    fn output(f: impl FnOnce(&mut Vec<u8>) -> CliResult<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn plain_runner() -> CommandRunner {
        CommandRunner::new(CliConfig::new().with_color(crate::config::ColorChoice::Never))
    }

    #[test]
    fn test_eval_prints_result() {
        let runner = plain_runner();
        let args = EvalArgs {
            previous: "2".into(),
            operation: "/".into(),
            current: "4".into(),
        };
        assert_eq!(output(|out| runner.eval(&args, out)), "0.5\n");
    }

    #[test]
    fn test_eval_unparseable_operand_prints_empty_line() {
        let runner = plain_runner();
        let args = EvalArgs {
            previous: "abc".into(),
            operation: "+".into(),
            current: "1".into(),
        };
        assert_eq!(output(|out| runner.eval(&args, out)), "\n");
    }

    #[test]
    fn test_eval_rejects_unknown_operator() {
        let runner = plain_runner();
        let args = EvalArgs {
            previous: "2".into(),
            operation: "%".into(),
            current: "4".into(),
        };
        let err = runner.eval(&args, &mut Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Calc(CalcError::InvalidOperation(ref op)) if op == "%"
        ));
    }

    #[test]
    fn test_format_groups_thousands() {
        let runner = plain_runner();
        let args = FormatArgs {
            operand: "1234567.891".into(),
        };
        assert_eq!(output(|out| runner.format(&args, out)), "1,234,567.891\n");
    }

    #[test]
    fn test_run_text() {
        let runner = plain_runner();
        let args = run_args(&["1", "+", "2", "="]);
        assert_eq!(output(|out| runner.run(&args, out)), "\n3\n");
    }

    #[test]
    fn test_run_pending_operation() {
        let runner = plain_runner();
        let args = run_args(&["1", "2", "0", "0", "x", "3"]);
        assert_eq!(output(|out| runner.run(&args, out)), "1,200 *\n3\n");
    }

    #[test]
    fn test_run_steps() {
        let runner = plain_runner();
        let mut args = run_args(&["7", "DEL"]);
        args.steps = true;
        assert_eq!(output(|out| runner.run(&args, out)), "> 7\n\n7\n> DEL\n\n\n");
    }

    #[test]
    fn test_run_unknown_key_fails() {
        let runner = plain_runner();
        let args = run_args(&["1", "sqrt"]);
        let err = runner.run(&args, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("sqrt"));
    }

    #[test]
    fn test_run_respects_cap() {
        let config = CliConfig::new()
            .with_color(crate::config::ColorChoice::Never)
            .with_reducer(ReducerConfig::new().with_max_operand_len(3));
        let runner = CommandRunner::new(config);
        let args = run_args(&["9", "9", "9", "9", "9"]);
        assert_eq!(output(|out| runner.run(&args, out)), "\n999\n");
    }

    #[test]
    fn test_run_json() {
        let config = CliConfig::new().with_output_format(OutputFormat::Json);
        let runner = CommandRunner::new(config);
        let args = run_args(&["6", "/", "3", "="]);
        let text = output(|out| runner.run(&args, out));
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["state"]["currentOperand"], "2");
        assert_eq!(value["state"]["overwrite"], true);
    }

    #[test]
    fn test_run_reads_key_file_after_arguments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "+ 3\n=").unwrap();
        let runner = plain_runner();
        let mut args = run_args(&["4"]);
        args.file = Some(file.path().to_path_buf());
        assert_eq!(output(|out| runner.run(&args, out)), "\n7\n");
    }

    #[test]
    fn test_read_key_file_missing() {
        let err = read_key_file(Path::new("/definitely/not/here.keys")).unwrap_err();
        assert!(err.to_string().contains("cannot read key file"));
    }
}

//! Rendering of calculator displays for the terminal

use crate::config::OutputFormat;
use crate::error::CliResult;
use console::style;
use keycalc::{CalculatorState, Display};
use serde::Serialize;

/// JSON document printed by `run --format json`
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    /// Final reducer state
    pub state: &'a CalculatorState,
    /// Display lines for that state
    pub display: Display,
}

/// Writes display snapshots in the configured format
#[derive(Debug, Clone, Copy)]
pub struct DisplayRenderer {
    format: OutputFormat,
    use_color: bool,
}

impl DisplayRenderer {
    /// Create a renderer
    #[must_use]
    pub const fn new(format: OutputFormat, use_color: bool) -> Self {
        Self { format, use_color }
    }

    /// Renders one state without a trailing newline
    pub fn render(&self, state: &CalculatorState) -> CliResult<String> {
        let display = Display::from_state(state);
        match self.format {
            OutputFormat::Text => Ok(self.render_text(&display)),
            OutputFormat::Json => Ok(serde_json::to_string(&RunReport { state, display })?),
        }
    }

    /// Renders the two display lines
    #[must_use]
    pub fn render_text(&self, display: &Display) -> String {
        let previous = display.previous.as_deref().unwrap_or_default();
        let current = display.current.as_deref().unwrap_or_default();
        if self.use_color {
            format!("{}\n{}", style(previous).dim(), style(current).bold())
        } else {
            format!("{previous}\n{current}")
        }
    }
}

/// Styles an error message for stderr
#[must_use]
pub fn render_error(message: &str, use_color: bool) -> String {
    if use_color {
        format!("{} {message}", style("Error:").red().bold())
    } else {
        format!("Error: {message}")
    }
}

//! Rendering calculator results

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliResult;
use console::Style;
use nectar_calc::core::evaluator::ExpressionEvaluator;
use nectar_calc::core::Operation;
use serde::Serialize;

/// JSON view of an evaluator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Display text
    pub display: String,
    /// Stored left-hand operand
    pub accumulator: Option<f64>,
    /// Queued operator
    pub pending_operator: Option<Operation>,
    /// Whether the next digit starts a new numeral
    pub awaiting_fresh_input: bool,
    /// Cause of the error state, if any
    pub error: Option<String>,
    /// Completed operations, oldest first (only with `--show-history`)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<String>,
}

impl Snapshot {
    /// Captures the evaluator state
    #[must_use]
    pub fn capture(eval: &ExpressionEvaluator, with_history: bool) -> Self {
        let state = eval.state();
        Self {
            display: state.display().to_string(),
            accumulator: state.accumulator(),
            pending_operator: state.pending_operator(),
            awaiting_fresh_input: state.awaiting_fresh_input(),
            error: eval.last_error().map(ToString::to_string),
            history: if with_history {
                eval.history().iter().map(|e| e.display()).collect()
            } else {
                Vec::new()
            },
        }
    }
}

/// Formats results according to the CLI configuration
#[derive(Debug, Clone)]
pub struct Renderer {
    format: OutputFormat,
    show_history: bool,
    use_color: bool,
}

impl Renderer {
    /// Creates a renderer for the given configuration
    #[must_use]
    pub fn new(config: &CliConfig) -> Self {
        Self {
            format: config.format,
            show_history: config.show_history,
            use_color: config.color.should_color(),
        }
    }

    /// Renders the evaluator as the text to print (without a trailing newline)
    pub fn render(&self, eval: &ExpressionEvaluator) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(&Snapshot::capture(
                eval,
                self.show_history,
            ))?),
            OutputFormat::Text => Ok(self.render_text(eval)),
        }
    }

    fn render_text(&self, eval: &ExpressionEvaluator) -> String {
        let mut lines = Vec::new();
        if self.show_history {
            let dim = self.style(Style::new().dim());
            lines.extend(
                eval.history()
                    .iter()
                    .map(|e| dim.apply_to(e.display()).to_string()),
            );
        }

        let display = eval.display();
        let line = if eval.state().is_error() {
            self.style(Style::new().red().bold()).apply_to(display)
        } else {
            self.style(Style::new().bold()).apply_to(display)
        };
        lines.push(line.to_string());
        lines.join("\n")
    }

    fn style(&self, style: Style) -> Style {
        style.force_styling(self.use_color)
    }
}

//! Command implementations
//!
//! Each command writes to a caller-supplied writer so it can be exercised
//! without a terminal.

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Renderer;
use nectar_calc::core::evaluator::ExpressionEvaluator;
use nectar_calc::driver::CalculatorDriver;
use nectar_calc::keypad::Keypad;
use std::io::{BufRead, Write};

/// Runs calculator commands for one session
#[derive(Debug)]
pub struct Session {
    evaluator: ExpressionEvaluator,
    renderer: Renderer,
}

impl Session {
    /// Creates a session with a fresh evaluator
    #[must_use]
    pub fn new(config: &CliConfig) -> Self {
        Self {
            evaluator: ExpressionEvaluator::with_history_capacity(config.history_capacity),
            renderer: Renderer::new(config),
        }
    }

    /// The session's evaluator
    #[must_use]
    pub const fn evaluator(&self) -> &ExpressionEvaluator {
        &self.evaluator
    }

    /// Presses every key label in `keys`, then prints the result
    pub fn eval<W: Write>(&mut self, keys: &[String], out: &mut W) -> CliResult<()> {
        let labels = keys.join(" ");
        self.evaluator.press_sequence(&labels)?;
        tracing::info!(keys = %labels, display = %self.evaluator.display(), "evaluated");
        writeln!(out, "{}", self.renderer.render(&self.evaluator)?)?;
        Ok(())
    }

    /// Reads key labels line by line until EOF or `quit`, printing the
    /// display after each line. Lines with unknown keys are reported on
    /// `err` and leave the calculator untouched.
    pub fn repl<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: R,
        out: &mut W,
        err: &mut E,
    ) -> CliResult<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            match line {
                "" => continue,
                "quit" | "exit" => break,
                _ => {}
            }

            match self.evaluator.press_sequence(line) {
                Ok(()) => writeln!(out, "{}", self.renderer.render(&self.evaluator)?)?,
                Err(e) => {
                    tracing::debug!(line, error = %e, "rejected input line");
                    writeln!(err, "Error: {}", CliError::from(e))?;
                }
            }
            out.flush()?;
        }
        Ok(())
    }
}

/// Prints the keypad layout
pub fn print_keypad<W: Write>(out: &mut W) -> CliResult<()> {
    writeln!(out, "{}", Keypad::new().render())?;
    Ok(())
}

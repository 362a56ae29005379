//! Interactive prompts.
//!
//! Generators never touch stdin directly; they ask a [`Prompter`]. The
//! terminal implementation is generic over its reader and writer, which lets
//! tests drive a full generator run from an in-memory script.

use std::io::{BufRead, Write};

use ccg_core::{CcgError, CcgResult};
use colored::Colorize;

/// A source of answers for a generator's questions.
pub trait Prompter {
    /// Shows an informational message to the user.
    fn notice(&mut self, message: &str) -> CcgResult<()>;

    /// Asks for free text, re-asking until `validate` accepts the answer.
    fn text(&mut self, message: &str, validate: &dyn Fn(&str) -> bool) -> CcgResult<String>;

    /// Asks the user to pick one of `choices`, returning the chosen value.
    fn select(&mut self, message: &str, choices: &[String]) -> CcgResult<String>;
}

/// A [`Prompter`] reading answers line by line and writing questions to a
/// terminal-like output.
///
/// A selection can be answered with either the 1-based index of a choice or
/// the choice itself. End of input aborts the prompt.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl TerminalPrompter<std::io::StdinLock<'static>, std::io::Stderr> {
    /// Creates a prompter on the process's stdin, writing to stderr so that
    /// stdout carries only generated output.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    /// Creates an uncolored prompter over `input` and `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
        }
    }

    /// Enables or disables colored output.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Consumes the prompter, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, question: &str) -> CcgResult<String> {
        let marker = if self.color {
            "[?]".yellow().bold().to_string()
        } else {
            "[?]".to_string()
        };
        write!(self.output, "{marker} {question}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CcgError::PromptAborted(format!(
                "no answer given for \"{question}\""
            )));
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    fn reject(&mut self, reason: &str) -> CcgResult<()> {
        let line = if self.color {
            format!(">> {reason}").red().to_string()
        } else {
            format!(">> {reason}")
        };
        writeln!(self.output, "{line}")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn notice(&mut self, message: &str) -> CcgResult<()> {
        if self.color {
            writeln!(self.output, "{}", message.bold())?;
        } else {
            writeln!(self.output, "{message}")?;
        }
        Ok(())
    }

    fn text(&mut self, message: &str, validate: &dyn Fn(&str) -> bool) -> CcgResult<String> {
        loop {
            let answer = self.ask(message)?;
            if validate(&answer) {
                return Ok(answer);
            }
            tracing::debug!(answer = %answer, "rejected prompt answer");
            self.reject("Invalid value, please try again.")?;
        }
    }

    fn select(&mut self, message: &str, choices: &[String]) -> CcgResult<String> {
        if choices.is_empty() {
            return Err(CcgError::PromptAborted(format!(
                "nothing to choose from for \"{message}\""
            )));
        }

        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}) {choice}", i + 1)?;
        }

        let question = format!("{message} [1-{}]", choices.len());
        loop {
            let answer = self.ask(&question)?;
            let answer = answer.trim();

            let picked = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| choices.get(i))
                .or_else(|| choices.iter().find(|c| c.as_str() == answer));

            if let Some(choice) = picked {
                return Ok(choice.clone());
            }
            self.reject("Please pick one of the listed options.")?;
        }
    }
}

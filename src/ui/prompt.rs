//! Line-based prompts for the interactive form.

use std::io::{BufRead, Write};

use crate::errors::{AppError, AppResult};

pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line; `None` once input is closed.
    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask for a value. A blank answer keeps `current`; anything else is
    /// returned exactly as typed.
    pub fn ask(&mut self, label: &str, current: &str) -> AppResult<String> {
        if current.is_empty() {
            write!(self.output, "{}: ", label)?;
        } else {
            write!(self.output, "{} [{}]: ", label, current)?;
        }
        self.output.flush()?;

        match self.read_line()? {
            None => Err(AppError::Cancelled(format!("no answer for '{}'", label))),
            Some(answer) if answer.trim().is_empty() => Ok(current.to_string()),
            Some(answer) => Ok(answer),
        }
    }

    /// Pick one of `options` by number or by name. Any other text is returned
    /// as typed and left to the validator.
    pub fn choose(&mut self, label: &str, options: &[String], current: &str) -> AppResult<String> {
        writeln!(self.output, "{}:", label)?;
        for (i, opt) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, opt)?;
        }

        let answer = self.ask("  choice", current)?;
        if let Ok(n) = answer.trim().parse::<usize>()
            && (1..=options.len()).contains(&n)
        {
            return Ok(options[n - 1].clone());
        }
        Ok(answer)
    }

    /// Yes/no question; closed input counts as "no".
    pub fn confirm(&mut self, question: &str, default: bool) -> AppResult<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        write!(self.output, "{} [{}]: ", question, hint)?;
        self.output.flush()?;

        let Some(answer) = self.read_line()? else {
            writeln!(self.output)?;
            return Ok(false);
        };
        Ok(match answer.trim().to_ascii_lowercase().as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }
}

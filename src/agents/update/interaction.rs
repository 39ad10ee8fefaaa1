use crate::error::Result;
use colored::Colorize;
use std::io::{self, BufRead, Stdout, Write};

/// Manages the yes/no prompts of the interactive update stage
///
/// Only a case-insensitive `y` accepts an update; any other answer, including
/// an empty line or end of input, declines it.
pub struct UpdateInteraction<R, W> {
    input: R,
    output: W,
}

impl UpdateInteraction<io::StdinLock<'static>, Stdout> {
    /// Prompt on the terminal
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> UpdateInteraction<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask whether `name` should be updated from `old` to `new`
    pub fn confirm_plugin(&mut self, name: &str, old: &str, new: &str) -> Result<bool> {
        writeln!(
            self.output,
            "\n{} {} {} {} to {}",
            "[Plugin]".cyan().bold(),
            name.white().bold(),
            "from".dimmed(),
            old.red(),
            new.green().bold()
        )?;
        write!(self.output, "{}", "Update this plugin? [y/N]: ".bold())?;
        self.output.flush()?;

        // Raw bytes: an answer in a non-UTF-8 encoding is just a "no".
        let mut answer = Vec::new();
        if self.input.read_until(b'\n', &mut answer)? == 0 {
            writeln!(self.output)?;
            return Ok(false);
        }

        Ok(String::from_utf8_lossy(&answer)
            .trim()
            .eq_ignore_ascii_case("y"))
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}

//! Line-based confirmation prompt.

use std::io::{BufRead, Write};

use webpwatch_core::Confirm;

/// Writes a prompt and waits for a line of input.
///
/// Any line (including an empty one) confirms. End of input or a read
/// error declines, so a closed stdin never triggers a conversion.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        let _ = write!(self.output, "{prompt}");
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                tracing::info!("input closed; skipping conversion");
                false
            }
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("failed to read confirmation: {e}");
                false
            }
        }
    }
}

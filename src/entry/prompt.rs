use std::io::{self, BufRead, Write};

/// Interactive line input, one prompt at a time.
///
/// Returning `Ok(None)` signals that input has ended, which callers treat as a
/// cancel rather than retrying.
pub trait LineSource {
    /// Show `prompt` and read one line without its line terminator.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print an informational line to the operator.
    fn say(&mut self, message: &str) -> io::Result<()>;
}

/// `LineSource` over any buffered reader and writer (stdin/stdout in `main`,
/// byte slices in tests).
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> LineSource for Prompter<R, W> {
    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }
}

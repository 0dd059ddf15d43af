//! Line-oriented operator console.
//!
//! Generic over the reader and writer so sessions can be scripted in tests.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("write to console")
    }

    /// Print `prompt` and read the reply. Returns `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("write to console")?;
        self.output.flush().context("flush console")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("read from console")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_returns_lines_then_none_at_eof() {
        let mut console = Console::new("3\r\nKara\n".as_bytes(), Vec::new());
        assert_eq!(console.ask("> ").expect("ask"), Some("3".to_string()));
        assert_eq!(console.ask("> ").expect("ask"), Some("Kara".to_string()));
        assert_eq!(console.ask("> ").expect("ask"), None);

        let output = String::from_utf8(console.into_output()).expect("utf8");
        assert_eq!(output, "> > > ");
    }
}

use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Interactive boundary of an invocation: where the identifier comes from
/// and where the finished report goes.
pub trait Console {
    /// Ask for an identifier and return the entered line, trimmed.
    /// # Errors
    /// Returns an error when reading the input fails.
    fn read_identifier(&mut self, prompt: &str) -> Result<String>;

    /// Write one finished report.
    /// # Errors
    /// Returns an error when writing the output fails.
    fn write_report(&mut self, report: &str) -> Result<()>;
}

/// stdin/stdout implementation used by the binary.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_identifier(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt} ")?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;

        Ok(line.trim().to_string())
    }

    fn write_report(&mut self, report: &str) -> Result<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{report}")?;

        Ok(())
    }
}

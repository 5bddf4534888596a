use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Line-oriented console over any reader/writer pair.
///
/// The session runs against stdin/stdout; tests drive it with in-memory buffers.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print a block of text followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text).context("Failed to write output")
    }

    /// Show `message` and read one trimmed line. `None` at end of input.
    pub fn read_line(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", message).context("Failed to write prompt")?;
        self.writer.flush().context("Failed to flush stdout")?;

        let mut input = String::new();
        let read = self
            .reader
            .read_line(&mut input)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    /// Prompt user with a message and return their trimmed input.
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        match self.read_line(message)? {
            Some(input) => Ok(input),
            None => anyhow::bail!("Unexpected end of input at prompt '{}'", message.trim()),
        }
    }

    /// Prompt for a value of type `T`. Unparseable input is an error.
    pub fn prompt_parse<T>(&mut self, message: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let input = self.prompt(message)?;
        input
            .parse()
            .with_context(|| format!("Invalid value '{}' for '{}'", input, message.trim()))
    }

    /// Prompt user with a message and a default value. Returns default if input is empty.
    pub fn prompt_with_default(&mut self, message: &str, default: &str) -> Result<String> {
        let input = self.prompt(&format!("{} [{}]: ", message, default))?;
        if input.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_trims_and_echoes_message() {
        let mut c = console("  Ann  \n");
        assert_eq!(c.prompt("Name: ").unwrap(), "Ann");
        assert_eq!(String::from_utf8(c.into_writer()).unwrap(), "Name: ");
    }

    #[test]
    fn test_read_line_at_eof() {
        let mut c = console("");
        assert_eq!(c.read_line("> ").unwrap(), None);
        assert!(console("").prompt("> ").is_err());
    }

    #[test]
    fn test_prompt_parse() {
        let mut c = console("42\nabc\n");
        assert_eq!(c.prompt_parse::<i64>("n: ").unwrap(), 42);
        let err = c.prompt_parse::<i64>("n: ").unwrap_err();
        assert!(err.to_string().contains("Invalid value 'abc'"));
    }

    #[test]
    fn test_prompt_with_default() {
        let mut c = console("\nx\n");
        assert_eq!(c.prompt_with_default("Pick", "d").unwrap(), "d");
        assert_eq!(c.prompt_with_default("Pick", "d").unwrap(), "x");
    }
}

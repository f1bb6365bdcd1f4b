use std::io::{BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::Mutex;

use super::dialog::{DialogError, DialogProvider};
use super::Severity;

/// `DialogProvider` for command-line hosts.
///
/// Alerts are printed as `[severity] message` and wait for Enter. Confirmations print
/// `message [y/N] ` and only accept `y` or `yes`. End of input dismisses an alert and
/// cancels a confirmation. The streams sit behind one mutex, so dialogs from several
/// threads are shown one after another.
pub struct TerminalDialogProvider<R, W> {
    streams: Mutex<(R, W)>,
}

impl TerminalDialogProvider<BufReader<Stdin>, Stdout> {
    /// Creates a provider reading from stdin and writing to stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R, W> TerminalDialogProvider<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    /// Creates a provider over arbitrary input and output streams.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            streams: Mutex::new((input, output)),
        }
    }

    /// Consumes the provider and hands back its streams.
    ///
    /// # Errors
    /// - `DialogError::Unavailable` if a previous dialog panicked while holding the streams
    pub fn into_inner(self) -> Result<(R, W), DialogError> {
        self.streams
            .into_inner()
            .map_err(|_| DialogError::Unavailable("terminal streams poisoned".to_string()))
    }

    /// Writes `prompt`, then reads one line. `None` means end of input.
    fn prompt(&self, prompt: &str) -> Result<Option<String>, DialogError> {
        let mut streams = self
            .streams
            .lock()
            .map_err(|_| DialogError::Unavailable("terminal streams poisoned".to_string()))?;
        let (input, output) = &mut *streams;

        output.write_all(prompt.as_bytes()).map_err(unavailable)?;
        output.flush().map_err(unavailable)?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(unavailable)?;
        if read == 0 {
            // keep the next prompt on its own line
            output.write_all(b"\n").map_err(unavailable)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R, W> DialogProvider for TerminalDialogProvider<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn alert(&self, message: String, severity: Severity) -> Result<(), DialogError> {
        self.prompt(&format!(
            "[{severity}] {message}\n(press Enter to continue) "
        ))?;
        Ok(())
    }

    fn confirm(&self, message: String) -> Result<bool, DialogError> {
        let answer = self.prompt(&format!("{message} [y/N] "))?;
        Ok(answer.is_some_and(|line| is_affirmative(&line)))
    }
}

fn is_affirmative(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[allow(clippy::needless_pass_by_value)]
fn unavailable(err: std::io::Error) -> DialogError {
    DialogError::Unavailable(err.to_string())
}

//! Sources of input lines for the read-evaluate loop.
//!
//! Line editing and history are not part of the interpreter; they live behind
//! [`LineSource`]. [`EditorInput`] wraps `rustyline` for interactive use and
//! [`PlainInput`] reads from any buffered reader (pipes, files, tests).

use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};
use tracing::warn;

/// One read from a [`LineSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line of text without its trailing newline.
    Line(String),
    /// The read was interrupted (Ctrl-C at the prompt); nothing was entered.
    Interrupted,
    /// No more input.
    Eof,
}

/// Something that shows a prompt and hands back the next line.
pub trait LineSource {
    /// Display `prompt` and read one line.
    ///
    /// An error means input can no longer be read at all.
    fn read_line(&mut self, prompt: &str) -> Result<Input>;
}

/// Interactive line editor with in-memory history.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("failed to initialise line editor")?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let recorded = if line.trim().is_empty() {
                    Ok(false)
                } else {
                    self.editor.add_history_entry(line.as_str())
                };
                Ok(accept_line(line, recorded))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(err) => Err(err).context("failed to read input"),
        }
    }
}

/// History is a convenience: failing to record a line is logged, and the line
/// is still handed to the interpreter.
fn accept_line(line: String, recorded: rustyline::Result<bool>) -> Input {
    if let Err(e) = recorded {
        warn!(error = %e, "failed to record history entry");
    }
    Input::Line(line)
}

/// Reads lines from a buffered reader, writing the prompt to `W` first.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected. A last
/// line without a trailing newline is still returned; the read after it
/// reports [`Input::Eof`].
pub struct PlainInput<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> PlainInput<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineSource for PlainInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        self.prompt_out.write_all(prompt.as_bytes())?;
        self.prompt_out.flush()?;

        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(Input::Eof);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        Ok(Input::Line(String::from_utf8_lossy(&buf).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    fn plain(data: &[u8]) -> PlainInput<Cursor<Vec<u8>>, Vec<u8>> {
        PlainInput::new(Cursor::new(data.to_vec()), Vec::new())
    }

    #[test]
    fn test_plain_strips_newline_and_prompts() {
        let mut input = plain(b"ls -la\nexit\n");

        assert_eq!(input.read_line("> ").unwrap(), Input::Line("ls -la".into()));
        assert_eq!(input.read_line("> ").unwrap(), Input::Line("exit".into()));
        assert_eq!(input.read_line("> ").unwrap(), Input::Eof);
        assert_eq!(input.prompt_out, b"> > > ");
    }

    #[test]
    fn test_plain_keeps_final_line_without_newline() {
        let mut input = plain(b"help");

        assert_eq!(input.read_line("").unwrap(), Input::Line("help".into()));
        assert_eq!(input.read_line("").unwrap(), Input::Eof);
    }

    #[test]
    fn test_plain_empty_line_is_not_eof() {
        let mut input = plain(b"\n");

        assert_eq!(input.read_line("").unwrap(), Input::Line(String::new()));
        assert_eq!(input.read_line("").unwrap(), Input::Eof);
    }

    #[test]
    fn test_plain_replaces_invalid_utf8() {
        let mut input = plain(b"echo \xff\n");

        assert_eq!(
            input.read_line("").unwrap(),
            Input::Line("echo \u{fffd}".into())
        );
    }

    #[test]
    fn test_history_failure_still_returns_line() {
        let failed = Err(ReadlineError::Io(io::Error::other("history full")));

        assert_eq!(accept_line("ls -la".into(), failed), Input::Line("ls -la".into()));
        assert_eq!(accept_line("help".into(), Ok(true)), Input::Line("help".into()));
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device gone"))
        }
    }

    #[test]
    fn test_plain_read_error_is_fatal() {
        let mut input = PlainInput::new(io::BufReader::new(Broken), Vec::new());

        let err = input.read_line("").unwrap_err();
        assert!(format!("{err:#}").contains("device gone"));
    }
}

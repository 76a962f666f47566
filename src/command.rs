use std::io::Write;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// This mirrors the convention used by POSIX shells and many command-line tools.
pub type ExitCode = i32;

/// Exit code reported when a command cannot be found.
pub const NOT_FOUND: ExitCode = 127;

/// Exit code reported when a command exists but cannot be started.
pub const NOT_EXECUTABLE: ExitCode = 126;

/// Whether the input loop should read another line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Result of dispatching one command.
///
/// `code` says whether the command succeeded and drives `&&` / `||`.
/// `flow` says whether the shell keeps running and drives the input loop.
/// Only the `exit` built-in produces [`Flow::Stop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub code: ExitCode,
    pub flow: Flow,
}

impl Outcome {
    /// A finished command that lets the shell keep reading input.
    pub fn proceed(code: ExitCode) -> Self {
        Self {
            code,
            flow: Flow::Continue,
        }
    }

    /// Successful no-op, used for empty input.
    pub fn nothing() -> Self {
        Self::proceed(0)
    }

    /// Request to end the input loop.
    pub fn stop() -> Self {
        Self {
            code: 0,
            flow: Flow::Stop,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.code == 0
    }

    pub fn should_stop(&self) -> bool {
        self.flow == Flow::Stop
    }
}

/// Output and error streams used by built-ins and for diagnostics.
///
/// External commands never write here; they inherit the real process stdio.
pub struct Streams {
    pub out: Box<dyn Write>,
    pub err: Box<dyn Write>,
}

impl Streams {
    pub fn new(out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Self { out, err }
    }

    /// Streams bound to the process's standard output and standard error.
    pub fn inherit() -> Self {
        Self::new(Box::new(std::io::stdout()), Box::new(std::io::stderr()))
    }

    /// Write a `ush: <message>` diagnostic to the error stream.
    ///
    /// A broken error stream is not worth failing the command over, so write
    /// errors are dropped here.
    pub fn diagnose(&mut self, message: impl std::fmt::Display) {
        let _ = writeln!(self.err, "{}: {}", crate::NAME, message);
        let _ = self.err.flush();
    }
}

impl Default for Streams {
    fn default() -> Self {
        Self::inherit()
    }
}

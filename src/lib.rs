//! `ush`, a minimal command shell.
//!
//! The crate models the core of an interactive shell: read a line, split it at
//! `&&` / `||`, tokenize each segment on whitespace, dispatch the resulting
//! argument vector to a built-in (`cd`, `help`, `exit`) or to an external
//! program, wait for it, and decide whether to keep going. There is no quoting,
//! expansion, redirection, piping or job control.
//!
//! The main entry point is [`Interpreter`]. Every dispatch yields an
//! [`Outcome`], which carries two separate signals: an exit code, which drives
//! `&&` / `||`, and a [`Flow`], which tells the input loop whether to read
//! another line. Only the `exit` built-in stops the loop.

pub mod builtin;
pub mod command;
pub mod config;
pub mod external;
pub mod input;
mod interpreter;
mod io_adapters;
pub mod lexer;
pub mod logging;
pub mod parser;

/// Name used to prefix diagnostics.
pub const NAME: &str = "ush";

pub use command::{ExitCode, Flow, Outcome, Streams};
pub use interpreter::{DEFAULT_PROMPT, Interpreter, Termination};
pub use io_adapters::MemWriter;

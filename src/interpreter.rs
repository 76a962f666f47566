use crate::builtin::Builtin;
use crate::command::{Outcome, Streams};
use crate::external;
use crate::input::{Input, LineSource};
use crate::lexer;
use crate::parser::{self, Operator};
use anyhow::Result;
use tracing::{debug, trace};

/// Default prompt printed before each line is read.
pub const DEFAULT_PROMPT: &str = "ush> ";

/// Why [`Interpreter::repl`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The `exit` built-in ran.
    Exit,
    /// The line source ran out of input.
    EndOfInput,
}

/// A minimal shell interpreter that runs built-in and external commands.
///
/// A line is split at its `&&` / `||` operators, each segment is tokenized on
/// whitespace and dispatched either to a [`Builtin`] or to an external program.
/// Execution is strictly sequential: a segment never starts before the
/// previous one has finished.
///
/// Example
/// ```
/// use ush::{Flow, Interpreter};
/// let mut sh = Interpreter::default();
/// assert_eq!(sh.evaluate("help && exit").flow, Flow::Stop);
/// assert_eq!(sh.dispatch(&[]).flow, Flow::Continue);
/// ```
pub struct Interpreter {
    streams: Streams,
    prompt: String,
}

impl Interpreter {
    /// Create an interpreter writing to the given streams.
    pub fn with_streams(streams: Streams) -> Self {
        Self {
            streams,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Create an interpreter bound to the process's stdout and stderr.
    pub fn new() -> Self {
        Self::with_streams(Streams::inherit())
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Run one tokenized command.
    ///
    /// This is the only place that decides between a built-in and an external
    /// program. An empty argument vector is a successful no-op.
    pub fn dispatch(&mut self, args: &[&str]) -> Outcome {
        let Some(&name) = args.first() else {
            return Outcome::nothing();
        };
        let outcome = match Builtin::lookup(name) {
            Some(builtin) => {
                debug!(builtin = name, argc = args.len(), "dispatching built-in");
                builtin.execute(args, &mut self.streams)
            }
            None => {
                debug!(program = name, argc = args.len(), "dispatching external");
                external::launch(args, &mut self.streams)
            }
        };
        trace!(?outcome, "dispatched");
        outcome
    }

    /// Evaluate one raw input line, honouring `&&` and `||`.
    ///
    /// The line is folded left to right: `&&` runs the next segment only if
    /// the last outcome succeeded, `||` only if it failed. A skipped segment
    /// leaves the last outcome in place. As soon as any segment asks the shell
    /// to stop, nothing further runs and the stop is returned.
    pub fn evaluate(&mut self, line: &str) -> Outcome {
        let chain = parser::parse_chain(line);
        let mut outcome = self.dispatch_segment(chain.first);

        for (op, segment) in chain.rest {
            if outcome.should_stop() {
                break;
            }
            let run = match op {
                Operator::And => outcome.succeeded(),
                Operator::Or => !outcome.succeeded(),
            };
            if run {
                outcome = self.dispatch_segment(segment);
            } else {
                trace!(op = op.symbol(), segment, "short-circuited");
            }
        }
        outcome
    }

    fn dispatch_segment(&mut self, segment: &str) -> Outcome {
        let args = lexer::split_into_tokens(segment);
        self.dispatch(&args)
    }

    /// Read-evaluate loop.
    ///
    /// Prompts, reads a line and evaluates it, for as long as the outcome lets
    /// the shell continue. Returns when `exit` runs or the input ends. An error
    /// from the line source is fatal and is returned to the caller.
    pub fn repl(&mut self, source: &mut dyn LineSource) -> Result<Termination> {
        loop {
            let line = match source.read_line(&self.prompt)? {
                Input::Line(line) => line,
                Input::Interrupted => continue,
                Input::Eof => {
                    debug!("end of input");
                    return Ok(Termination::EndOfInput);
                }
            };
            if self.evaluate(&line).should_stop() {
                return Ok(Termination::Exit);
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

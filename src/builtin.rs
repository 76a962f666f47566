use crate::command::{ExitCode, Outcome, Streams};
use anyhow::{Context, Result, bail};
use std::env;
use std::io::Write;
use tracing::debug;

/// Built-in commands known to the shell at compile time.
///
/// Built-ins run in the shell process itself, without spawning a child. The
/// set is fixed: lookup is an exact, case-sensitive match on [`Builtin::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Cd,
    Help,
    Exit,
}

impl Builtin {
    /// Every built-in, in the order `help` lists them.
    pub const ALL: [Builtin; 3] = [Builtin::Cd, Builtin::Help, Builtin::Exit];

    /// Canonical name of the command, e.g. "cd".
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Cd => "cd",
            Builtin::Help => "help",
            Builtin::Exit => "exit",
        }
    }

    pub fn lookup(name: &str) -> Option<Builtin> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    /// Run the built-in with the full argument vector (`args[0]` is its name).
    ///
    /// A failing built-in reports its error on the error stream and yields
    /// exit code 1; it never stops the shell. Only `exit` returns a stopping
    /// outcome.
    pub fn execute(self, args: &[&str], streams: &mut Streams) -> Outcome {
        let result = match self {
            Builtin::Cd => cd(args),
            Builtin::Help => help(&mut streams.out),
            Builtin::Exit => return Outcome::stop(),
        };
        match result {
            Ok(code) => Outcome::proceed(code),
            Err(e) => {
                streams.diagnose(format!("{e:#}"));
                Outcome::proceed(1)
            }
        }
    }
}

/// Change the process's working directory to `args[1]`.
///
/// Arguments past the target are ignored.
fn cd(args: &[&str]) -> Result<ExitCode> {
    let Some(target) = args.get(1) else {
        bail!("expected argument to \"cd\"");
    };
    env::set_current_dir(target).with_context(|| format!("cd: {target}"))?;
    debug!(dir = %target, "changed working directory");
    Ok(0)
}

/// Print the banner and the list of built-in names.
fn help(out: &mut dyn Write) -> Result<ExitCode> {
    writeln!(out, "Welcome to USH - Utkarsh's Shell")?;
    writeln!(out, "Available built-in commands:")?;
    for builtin in Builtin::ALL {
        writeln!(out, "  {}", builtin.name())?;
    }
    writeln!(out, "Use system commands as you would in any UNIX shell.")?;
    out.flush()?;
    Ok(0)
}

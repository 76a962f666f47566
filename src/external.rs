use crate::command::{ExitCode, NOT_EXECUTABLE, NOT_FOUND, Outcome, Streams};
use std::borrow::Cow;
use std::env;
use std::ffi::OsStr;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus};
use tracing::{debug, warn};

/// Run a program that is not a built-in and wait for it to terminate.
///
/// `args[0]` is resolved through `PATH` (see [`find_command_path`]) and becomes
/// the child's `argv[0]`; the rest are passed through as its arguments. The
/// child inherits stdio and the current directory. The shell blocks until the
/// child has exited or been killed; a stopped child keeps it waiting.
///
/// Failures to find or start the program are reported on the error stream.
/// Whatever happens, the returned outcome never stops the shell.
pub fn launch(args: &[&str], streams: &mut Streams) -> Outcome {
    let search_paths = env::var_os("PATH").unwrap_or_default();
    launch_in(&search_paths, args, streams)
}

/// [`launch`] with an explicit search path instead of `$PATH`.
fn launch_in(search_paths: &OsStr, args: &[&str], streams: &mut Streams) -> Outcome {
    let Some((&name, rest)) = args.split_first() else {
        return Outcome::nothing();
    };

    let Some(executable) = find_command_path(search_paths, Path::new(name)) else {
        streams.diagnose(format_args!("{name}: command not found"));
        return Outcome::proceed(NOT_FOUND);
    };

    // Child output must not overtake text we have already buffered.
    let _ = streams.out.flush();

    let mut child = match spawn(&executable, name, rest) {
        Ok(child) => child,
        Err(e) => {
            streams.diagnose(format_args!("{name}: {e}"));
            let code = match e.kind() {
                ErrorKind::NotFound => NOT_FOUND,
                _ => NOT_EXECUTABLE,
            };
            return Outcome::proceed(code);
        }
    };
    debug!(pid = child.id(), program = %executable.display(), "spawned");

    match child.wait() {
        Ok(status) => {
            let code = exit_code(status);
            debug!(pid = child.id(), code, "child terminated");
            Outcome::proceed(code)
        }
        Err(e) => {
            warn!(pid = child.id(), error = %e, "wait failed");
            streams.diagnose(format_args!("{name}: {e}"));
            Outcome::proceed(1)
        }
    }
}

/// Start `executable` with `argv[0]` set to `name`.
///
/// A file the kernel refuses with `ENOEXEC` (an executable text file without
/// a `#!` line) is handed to `/bin/sh` as a script, as `execvp` does.
fn spawn(executable: &Path, name: &str, rest: &[&str]) -> io::Result<Child> {
    let mut command = Command::new(executable);
    command.args(rest);
    set_arg0(&mut command, name);
    match command.spawn() {
        Err(e) if is_exec_format_error(&e) => {
            debug!(program = %executable.display(), "no interpreter line, running with /bin/sh");
            let mut script = Command::new("/bin/sh");
            script.arg(executable).args(rest);
            set_arg0(&mut script, "sh");
            script.spawn()
        }
        result => result,
    }
}

#[cfg(unix)]
fn is_exec_format_error(e: &io::Error) -> bool {
    e.raw_os_error() == Some(libc::ENOEXEC)
}

#[cfg(not(unix))]
fn is_exec_format_error(_e: &io::Error) -> bool {
    false
}

#[cfg(unix)]
fn set_arg0(command: &mut Command, name: &str) {
    use std::os::unix::process::CommandExt;
    command.arg0(name);
}

#[cfg(not(unix))]
fn set_arg0(_command: &mut Command, _name: &str) {}

/// Shell-style exit code: the child's own code, or `128 + signal` if killed.
fn exit_code(status: ExitStatus) -> ExitCode {
    match status.code() {
        Some(x) => x,
        None => terminated_by_signal(status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(status: ExitStatus) -> ExitCode {
    use std::os::unix::process::ExitStatusExt;
    match status.signal() {
        Some(signal) => 128 + signal,
        None => 1,
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_status: ExitStatus) -> ExitCode {
    1
}

/// Resolve a command path the way a typical shell would.
///
/// - Absolute path: returned if it names a file.
/// - Path with more than one component (`bin/sh`, `./foo`): resolved against
///   the current directory.
/// - Single component: each directory in `search_paths` is tried in order and
///   the first executable file found wins; files without an execute bit are
///   skipped.
/// - Empty path: `None`.
///
/// Borrows `path` when it is used as-is and allocates only for `PATH` hits.
pub fn find_command_path<'a>(search_paths: &OsStr, path: &'a Path) -> Option<Cow<'a, Path>> {
    if path.is_absolute() {
        return find_by_path(path).map(Cow::Borrowed);
    }

    let mut components = path.components();
    match (components.next(), components.next()) {
        (None, _) => None,
        (Some(x), None) if !path.starts_with(".") => {
            find_in_path(search_paths, x.as_os_str()).map(Cow::Owned)
        }
        _ => find_by_path(path).map(Cow::Borrowed),
    }
}

fn find_in_path(search_paths: &OsStr, cmd: &OsStr) -> Option<PathBuf> {
    env::split_paths(search_paths)
        .map(|dir| dir.join(cmd))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

fn find_by_path(path: &Path) -> Option<&Path> {
    if path.is_file() { Some(path) } else { None }
}

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ush"))
        .args(args)
        .env_remove("USH_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn ush");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_eof_exits_successfully_after_prompting() {
    let output = run_with_stdin(&["-q"], "\n");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "ush> ush> ");
}

#[test]
fn test_exit_stops_reading() {
    let output = run_with_stdin(&["-q"], "exit\nhelp\n");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "ush> ");
}

#[test]
fn test_help_and_exit_ends_session() {
    let output = run_with_stdin(&["-q"], "help && exit\nhelp\n");

    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.matches("Available built-in commands").count(), 1);
    assert_eq!(out.matches("ush> ").count(), 1);
}

#[test]
fn test_banner_is_printed_by_default() {
    let output = run_with_stdin(&[], "");

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Starting ush "));
}

#[test]
fn test_custom_prompt() {
    let output = run_with_stdin(&["-q", "--prompt", "$ "], "exit\n");

    assert_eq!(stdout(&output), "$ ");
}

#[test]
fn test_unknown_command_reports_and_continues() {
    let output = run_with_stdin(&["-q"], "this_cmd_does_not_exist_xyz\nhelp\n");

    assert!(output.status.success());
    assert!(stderr(&output).contains("ush: this_cmd_does_not_exist_xyz: command not found"));
    assert!(stdout(&output).contains("Available built-in commands"));
}

#[test]
#[cfg(unix)]
fn test_external_output_is_inherited() {
    let output = run_with_stdin(&["-q"], "echo hello   world\n");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "ush> hello world\nush> ");
}

#[test]
#[cfg(unix)]
fn test_cd_is_seen_by_later_children() {
    let output = run_with_stdin(&["-q"], "cd / && pwd\n");

    assert_eq!(stdout(&output), "ush> /\nush> ");
}

#[test]
#[cfg(unix)]
fn test_command_option_returns_line_status() {
    let ok = run_with_stdin(&["-c", "false || true"], "");
    assert_eq!(ok.status.code(), Some(0));
    assert_eq!(stdout(&ok), "");

    let failed = run_with_stdin(&["-c", "true && false"], "");
    assert_eq!(failed.status.code(), Some(1));

    let missing = run_with_stdin(&["-c", "this_cmd_does_not_exist_xyz"], "");
    assert_eq!(missing.status.code(), Some(127));
}

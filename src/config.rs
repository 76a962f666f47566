use crate::interpreter::DEFAULT_PROMPT;
use argh::FromArgs;

#[derive(FromArgs, Debug, PartialEq)]
/// A minimal command shell: built-ins, external programs and `&&` / `||` chaining.
pub struct Options {
    #[argh(option, short = 'c')]
    /// evaluate a single command line and exit with its status
    pub command: Option<String>,

    #[argh(option, default = "String::from(DEFAULT_PROMPT)")]
    /// prompt printed before each line
    pub prompt: String,

    #[argh(switch)]
    /// read plain lines from standard input, without line editing
    pub plain: bool,

    #[argh(switch, short = 'q')]
    /// do not print the startup banner
    pub quiet: bool,

    #[argh(option)]
    /// tracing filter directive, e.g. `debug` (overrides USH_LOG)
    pub log: Option<String>,
}

impl Options {
    /// Whether the startup banner should be printed.
    pub fn show_banner(&self) -> bool {
        !self.quiet && self.command.is_none()
    }
}

use std::io::{self, IsTerminal};
use std::process::ExitCode;
use ush::config::Options;
use ush::input::{EditorInput, PlainInput};
use ush::{Interpreter, logging};

fn main() -> ExitCode {
    let opts: Options = argh::from_env();
    logging::init(opts.log.as_deref());

    let mut sh = Interpreter::new();
    sh.set_prompt(opts.prompt.as_str());

    if let Some(line) = &opts.command {
        let outcome = sh.evaluate(line);
        return ExitCode::from(outcome.code.clamp(0, 255) as u8);
    }

    if opts.show_banner() {
        println!("Starting ush {}", env!("CARGO_PKG_VERSION"));
    }

    let result = if !opts.plain && io::stdin().is_terminal() {
        EditorInput::new().and_then(|mut editor| sh.repl(&mut editor))
    } else {
        let mut plain = PlainInput::new(io::stdin().lock(), io::stdout());
        sh.repl(&mut plain)
    };

    match result {
        Ok(termination) => {
            tracing::debug!(?termination, "shell finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {e:#}", ush::NAME);
            ExitCode::FAILURE
        }
    }
}

mod cli;
mod file_runner;
mod repl;

use std::process::ExitCode;

use cli::Cli;

fn main() -> ExitCode {
    let args = Cli::init();

    simple_logger::init_with_level(args.verbosity.into()).unwrap();

    match args.file {
        Some(path) => file_runner::run(&path),
        None => {
            repl::run();
            ExitCode::SUCCESS
        }
    }
}

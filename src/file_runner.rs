//! The file driver: read a whole source file, run it once through the
//! same lex/parse/eval pipeline as the REPL, with a fresh root
//! environment.

use std::path::Path;
use std::process::ExitCode;

use log::debug;

use monkey_lang::evaluator;
use monkey_lang::lexer::Lexer;
use monkey_lang::object::Environment;
use monkey_lang::parser::Parser;

use crate::repl::MONKEY_FACE;

pub fn run(path: &Path) -> ExitCode {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("could not read {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    };

    debug!("running {}", path.display());

    let lexer = Lexer::new(&source);
    let mut parser = Parser::new(lexer, source.as_str());
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        eprint!("{MONKEY_FACE}");
        for error in parser.errors() {
            eprintln!("{error}");
        }
        return ExitCode::FAILURE;
    }

    let env = Environment::new();
    let value = evaluator::eval(&program, &env);

    if let monkey_lang::object::Value::Error(message) = value {
        eprintln!("{message}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

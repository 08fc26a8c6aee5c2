//! The read-eval-print loop: one root environment kept alive for the
//! whole session, so `let` bindings from one line are visible on the
//! next.

use std::io::{self, BufRead, Write};

use log::debug;

use monkey_lang::evaluator;
use monkey_lang::lexer::Lexer;
use monkey_lang::object::Environment;
use monkey_lang::parser::Parser;

const PROMPT: &str = "cMK/> ";

pub const MONKEY_FACE: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

pub fn run() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let env = Environment::new();

    loop {
        print!("{PROMPT}");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim_end_matches('\n');

        if line == "exit" {
            break;
        }

        debug!("read line: {line:?}");

        let lexer = Lexer::new(line);
        let mut parser = Parser::new(lexer, line);
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            print!("{MONKEY_FACE}");
            for error in parser.errors() {
                println!("{error}");
            }
            continue;
        }

        let value = evaluator::eval(&program, &env);
        println!("{}", value.inspect());
    }
}

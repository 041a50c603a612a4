use std::env;
use std::fs;
use std::process;

use kartuli::codegen;
use kartuli::errors::CompileError;
use kartuli::lexer;
use kartuli::lexer::token::Token;
use kartuli::parser::Parser;
use kartuli::printer;

/// Suffix appended to the input filename for the token dump sibling file.
const RESULT_SUFFIX: &str = "_result";

fn main() {
    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        let program = args.first().map(String::as_str).unwrap_or("kartuli");
        eprintln!("usage: {} <source-file>", program);
        process::exit(1);
    };

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("failed to read '{}': {}", path, err);
            process::exit(1);
        }
    };

    if let Err(err) = run(path, &source) {
        report(&source, &err);
        process::exit(1);
    }
}

fn run(path: &str, source: &str) -> Result<(), CompileError> {
    let tokens = lexer::lex(source)?;

    // Literal textual dump of the token stream next to the input file; not
    // intended for round-trip parsing. A dump failure is not a compile
    // failure.
    let dump_path = format!("{}{}", path, RESULT_SUFFIX);
    if let Err(err) = fs::write(&dump_path, token_dump(&tokens)) {
        eprintln!("failed to write '{}': {}", dump_path, err);
    }

    let mut parser = Parser::new(tokens);
    let program = parser.parse_program()?;
    print!("{}", printer::render(&program));

    let instructions = codegen::generate(&program)?;
    print!("{}", codegen::tac::render(&instructions));

    Ok(())
}

fn token_dump(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!("({:?}, '{}')\n", token.kind, token.lexeme));
    }
    out
}

fn report(source: &str, err: &CompileError) {
    eprintln!("{}", err);
    if let Some((line, column)) = err.position() {
        if let Some(annotated) = kartuli::errors::pretty::annotate(source, line, column) {
            eprintln!("{}", annotated);
        }
    }
}

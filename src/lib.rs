pub mod codegen;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod symbols;

use codegen::tac::Instruction;
use errors::CompileError;

/// Run the whole pipeline: source text in, three-address listing out.
pub fn compile(source: &str) -> Result<Vec<Instruction>, CompileError> {
    let tokens = lexer::lex(source)?;
    let mut parser = parser::Parser::new(tokens);
    let program = parser.parse_program()?;
    let instructions = codegen::generate(&program)?;
    Ok(instructions)
}

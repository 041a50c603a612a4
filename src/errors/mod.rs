pub mod pretty;

use snafu::Snafu;

use crate::codegen::CodegenError;
use crate::lexer::LexError;
use crate::parser::ParseError;

/// Any failure from any pipeline stage. Nothing recovers internally; the
/// first failing stage aborts the run.
#[derive(Debug, Snafu)]
pub enum CompileError {
    #[snafu(display("{source}"), context(false))]
    Lex { source: LexError },
    #[snafu(display("{source}"), context(false))]
    Parse { source: ParseError },
    #[snafu(display("{source}"), context(false))]
    Codegen { source: CodegenError },
}

impl CompileError {
    /// Source position for caret diagnostics, when the stage recorded one.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            CompileError::Lex {
                source: LexError::UnexpectedCharacter { line, column, .. },
            } => Some((*line, *column)),
            CompileError::Parse { source } => match source {
                ParseError::Syntax { line, column, .. }
                | ParseError::Semantic { line, column, .. } => Some((*line, *column)),
            },
            CompileError::Codegen { .. } => None,
        }
    }
}

pub mod ast;
mod expr;

use snafu::{ResultExt, Snafu};

use crate::lexer::token::{Token, TokenKind, KW_ELSE, KW_FUNC, KW_IF, KW_PRINT, KW_VAR};
use crate::symbols::{Symbol, SymbolError, SymbolTable};
use ast::{Program, Stmt};

#[derive(Debug, Clone, PartialEq, Snafu)]
pub enum ParseError {
    #[snafu(display(
        "syntax error at line {line}, column {column}: expected {expected}, found {found}"
    ))]
    Syntax {
        line: usize,
        column: usize,
        expected: String,
        found: String,
    },
    #[snafu(display("semantic error at line {line}, column {column}: {source}"))]
    Semantic {
        line: usize,
        column: usize,
        source: SymbolError,
    },
}

/// Recursive-descent parser with a single forward cursor. Declarations and
/// assignments are recorded into the symbol table as statements are
/// recognized, so declare-before-use failures abort the parse.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    symbols: SymbolTable,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            symbols: SymbolTable::new(),
        }
    }

    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.statement()?);
        }

        Ok(Program { statements })
    }

    /// The table populated while parsing; read-only once `parse_program`
    /// returns.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.matches_keyword(KW_VAR) {
            return self.declaration();
        }

        if self.matches_keyword(KW_IF) {
            return self.if_statement();
        }

        if self.matches_keyword(KW_PRINT) {
            return self.print_statement();
        }

        if self.matches_keyword(KW_FUNC) {
            return self.function_declaration();
        }

        if self.check_kind(TokenKind::Identifier) {
            return self.assignment();
        }

        // No statement form starts here. Consume exactly one token so the
        // statement loop always makes progress.
        Ok(Stmt::Unknown(self.advance()))
    }

    fn declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect(TokenKind::Identifier, None, "variable name after 'აი'")?;
        self.expect(TokenKind::Assignment, None, "'=' after variable name")?;
        let value = self.expression()?;
        self.expect(TokenKind::Semicolon, None, "';' after declaration")?;

        self.symbols
            .declare(&name.lexeme, Symbol::Variable(value.clone()))
            .context(SemanticSnafu {
                line: name.line,
                column: name.column,
            })?;

        Ok(Stmt::Declaration {
            name: name.lexeme,
            value,
        })
    }

    fn assignment(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect(TokenKind::Identifier, None, "assignment target")?;
        self.expect(TokenKind::Assignment, None, "'=' after assignment target")?;
        let value = self.expression()?;
        self.expect(TokenKind::Semicolon, None, "';' after assignment")?;

        self.symbols
            .assign(&name.lexeme, value.clone())
            .context(SemanticSnafu {
                line: name.line,
                column: name.column,
            })?;

        Ok(Stmt::Assignment {
            name: name.lexeme,
            value,
        })
    }

    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Bracket, Some("("), "'(' after 'თუ'")?;
        let condition = self.condition()?;
        self.expect(TokenKind::Bracket, Some(")"), "')' after condition")?;

        let true_branch = self.block()?;
        let false_branch = if self.matches_keyword(KW_ELSE) {
            self.block()?
        } else {
            Vec::new()
        };

        Ok(Stmt::If {
            condition,
            true_branch,
            false_branch,
        })
    }

    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Bracket, Some("("), "'(' after 'დაბეჭდე'")?;
        let expr = self.expression()?;
        self.expect(TokenKind::Bracket, Some(")"), "')' after print argument")?;
        self.expect(TokenKind::Semicolon, None, "';' after print statement")?;

        Ok(Stmt::Print { expr })
    }

    fn function_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect(TokenKind::Identifier, None, "function name after 'ფუნქცია'")?;
        self.expect(TokenKind::Bracket, Some("("), "'(' after function name")?;

        let mut params = Vec::new();
        if !self.check_bracket(")") {
            loop {
                params.push(self.expect(TokenKind::Identifier, None, "parameter name")?);
                if !self.matches_kind(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::Bracket, Some(")"), "')' after parameter list")?;

        let param_names: Vec<String> = params.iter().map(|p| p.lexeme.clone()).collect();
        self.symbols
            .declare(
                &name.lexeme,
                Symbol::Function {
                    params: param_names.clone(),
                },
            )
            .context(SemanticSnafu {
                line: name.line,
                column: name.column,
            })?;

        // Flat namespace: parameters land in the same table as everything
        // else, so a parameter clashing with an earlier binding is a
        // duplicate declaration.
        for param in &params {
            self.symbols
                .declare(&param.lexeme, Symbol::Parameter)
                .context(SemanticSnafu {
                    line: param.line,
                    column: param.column,
                })?;
        }

        let body = self.block()?;

        Ok(Stmt::Function {
            name: name.lexeme,
            params: param_names,
            body,
        })
    }

    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.expect(TokenKind::Bracket, Some("{"), "'{' to open block")?;

        let mut statements = Vec::new();
        while !self.check_bracket("}") {
            if self.is_at_end() {
                return Err(self.error_here("'}' to close block"));
            }
            statements.push(self.statement()?);
        }
        self.expect(TokenKind::Bracket, Some("}"), "'}' to close block")?;

        Ok(statements)
    }

    pub(crate) fn matches_keyword(&mut self, lexeme: &str) -> bool {
        match self.peek() {
            Some(token) if token.kind == TokenKind::Keyword && token.lexeme == lexeme => {
                self.current += 1;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn matches_kind(&mut self, kind: TokenKind) -> bool {
        if self.check_kind(kind) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn check_kind(&self, kind: TokenKind) -> bool {
        matches!(self.peek(), Some(token) if token.kind == kind)
    }

    pub(crate) fn check_bracket(&self, lexeme: &str) -> bool {
        matches!(
            self.peek(),
            Some(token) if token.kind == TokenKind::Bracket && token.lexeme == lexeme
        )
    }

    /// Strict consume: advance and return the current token only when it
    /// matches the kind and, if given, the exact lexeme. Any mismatch is a
    /// syntax error; the cursor never advances past an unexpected token.
    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        lexeme: Option<&str>,
        expected: &str,
    ) -> Result<Token, ParseError> {
        match self.peek() {
            Some(token)
                if token.kind == kind && lexeme.is_none_or(|want| token.lexeme == want) =>
            {
                Ok(self.advance())
            }
            _ => Err(self.error_here(expected)),
        }
    }

    pub(crate) fn error_here(&self, expected: &str) -> ParseError {
        let (line, column, found) = match self.peek() {
            Some(token) => (token.line, token.column, format!("'{}'", token.lexeme)),
            None => {
                let (line, column) = self
                    .tokens
                    .last()
                    .map(|token| (token.line, token.column))
                    .unwrap_or((1, 1));
                (line, column, "end of input".to_string())
            }
        };
        ParseError::Syntax {
            line,
            column,
            expected: expected.to_string(),
            found,
        }
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        self.current += 1;
        token
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }
}

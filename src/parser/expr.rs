use snafu::ResultExt;

use crate::lexer::token::TokenKind;

use super::ast::{BinaryOp, Expr};
use super::{ParseError, Parser, SemanticSnafu};

impl Parser {
    /// expression := term (('+'|'-') term)*, left-associative.
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;

        while let Some(op) = self.match_operator(&["+", "-"]) {
            let right = self.term()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// term := factor (('*'|'/') factor)*, left-associative.
    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;

        while let Some(op) = self.match_operator(&["*", "/"]) {
            let right = self.factor()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// factor := NUMBER | IDENTIFIER | '(' expression ')'.
    fn factor(&mut self) -> Result<Expr, ParseError> {
        if self.check_kind(TokenKind::Number) {
            let token = self.advance();
            let value = token.lexeme.parse::<i64>().map_err(|_| ParseError::Syntax {
                line: token.line,
                column: token.column,
                expected: "integer literal".to_string(),
                found: format!("'{}'", token.lexeme),
            })?;
            return Ok(Expr::Number(value));
        }

        if self.check_kind(TokenKind::Identifier) {
            let token = self.advance();
            // Existence check only; no typing.
            self.symbols.lookup(&token.lexeme).context(SemanticSnafu {
                line: token.line,
                column: token.column,
            })?;
            return Ok(Expr::Variable(token.lexeme));
        }

        if self.check_bracket("(") {
            self.advance();
            let expr = self.expression()?;
            self.expect(TokenKind::Bracket, Some(")"), "')' after expression")?;
            return Ok(expr);
        }

        Err(self.error_here("expression"))
    }

    /// condition := expression (COMPARISON expression)?. At most one
    /// comparison; comparisons do not chain.
    pub(crate) fn condition(&mut self) -> Result<Expr, ParseError> {
        let expr = self.expression()?;

        if self.check_kind(TokenKind::Comparison) {
            let token = self.advance();
            let op = BinaryOp::from_lexeme(&token.lexeme).ok_or_else(|| ParseError::Syntax {
                line: token.line,
                column: token.column,
                expected: "comparison operator".to_string(),
                found: format!("'{}'", token.lexeme),
            })?;
            let right = self.expression()?;
            return Ok(Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            });
        }

        Ok(expr)
    }

    fn match_operator(&mut self, lexemes: &[&str]) -> Option<BinaryOp> {
        let token = self.peek()?;
        if token.kind != TokenKind::Operator || !lexemes.contains(&token.lexeme.as_str()) {
            return None;
        }
        let token = self.advance();
        BinaryOp::from_lexeme(&token.lexeme)
    }
}

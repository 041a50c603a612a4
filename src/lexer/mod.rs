pub mod token;

use snafu::Snafu;

use token::{is_keyword, Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Snafu)]
pub enum LexError {
    #[snafu(display(
        "lex error at line {line}, column {column}: unexpected character '{character}'"
    ))]
    UnexpectedCharacter {
        character: char,
        line: usize,
        column: usize,
    },
}

/// Tokenize a whole source text. Comments and whitespace never reach the
/// output; everything else is classified or rejected.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).lex()
}

struct Lexer {
    chars: Vec<char>,
    current: usize,
    start: usize,
    line: usize,
    column: usize,
    token_line: usize,
    token_column: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            start: 0,
            line: 1,
            column: 1,
            token_line: 1,
            token_column: 1,
            tokens: Vec::new(),
        }
    }

    fn lex(mut self) -> Result<Vec<Token>, LexError> {
        while !self.is_at_end() {
            self.start_token();
            self.scan_token()?;
        }

        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<(), LexError> {
        let c = self.advance();
        match c {
            '(' | ')' | '{' | '}' => self.add_token(TokenKind::Bracket),
            ';' => self.add_token(TokenKind::Semicolon),
            ',' => self.add_token(TokenKind::Comma),
            '+' | '-' | '*' => self.add_token(TokenKind::Operator),
            '/' => {
                if self.matches('/') {
                    self.skip_line_comment();
                } else {
                    self.add_token(TokenKind::Operator);
                }
            }
            '=' => {
                if self.matches('=') {
                    self.add_token(TokenKind::Comparison);
                } else {
                    self.add_token(TokenKind::Assignment);
                }
            }
            '!' => {
                if self.matches('=') {
                    self.add_token(TokenKind::Comparison);
                } else {
                    return UnexpectedCharacterSnafu {
                        character: c,
                        line: self.token_line,
                        column: self.token_column,
                    }
                    .fail();
                }
            }
            '<' | '>' => {
                self.matches('=');
                self.add_token(TokenKind::Comparison);
            }
            ' ' | '\r' | '\t' | '\n' => {}
            d if d.is_ascii_digit() => self.number(),
            a if is_ident_start(a) => self.identifier(),
            _ => {
                return UnexpectedCharacterSnafu {
                    character: c,
                    line: self.token_line,
                    column: self.token_column,
                }
                .fail()
            }
        }

        Ok(())
    }

    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }
        self.add_token(TokenKind::Number);
    }

    fn identifier(&mut self) {
        while is_ident_continue(self.peek()) {
            self.advance();
        }

        let lexeme = self.current_lexeme();
        let kind = if is_keyword(&lexeme) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.add_token(kind);
    }

    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme = self.current_lexeme();
        self.tokens
            .push(Token::new(kind, lexeme, self.token_line, self.token_column));
    }

    fn start_token(&mut self) {
        self.start = self.current;
        self.token_line = self.line;
        self.token_column = self.column;
    }

    fn current_lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

// Identifiers are Georgian script (Mkhedruli and the older rows share the
// U+10A0..=U+10FF block) or underscore, with ASCII digits allowed after the
// first character.
fn is_ident_start(c: char) -> bool {
    c == '_' || ('\u{10A0}'..='\u{10FF}').contains(&c)
}

fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

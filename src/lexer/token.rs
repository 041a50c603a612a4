/// Variable declaration keyword ("behold").
pub const KW_VAR: &str = "აი";
/// Conditional keyword.
pub const KW_IF: &str = "თუ";
/// Conditional-else keyword.
pub const KW_ELSE: &str = "თუარა";
/// Print keyword.
pub const KW_PRINT: &str = "დაბეჭდე";
/// Function declaration keyword.
pub const KW_FUNC: &str = "ფუნქცია";

/// Whole-word keyword check; identifiers that merely share a keyword
/// prefix stay identifiers.
pub fn is_keyword(word: &str) -> bool {
    matches!(word, KW_VAR | KW_IF | KW_ELSE | KW_PRINT | KW_FUNC)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Assignment,
    Comparison,
    Operator,
    Bracket,
    Semicolon,
    Comma,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, line: usize, column: usize) -> Self {
        Self {
            kind,
            lexeme,
            line,
            column,
        }
    }
}

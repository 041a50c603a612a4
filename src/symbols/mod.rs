use std::collections::HashMap;

use snafu::Snafu;

use crate::parser::ast::Expr;

#[derive(Debug, Clone, PartialEq, Snafu)]
pub enum SymbolError {
    #[snafu(display("duplicate declaration of '{name}'"))]
    DuplicateDeclaration { name: String },
    #[snafu(display("undeclared symbol '{name}'"))]
    UndeclaredSymbol { name: String },
}

/// What a name was bound to at its declaration site.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Variable(Expr),
    Parameter,
    Function { params: Vec<String> },
}

/// Single flat namespace for the whole program, function bodies included.
/// The parser is the only writer; after parsing the table is read-only.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fresh binding. A name may be declared exactly once.
    pub fn declare(&mut self, name: &str, symbol: Symbol) -> Result<(), SymbolError> {
        if self.entries.contains_key(name) {
            return DuplicateDeclarationSnafu { name }.fail();
        }
        self.entries.insert(name.to_string(), symbol);
        Ok(())
    }

    /// Overwrite the recorded value of an existing binding. This validates
    /// that the assignment target exists; nothing is evaluated.
    pub fn assign(&mut self, name: &str, value: Expr) -> Result<(), SymbolError> {
        if !self.entries.contains_key(name) {
            return UndeclaredSymbolSnafu { name }.fail();
        }
        self.entries.insert(name.to_string(), Symbol::Variable(value));
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<&Symbol, SymbolError> {
        self.entries
            .get(name)
            .ok_or_else(|| SymbolError::UndeclaredSymbol {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

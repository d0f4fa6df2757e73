//! Token definitions for the tokenizer.

use std::fmt;

/// A token produced by the tokenizer.
///
/// Tokens carry the literal source text they were built from. Equality is by
/// kind and text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The literal text of the token, never empty
    pub text: String,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.text)
    }
}

/// The different kinds of tokens shared by every language variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Reserved word of the language
    Keyword,
    /// Name that is neither a keyword nor a known library name
    Identifier,
    /// Run of digits and dots
    Number,
    /// Quoted text, including its quotes
    String,
    /// One of `( ) { } ; , .`
    Symbol,
    /// Operator spelling such as `+=` or `<<`
    Operator,
    /// Preprocessor directive such as `#include`
    Preprocessor,
    /// Header name following `#include`, such as `<stdio.h>`
    Header,
    /// Name from the language's standard library
    StandardFunction,
    /// Name of a well-known class or type
    ClassName,
}

impl TokenKind {
    /// Returns the human-readable label used in token tables.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Symbol => "Symbol",
            TokenKind::Operator => "Operator",
            TokenKind::Preprocessor => "Preprocessor",
            TokenKind::Header => "Header",
            TokenKind::StandardFunction => "Standard Function",
            TokenKind::ClassName => "Class Name",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Lexical analysis for C, Java and C++ source text.
//!
//! The tokenizer consumes source text one character at a time and emits a
//! flat sequence of classified tokens.
//!
//! ## Structure
//!
//! - `token.rs` - `Token` and `TokenKind` definitions
//! - `symbols.rs` - `SymbolTables` with the per-language word lists
//! - `profile.rs` - `LanguageProfile` and the C, Java and C++ profiles
//! - `engine.rs` - the `Tokenizer` state machine
//!
//! ## Usage
//!
//! ```rust
//! use polylex_core::lexer::{CProfile, TokenKind, Tokenizer};
//!
//! let profile = CProfile::new();
//! let tokens = Tokenizer::new(&profile).tokenize("int x;");
//!
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[1].kind, TokenKind::Identifier);
//! assert_eq!(tokens[2].kind, TokenKind::Symbol);
//! ```

mod engine;
mod profile;
mod symbols;
mod token;

pub use engine::{Mode, Step, Tokenizer, TokenizerState, Tokens};
pub use profile::{CProfile, CppProfile, JavaProfile, LanguageProfile};
pub use symbols::{STRUCTURAL_SYMBOLS, SymbolTables};
pub use token::{Token, TokenKind};

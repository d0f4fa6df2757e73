// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # polylex-core
//!
//! A character-driven finite-state tokenizer for C, Java and C++ source text.
//!
//! ## Overview
//!
//! This crate provides:
//! - A flat token model (`Token`, `TokenKind`)
//! - Per-language symbol tables and language profiles
//! - A single-pass maximal-munch tokenizer engine
//! - A variant selector keyed by file extension
//!
//! The tokenizer is a lexer only: it never builds a syntax tree and never
//! rejects input. Unterminated strings and stray characters are absorbed into
//! the surrounding token.
//!
//! ## Quick Start
//!
//! ```rust
//! use polylex_core::{Language, TokenKind, tokenize};
//!
//! let tokens = tokenize("a += b", Language::C);
//! assert_eq!(tokens[1].kind, TokenKind::Operator);
//! assert_eq!(tokens[1].text, "+=");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
pub mod lexer;
pub mod variant;

pub use error::{Error, Result};
pub use lexer::{LanguageProfile, Token, TokenKind, Tokenizer};
pub use variant::{Language, tokenize, tokenize_with_extension};

#[cfg(feature = "parallel")]
pub use variant::tokenize_many;

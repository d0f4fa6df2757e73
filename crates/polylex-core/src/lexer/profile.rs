//! Language profiles: the per-variant deltas plugged into the shared engine.

use super::{SymbolTables, TokenKind};
use crate::variant::Language;

/// The capability that adapts the tokenizer engine to one language.
///
/// The engine's transition table is shared by every variant. A profile
/// supplies the symbol tables and the few places where variants differ.
pub trait LanguageProfile: Send + Sync {
    /// The language this profile describes.
    fn language(&self) -> Language;

    /// The symbol tables used for classification.
    fn symbols(&self) -> &SymbolTables;

    /// Whether `#` opens a preprocessor directive.
    fn has_preprocessor(&self) -> bool;

    /// Whether `ch` extends an identifier that is already being built.
    fn continues_identifier(&self, ch: char) -> bool;

    /// Picks the candidate kind for a finished identifier.
    ///
    /// The emission step may still relabel the result as a class name or a
    /// standard function.
    fn classify_identifier(&self, text: &str) -> TokenKind;
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn keyword_or_identifier(symbols: &SymbolTables, text: &str) -> TokenKind {
    if symbols.is_keyword(text) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    }
}

/// Profile for C.
#[derive(Debug, Clone)]
pub struct CProfile {
    symbols: SymbolTables,
}

impl CProfile {
    /// Creates the C profile.
    pub fn new() -> Self {
        Self {
            symbols: SymbolTables::c(),
        }
    }
}

impl Default for CProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProfile for CProfile {
    fn language(&self) -> Language {
        Language::C
    }

    fn symbols(&self) -> &SymbolTables {
        &self.symbols
    }

    fn has_preprocessor(&self) -> bool {
        true
    }

    fn continues_identifier(&self, ch: char) -> bool {
        is_word_char(ch)
    }

    fn classify_identifier(&self, text: &str) -> TokenKind {
        keyword_or_identifier(&self.symbols, text)
    }
}

/// Profile for Java.
///
/// Identifiers absorb `.` so that member access such as `System.out.println`
/// forms one token.
#[derive(Debug, Clone)]
pub struct JavaProfile {
    symbols: SymbolTables,
}

impl JavaProfile {
    /// Creates the Java profile.
    pub fn new() -> Self {
        Self {
            symbols: SymbolTables::java(),
        }
    }
}

impl Default for JavaProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProfile for JavaProfile {
    fn language(&self) -> Language {
        Language::Java
    }

    fn symbols(&self) -> &SymbolTables {
        &self.symbols
    }

    fn has_preprocessor(&self) -> bool {
        false
    }

    fn continues_identifier(&self, ch: char) -> bool {
        ch == '.' || is_word_char(ch)
    }

    fn classify_identifier(&self, text: &str) -> TokenKind {
        if self.symbols.is_keyword(text) {
            TokenKind::Keyword
        } else if text.contains("System.out") {
            // Substring match: `MySystem.outer` is labelled too.
            TokenKind::StandardFunction
        } else {
            TokenKind::Identifier
        }
    }
}

/// Profile for C++.
///
/// Identifiers absorb `:` so that qualified names such as `std::cout` form
/// one token.
#[derive(Debug, Clone)]
pub struct CppProfile {
    symbols: SymbolTables,
}

impl CppProfile {
    /// Creates the C++ profile.
    pub fn new() -> Self {
        Self {
            symbols: SymbolTables::cpp(),
        }
    }
}

impl Default for CppProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProfile for CppProfile {
    fn language(&self) -> Language {
        Language::Cpp
    }

    fn symbols(&self) -> &SymbolTables {
        &self.symbols
    }

    fn has_preprocessor(&self) -> bool {
        true
    }

    fn continues_identifier(&self, ch: char) -> bool {
        ch == ':' || is_word_char(ch)
    }

    fn classify_identifier(&self, text: &str) -> TokenKind {
        if text.starts_with("std::") {
            if self.symbols.is_standard_function(text) {
                TokenKind::StandardFunction
            } else {
                TokenKind::Identifier
            }
        } else if self.symbols.is_class_name(text) {
            TokenKind::ClassName
        } else {
            keyword_or_identifier(&self.symbols, text)
        }
    }
}

/// Candidate kind for an identifier still pending at end of input.
///
/// Only the keyword test applies here in every variant; the emission step
/// still relabels class names and standard functions.
pub(crate) fn classify_at_end(profile: &dyn LanguageProfile, text: &str) -> TokenKind {
    keyword_or_identifier(profile.symbols(), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_continuation() {
        let c = CProfile::new();
        let java = JavaProfile::new();
        let cpp = CppProfile::new();

        assert!(c.continues_identifier('_'));
        assert!(c.continues_identifier('9'));
        assert!(!c.continues_identifier('.'));
        assert!(!c.continues_identifier(':'));

        assert!(java.continues_identifier('.'));
        assert!(!java.continues_identifier(':'));

        assert!(cpp.continues_identifier(':'));
        assert!(!cpp.continues_identifier('.'));
    }

    #[test]
    fn test_preprocessor_support() {
        assert!(CProfile::new().has_preprocessor());
        assert!(CppProfile::new().has_preprocessor());
        assert!(!JavaProfile::new().has_preprocessor());
    }

    #[test]
    fn test_c_classification() {
        let c = CProfile::new();
        assert_eq!(c.classify_identifier("while"), TokenKind::Keyword);
        // Standard functions are relabelled at emission, not here.
        assert_eq!(c.classify_identifier("printf"), TokenKind::Identifier);
    }

    #[test]
    fn test_java_classification() {
        let java = JavaProfile::new();
        assert_eq!(java.classify_identifier("public"), TokenKind::Keyword);
        assert_eq!(
            java.classify_identifier("System.out.println"),
            TokenKind::StandardFunction
        );
        assert_eq!(
            java.classify_identifier("MySystem.outer"),
            TokenKind::StandardFunction
        );
        assert_eq!(java.classify_identifier("Math.abs"), TokenKind::Identifier);
    }

    #[test]
    fn test_cpp_classification() {
        let cpp = CppProfile::new();
        assert_eq!(cpp.classify_identifier("std::cout"), TokenKind::StandardFunction);
        assert_eq!(cpp.classify_identifier("std::getline"), TokenKind::Identifier);
        assert_eq!(cpp.classify_identifier("constexpr"), TokenKind::Keyword);
        assert_eq!(cpp.classify_identifier("foo::bar"), TokenKind::Identifier);
    }

    #[test]
    fn test_classify_at_end_ignores_variant_rules() {
        let java = JavaProfile::new();
        assert_eq!(
            classify_at_end(&java, "System.out.println"),
            TokenKind::Identifier
        );
        assert_eq!(classify_at_end(&java, "return"), TokenKind::Keyword);
    }
}

//! Variant selection: mapping a language identification to a profile.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::lexer::{CProfile, CppProfile, JavaProfile, LanguageProfile, Token, Tokenizer};
use crate::{Error, Result};

/// The supported source languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// C, selected by `.c`
    C,
    /// Java, selected by `.java`
    Java,
    /// C++, selected by `.cpp`
    Cpp,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 3] = [Language::C, Language::Java, Language::Cpp];

    /// The file extension that selects this language, including the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::C => ".c",
            Language::Java => ".java",
            Language::Cpp => ".cpp",
        }
    }

    /// Selects a language from a file name suffix.
    ///
    /// Suffixes are tested in the order `.java`, `.c`, `.cpp`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path.to_string_lossy();

        [Language::Java, Language::C, Language::Cpp]
            .into_iter()
            .find(|language| name.ends_with(language.extension()))
            .ok_or_else(|| Error::UnsupportedVariant(path.display().to_string()))
    }

    /// Builds the profile for this language.
    pub fn profile(&self) -> Box<dyn LanguageProfile> {
        match self {
            Language::C => Box::new(CProfile::new()),
            Language::Java => Box::new(JavaProfile::new()),
            Language::Cpp => Box::new(CppProfile::new()),
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Parses an extension such as `.cpp`. Anything else is rejected.
    fn from_str(s: &str) -> Result<Self> {
        Language::ALL
            .into_iter()
            .find(|language| language.extension() == s)
            .ok_or_else(|| Error::UnsupportedVariant(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::C => write!(f, "C"),
            Language::Java => write!(f, "Java"),
            Language::Cpp => write!(f, "C++"),
        }
    }
}

/// Tokenizes `source` with the rules of `language`.
pub fn tokenize(source: &str, language: Language) -> Vec<Token> {
    let profile = language.profile();
    Tokenizer::new(profile.as_ref()).tokenize(source)
}

/// Tokenizes `source` with the language selected by `extension`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedVariant`] when `extension` is not one of
/// `.c`, `.java` or `.cpp`. No tokenization is attempted in that case.
pub fn tokenize_with_extension(source: &str, extension: &str) -> Result<Vec<Token>> {
    let language: Language = extension.parse()?;
    debug!(%language, "selected variant");
    Ok(tokenize(source, language))
}

/// Tokenizes independent sources in parallel.
///
/// Every source gets its own profile and state. Results keep input order.
#[cfg(feature = "parallel")]
pub fn tokenize_many(sources: &[(Language, &str)]) -> Vec<Vec<Token>> {
    use rayon::prelude::*;

    sources
        .par_iter()
        .map(|(language, source)| tokenize(source, *language))
        .collect()
}

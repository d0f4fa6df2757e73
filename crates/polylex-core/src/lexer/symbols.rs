//! Per-language symbol tables.
//!
//! Each language variant supplies closed, hard-coded word lists. The tables
//! are built once per run and only ever queried afterwards.
//!
//! ## Tables
//!
//! | Variant | Keywords | Extra operators | Standard functions | Class names |
//! |---------|----------|-----------------|--------------------|-------------|
//! | C | C99 + `inline`/`restrict` | - | `printf`, `malloc`, ... | - |
//! | Java | Java SE (no `goto`) | - | `System.out.println`, `Math.abs`, ... | `String`, `Integer`, `Double`, `Math` |
//! | C++ | C++20 reserved words | `->`, `::` | `std::cout`, `std::vector`, ... | `std::string`, `std::vector`, `std::map`, `std::set` |

use rustc_hash::FxHashSet;

/// Single-character structural symbols, emitted immediately in every variant.
pub const STRUCTURAL_SYMBOLS: &[char] = &['(', ')', '{', '}', ';', ',', '.'];

const BASE_OPERATORS: &[&str] = &[
    "==", "!=", ">=", "<=", "++", "--", "+=", "-=", "*=", "/=", "%=", "&&", "||", ">", "<", "+",
    "-", "*", "/", "%", "=", "!", "&", "|", "^", "<<", ">>", "~",
];

const CPP_EXTRA_OPERATORS: &[&str] = &["->", "::"];

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while",
];

const C_STANDARD_FUNCTIONS: &[&str] = &[
    "printf", "scanf", "malloc", "free", "exit", "fopen", "fclose", "fgets", "fputs", "fprintf",
    "fscanf", "strcpy", "strcat", "strlen", "strcmp", "atoi", "atof", "abs", "pow", "sqrt",
];

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "if", "implements", "import", "instanceof", "int", "interface", "long", "native",
    "new", "package", "private", "protected", "public", "return", "short", "static", "strictfp",
    "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try", "void",
    "volatile", "while",
];

const JAVA_STANDARD_FUNCTIONS: &[&str] = &[
    "System.out.println",
    "System.out.print",
    "Math.abs",
    "Math.max",
    "Math.min",
    "Math.sqrt",
    "Integer.parseInt",
    "Double.parseDouble",
];

const JAVA_CLASS_NAMES: &[&str] = &["String", "Integer", "Double", "Math"];

const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "constexpr", "const_cast", "continue", "co_await", "co_return", "decltype",
    "default", "delete", "do", "double", "dynamic_cast", "else", "enum", "explicit", "export",
    "extern", "false", "float", "for", "friend", "goto", "if", "inline", "int", "long",
    "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr", "operator", "or",
    "or_eq", "private", "protected", "public", "reflexpr", "register", "reinterpret_cast",
    "requires", "return", "short", "signed", "sizeof", "static", "static_assert", "static_cast",
    "struct", "switch", "template", "this", "thread_local", "throw", "true", "try", "typedef",
    "typeid", "typename", "union", "unsigned", "using", "virtual", "void", "volatile", "wchar_t",
    "while", "xor", "xor_eq",
];

const CPP_STANDARD_FUNCTIONS: &[&str] = &[
    "std::cout",
    "std::cin",
    "std::endl",
    "std::string",
    "std::vector",
    "std::map",
    "std::set",
    "std::abs",
    "std::pow",
    "std::sqrt",
];

const CPP_CLASS_NAMES: &[&str] = &["std::string", "std::vector", "std::map", "std::set"];

/// The read-only word lists that drive classification for one language.
#[derive(Debug, Clone)]
pub struct SymbolTables {
    keywords: FxHashSet<&'static str>,
    operators: FxHashSet<&'static str>,
    operator_starts: FxHashSet<char>,
    standard_functions: FxHashSet<&'static str>,
    class_names: FxHashSet<&'static str>,
}

impl SymbolTables {
    /// Builds tables from raw word lists.
    pub fn new(
        keywords: &[&'static str],
        operators: &[&'static str],
        standard_functions: &[&'static str],
        class_names: &[&'static str],
    ) -> Self {
        let operator_starts = operators.iter().filter_map(|op| op.chars().next()).collect();

        Self {
            keywords: keywords.iter().copied().collect(),
            operators: operators.iter().copied().collect(),
            operator_starts,
            standard_functions: standard_functions.iter().copied().collect(),
            class_names: class_names.iter().copied().collect(),
        }
    }

    /// Tables for the C variant.
    pub fn c() -> Self {
        Self::new(C_KEYWORDS, BASE_OPERATORS, C_STANDARD_FUNCTIONS, &[])
    }

    /// Tables for the Java variant.
    pub fn java() -> Self {
        Self::new(
            JAVA_KEYWORDS,
            BASE_OPERATORS,
            JAVA_STANDARD_FUNCTIONS,
            JAVA_CLASS_NAMES,
        )
    }

    /// Tables for the C++ variant.
    pub fn cpp() -> Self {
        let operators: Vec<&'static str> = BASE_OPERATORS
            .iter()
            .chain(CPP_EXTRA_OPERATORS)
            .copied()
            .collect();

        Self::new(
            CPP_KEYWORDS,
            &operators,
            CPP_STANDARD_FUNCTIONS,
            CPP_CLASS_NAMES,
        )
    }

    /// Returns true if `word` is a keyword.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Returns true if `spelling` is a complete operator.
    pub fn is_operator(&self, spelling: &str) -> bool {
        self.operators.contains(spelling)
    }

    /// Returns true if `ch` is the first character of some operator spelling.
    pub fn starts_operator(&self, ch: char) -> bool {
        self.operator_starts.contains(&ch)
    }

    /// Returns true if `pending` followed by `ch` is a complete operator.
    pub fn extends_operator(&self, pending: &str, ch: char) -> bool {
        let mut candidate = String::with_capacity(pending.len() + ch.len_utf8());
        candidate.push_str(pending);
        candidate.push(ch);
        self.operators.contains(candidate.as_str())
    }

    /// Returns true if `name` is a standard-library name.
    pub fn is_standard_function(&self, name: &str) -> bool {
        self.standard_functions.contains(name)
    }

    /// Returns true if `name` is a known class name.
    pub fn is_class_name(&self, name: &str) -> bool {
        self.class_names.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_tables() {
        let tables = SymbolTables::c();
        assert!(tables.is_keyword("restrict"));
        assert!(!tables.is_keyword("class"));
        assert!(tables.is_standard_function("printf"));
        assert!(!tables.is_class_name("String"));
        assert!(!tables.is_operator("->"));
    }

    #[test]
    fn test_java_tables() {
        let tables = SymbolTables::java();
        assert!(tables.is_keyword("synchronized"));
        assert!(!tables.is_keyword("goto"));
        assert!(tables.is_standard_function("System.out.println"));
        assert!(tables.is_class_name("Math"));
    }

    #[test]
    fn test_cpp_tables() {
        let tables = SymbolTables::cpp();
        assert!(tables.is_keyword("co_await"));
        assert!(tables.is_keyword("char8_t"));
        assert!(tables.is_keyword("reflexpr"));
        assert!(tables.is_operator("->"));
        assert!(tables.is_operator("::"));
        assert!(tables.is_class_name("std::vector"));
        assert!(tables.is_standard_function("std::endl"));
    }

    #[test]
    fn test_operator_starts() {
        let c = SymbolTables::c();
        assert!(c.starts_operator('+'));
        assert!(c.starts_operator('~'));
        assert!(!c.starts_operator(':'));
        assert!(!c.starts_operator('?'));

        let cpp = SymbolTables::cpp();
        assert!(cpp.starts_operator(':'));
    }

    #[test]
    fn test_extends_operator() {
        let tables = SymbolTables::c();
        assert!(tables.extends_operator("+", '='));
        assert!(tables.extends_operator("<", '<'));
        assert!(!tables.extends_operator("<<", '='));
        assert!(!tables.extends_operator("-", '>'));
        assert!(SymbolTables::cpp().extends_operator("-", '>'));
    }

    #[test]
    fn test_unknown_is_not_a_member() {
        let tables = SymbolTables::java();
        assert!(!tables.is_keyword(""));
        assert!(!tables.is_operator("==="));
        assert!(!tables.is_standard_function("println"));
    }
}

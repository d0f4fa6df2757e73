//! End-to-end tokenization tests over small C, Java and C++ programs.

use polylex_core::{Language, Token, TokenKind, tokenize, tokenize_with_extension};

const C_PROGRAM: &str = r#"#include <stdio.h>
#include <string.h>

int count(char* str) {
    int n = 0;
    while (str[n] != '\0') {
        n++;
    }
    return n;
}

int main() {
    char* word = malloc(64);
    scanf("%s", word);
    printf("%d\n", count(word) + strlen(word));
    free(word);
    return 0;
}
"#;

const JAVA_PROGRAM: &str = r#"public class Counter {
    public static int twice(int x) {
        return Math.max(x, 0) * 2;
    }

    public static void main(String[] args) {
        Integer n = Integer.parseInt("21");
        System.out.println("twice: " + twice(n));
    }
}
"#;

const CPP_PROGRAM: &str = r#"#include <iostream>
#include <vector>

int main() {
    std::vector<int> values;
    for (int i = 0; i < 3; i++) {
        values.push_back(i * 2);
    }
    std::cout << values.size() << std::endl;
    return 0;
}
"#;

fn kinds_and_texts(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
}

fn sorted_visible_chars<'a>(texts: impl Iterator<Item = &'a str>) -> Vec<char> {
    let mut chars: Vec<char> = texts
        .flat_map(str::chars)
        .filter(|c| !c.is_whitespace())
        .collect();
    chars.sort_unstable();
    chars
}

#[test]
fn test_every_visible_character_lands_in_one_token() {
    for (language, source) in [
        (Language::C, C_PROGRAM),
        (Language::Java, JAVA_PROGRAM),
        (Language::Cpp, CPP_PROGRAM),
    ] {
        let tokens = tokenize(source, language);
        assert_eq!(
            sorted_visible_chars(tokens.iter().map(|t| t.text.as_str())),
            sorted_visible_chars(std::iter::once(source)),
            "{language}"
        );
    }
}

#[test]
fn test_no_token_is_empty() {
    for language in Language::ALL {
        for source in [C_PROGRAM, JAVA_PROGRAM, CPP_PROGRAM, "@", "\"", "#", "<<"] {
            assert!(tokenize(source, language).iter().all(|t| !t.text.is_empty()));
        }
    }
}

#[test]
fn test_tokenizing_twice_is_identical() {
    for language in Language::ALL {
        for source in [C_PROGRAM, JAVA_PROGRAM, CPP_PROGRAM] {
            assert_eq!(tokenize(source, language), tokenize(source, language));
        }
    }
}

#[test]
fn test_c_program_prologue() {
    let tokens = tokenize(C_PROGRAM, Language::C);
    assert_eq!(
        kinds_and_texts(&tokens[..8]),
        vec![
            (TokenKind::Preprocessor, "#include"),
            (TokenKind::Header, "<stdio.h>"),
            (TokenKind::Preprocessor, "#include"),
            (TokenKind::Header, "<string.h>"),
            (TokenKind::Keyword, "int"),
            (TokenKind::Identifier, "count"),
            (TokenKind::Symbol, "("),
            (TokenKind::Keyword, "char"),
        ]
    );
}

#[test]
fn test_c_program_library_calls() {
    let tokens = tokenize(C_PROGRAM, Language::C);
    let standard: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::StandardFunction)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(standard, vec!["malloc", "scanf", "printf", "strlen", "free"]);

    let strings: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::String)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(strings, vec!["'\\0'", "\"%s\"", "\"%d\\n\""]);
}

#[test]
fn test_java_program_classification() {
    let tokens = tokenize(JAVA_PROGRAM, Language::Java);

    assert!(tokens.contains(&Token::new(TokenKind::Keyword, "public")));
    assert!(tokens.contains(&Token::new(TokenKind::StandardFunction, "Math.max")));
    assert!(tokens.contains(&Token::new(TokenKind::StandardFunction, "Integer.parseInt")));
    assert!(tokens.contains(&Token::new(
        TokenKind::StandardFunction,
        "System.out.println"
    )));
    assert!(tokens.contains(&Token::new(TokenKind::ClassName, "Integer")));
    assert!(tokens.contains(&Token::new(TokenKind::String, "\"twice: \"")));
    assert!(!tokens.iter().any(|t| t.kind == TokenKind::Preprocessor));
}

#[test]
fn test_cpp_program_classification() {
    let tokens = tokenize(CPP_PROGRAM, Language::Cpp);

    assert_eq!(
        kinds_and_texts(&tokens[..4]),
        vec![
            (TokenKind::Preprocessor, "#include"),
            (TokenKind::Header, "<iostream>"),
            (TokenKind::Preprocessor, "#include"),
            (TokenKind::Header, "<vector>"),
        ]
    );
    assert!(tokens.contains(&Token::new(TokenKind::ClassName, "std::vector")));
    assert!(tokens.contains(&Token::new(TokenKind::StandardFunction, "std::cout")));
    assert!(tokens.contains(&Token::new(TokenKind::StandardFunction, "std::endl")));
    assert!(tokens.contains(&Token::new(TokenKind::Operator, "<<")));
    assert!(tokens.contains(&Token::new(TokenKind::Operator, "++")));
}

#[test]
fn test_cpp_labels_are_not_keywords() {
    // `:` continues identifiers in C++, so a label swallows its colon.
    let tokens = tokenize("default: break;", Language::Cpp);
    assert_eq!(
        kinds_and_texts(&tokens),
        vec![
            (TokenKind::Identifier, "default:"),
            (TokenKind::Keyword, "break"),
            (TokenKind::Symbol, ";"),
        ]
    );
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let err = tokenize_with_extension("fn main() {}", ".rs").unwrap_err();
    assert_eq!(err, polylex_core::Error::UnsupportedVariant(".rs".to_string()));
}

#[test]
fn test_unterminated_string_does_not_panic() {
    for language in Language::ALL {
        let tokens = tokenize("x = \"abc", language);
        assert_eq!(
            tokens.last(),
            Some(&Token::new(TokenKind::String, "\"abc"))
        );
    }
}

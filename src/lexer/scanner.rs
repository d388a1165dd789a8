//! Scanner (tokenizer) for the miniature C-like language
//!
//! Walks source text left to right with a single combined pattern that is
//! the union of the per-category patterns, in the same precedence order the
//! classifier tests them. Each match is a maximal lexeme; whitespace and any
//! text participating in no pattern are skipped silently. The scan pass only
//! finds lexeme extents — [`classify`](super::token::classify) assigns the
//! final kind, which is what resolves keyword-vs-identifier overlap.
//!
//! Scanning never fails: unclassifiable lexemes become [`TokenKind::Unknown`]
//! tokens and the scan continues to the end of input.

use super::token::{classify, Token, TokenKind};
use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::LazyLock;

// The master scan pattern. Alternation is leftmost-first, so the two
// character operators are listed ahead of the single character ones;
// otherwise `<=` would scan as `<` followed by `=`. The quoted-char
// alternative admits an underscore that the classifier rejects, so a
// scanned `'_'` comes out as an Unknown token.
static SCAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\b(?:auto|double|int|struct|break|else|long|switch|case|enum|register|typedef|char|extern|return|union|const|float|short|unsigned|continue|for|signed|void|default|goto|sizeof|volatile|do|if|static|while)\b|[a-zA-Z_][a-zA-Z0-9_]*|\b[0-9]+\.[0-9]+\b|\b[0-9]+\b|"[^"]*"|'[a-zA-Z_]'|==|!=|<=|>=|[-+*/%<>=]|[;(){},]|#[ \t]*(?:include|define|undef|if|ifdef|ifndef|else|elif|endif|line|error|pragma)"#,
    )
    .expect("scan pattern")
});

/// Ordered set of distinct identifier lexemes, in first-occurrence order.
///
/// Built incrementally during scanning; a pure side-output never consumed by
/// the recognizer. Membership checks go through a hash set so insertion does
/// not degrade quadratically on large inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    names: Vec<String>,
    seen: FxHashSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name if absent. Returns true if the name was new.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.names.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// The name at a given insertion index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Iterate names in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Everything one scan produces: the token sequence and the symbol table.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
}

/// Scan source text into a token sequence and a symbol table.
pub fn scan(source: &str) -> ScanOutput {
    let mut tokens = Vec::new();
    let mut symbols = SymbolTable::new();

    for found in SCAN.find_iter(source) {
        let lexeme = found.as_str();
        let kind = classify(lexeme);
        if kind == TokenKind::Identifier {
            symbols.insert(lexeme);
        }
        tokens.push(Token::new(kind, lexeme));
    }

    ScanOutput { tokens, symbols }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).tokens.into_iter().map(|t| t.kind).collect()
    }

    fn lexemes(source: &str) -> Vec<String> {
        scan(source).tokens.into_iter().map(|t| t.lexeme).collect()
    }

    #[test]
    fn test_simple_statement() {
        let out = scan("x = 1;");
        let expected = [
            Token::new(TokenKind::Identifier, "x"),
            Token::new(TokenKind::Operator, "="),
            Token::new(TokenKind::Integer, "1"),
            Token::new(TokenKind::Symbol, ";"),
        ];
        assert_eq!(out.tokens, expected);
    }

    #[test]
    fn test_keyword_vs_identifier_boundaries() {
        assert_eq!(
            kinds("while while1"),
            vec![TokenKind::Keyword, TokenKind::Identifier]
        );
        // No boundary splits inside an identifier that contains a keyword.
        assert_eq!(lexemes("intx"), vec!["intx"]);
        assert_eq!(kinds("intx"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_maximal_munch_operators() {
        assert_eq!(lexemes("k*k<=n"), vec!["k", "*", "k", "<=", "n"]);
        assert_eq!(lexemes("a==b!=c>=d"), vec!["a", "==", "b", "!=", "c", ">=", "d"]);
        assert_eq!(
            kinds("<="),
            vec![TokenKind::Operator],
            "<= must scan as one operator"
        );
    }

    #[test]
    fn test_float_not_split() {
        assert_eq!(lexemes("3.14"), vec!["3.14"]);
        assert_eq!(kinds("3.14"), vec![TokenKind::Float]);
        // A bare dot participates in no pattern.
        assert_eq!(lexemes("3 . 14"), vec!["3", "14"]);
    }

    #[test]
    fn test_string_with_spaces() {
        let out = scan(r#"print("hello world");"#);
        assert_eq!(
            out.tokens[2],
            Token::new(TokenKind::String, r#""hello world""#)
        );
    }

    #[test]
    fn test_unknown_token_from_quoted_underscore() {
        // The scan union admits '_' but the classifier does not.
        let out = scan("x = '_';");
        assert_eq!(out.tokens[2], Token::new(TokenKind::Unknown, "'_'"));
    }

    #[test]
    fn test_unmatched_text_is_skipped() {
        assert_eq!(lexemes("a @ $ b"), vec!["a", "b"]);
        assert_eq!(lexemes("a && b"), vec!["a", "b"]);
        assert_eq!(lexemes("!x"), vec!["x"]);
    }

    #[test]
    fn test_preprocessor_directive() {
        let out = scan("#include <stdio.h>");
        assert_eq!(out.tokens[0], Token::new(TokenKind::Preprocessor, "#include"));
        // The rest of the line scans as ordinary lexemes.
        assert_eq!(out.tokens[1], Token::new(TokenKind::Operator, "<"));
    }

    #[test]
    fn test_symbol_table_order_and_dedup() {
        let out = scan("b = a; a = c; b = b + 1;");
        let names: Vec<&str> = out.symbols.iter().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(out.symbols.len(), 3);
        assert!(out.symbols.contains("a"));
        assert!(!out.symbols.contains("x"));
        assert_eq!(out.symbols.get(0), Some("b"));
        assert_eq!(out.symbols.get(3), None);
    }

    #[test]
    fn test_keywords_not_in_symbol_table() {
        let out = scan("while (x) { y = 1; }");
        let names: Vec<&str> = out.symbols.iter().collect();
        assert_eq!(names, vec!["x", "y"]);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let source = "count = count + 1; while (n < limit) { print(n, \"\\n\"); }";
        assert_eq!(scan(source), scan(source));
    }

    #[test]
    fn test_empty_input() {
        let out = scan("");
        assert!(out.tokens.is_empty());
        assert!(out.symbols.is_empty());
    }
}

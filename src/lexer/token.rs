//! Token model and lexeme classification
//!
//! A [`Token`] is a classified lexeme: the exact substring matched in the
//! source plus the [`TokenKind`] assigned to it. Classification is a pure
//! function from lexeme to kind, driven by a fixed, priority-ordered set of
//! patterns. The order is load-bearing: every keyword also matches the
//! identifier pattern, and every integer is a prefix of some float, so each
//! lexeme must be tested against the more specific category first.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// The category assigned to a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Integer,
    Float,
    String,
    Char,
    Operator,
    Symbol,
    Preprocessor,
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Char => "CHAR",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Preprocessor => "PREPROCESSOR",
            TokenKind::Unknown => "UNKNOWN",
        };
        write!(f, "{}", name)
    }
}

/// A classified lexeme. Immutable once created; two tokens are equal iff
/// both the kind and the lexeme match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// The end-of-input sentinel: `Unknown` kind, empty lexeme. Returned by
    /// the recognizer's `peek` once the cursor is past the last real token.
    pub fn empty() -> Self {
        Self {
            kind: TokenKind::Unknown,
            lexeme: String::new(),
        }
    }

    /// True for the end-of-input sentinel.
    pub fn is_empty(&self) -> bool {
        self.kind == TokenKind::Unknown && self.lexeme.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "end of input")
        } else {
            write!(f, "'{}' ({})", self.lexeme, self.kind)
        }
    }
}

// Classification patterns, one per category, anchored so a lexeme must match
// in its entirety. Compiled once on first use and shared read-only.

static KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "^(?:auto|double|int|struct|break|else|long|switch|\
         case|enum|register|typedef|char|extern|return|union|\
         const|float|short|unsigned|continue|for|signed|void|\
         default|goto|sizeof|volatile|do|if|static|while)$",
    )
    .expect("keyword pattern")
});

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*$").expect("identifier pattern"));

static FLOAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").expect("float pattern"));

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]+$").expect("integer pattern"));

static STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"[^"]*"$"#).expect("string pattern"));

static CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^'[a-zA-Z]'$").expect("char pattern"));

static OPERATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:==|!=|<=|>=|[-+*/%<>=])$").expect("operator pattern"));

static SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[;(){},']$").expect("symbol pattern"));

static PREPROCESSOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "^#[ \t]*(?:include|define|undef|if|ifdef|ifndef|else|elif|endif|line|error|pragma)$",
    )
    .expect("preprocessor pattern")
});

/// Assign a [`TokenKind`] to a lexeme.
///
/// Total: anything matching no category is `Unknown`. The tests run in
/// most-specific-first order, so `while` is a keyword rather than an
/// identifier and `3.14` is a float rather than an integer.
pub fn classify(lexeme: &str) -> TokenKind {
    if KEYWORD.is_match(lexeme) {
        TokenKind::Keyword
    } else if IDENTIFIER.is_match(lexeme) {
        TokenKind::Identifier
    } else if FLOAT.is_match(lexeme) {
        TokenKind::Float
    } else if INTEGER.is_match(lexeme) {
        TokenKind::Integer
    } else if STRING.is_match(lexeme) {
        TokenKind::String
    } else if CHAR.is_match(lexeme) {
        TokenKind::Char
    } else if OPERATOR.is_match(lexeme) {
        TokenKind::Operator
    } else if SYMBOL.is_match(lexeme) {
        TokenKind::Symbol
    } else if PREPROCESSOR.is_match(lexeme) {
        TokenKind::Preprocessor
    } else {
        TokenKind::Unknown
    }
}

//! Token kinds and the `Token` record produced by the lexer.

use std::fmt;

/// Category of a lexed token. `Unknown` marks lexer failure at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "PascalCase")]
pub enum TokenKind {
    Identifier,
    Keyword,
    Number,
    String,
    BooleanLiteral,
    Operator,
    Separator,
    Unknown,
}

/// A single lexed token: its kind, the exact source text it came from, and the position of
/// its first character.
///
/// `column` points at the start of the lexeme, not the cursor after it, matching the column
/// convention used throughout the error record in the engine's diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    /// Lowercased lexeme, used to match keywords and operators without allocating at every
    /// call site.
    #[must_use]
    pub fn lowered(&self) -> String {
        self.lexeme.to_ascii_lowercase()
    }

    #[must_use]
    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} at {}:{}", self.kind, self.lexeme, self.line, self.column)
    }
}

/// The fixed, lowercased keyword set. An identifier whose lowered form appears here lexes as
/// `Keyword` instead of `Identifier`.
///
/// `volatile` is deliberately absent: the grammar only uses it as a contextual word right
/// after `declare` (`parse.rs` checks the identifier text there), so it stays a legal
/// identifier everywhere else in a script.
pub const KEYWORDS: &[&str] = &[
    "declare", "if", "then", "else", "elsif", "end", "while", "for", "loop", "exit", "break", "continue",
    "procedure", "function", "return", "is", "begin", "not", "and", "or", "mod", "rem", "xor", "in", "out", "true",
    "false", "null", "with", "range",
];

#[must_use]
pub fn is_keyword(lowered: &str) -> bool {
    KEYWORDS.contains(&lowered)
}

//! Engine error types.
//!
//! Static errors (from the lexer and parser) and runtime errors (from the interpreter) are
//! kept as distinct enums with the same rendering shape, converging on [`NeoAdaError`] at the
//! host boundary. No `thiserror`/`anyhow`: every variant gets a hand-written `Display`, the
//! way the rest of this engine's error types are built.

use std::fmt;

/// Shared rendering contract for every static/runtime error code.
///
/// `render()` produces `"Error: <code-phrase> (<extra?>) at line <L>, column <C>"`, the single
/// error record format used across every phase of the engine.
pub trait StaticError {
    fn code_phrase(&self) -> &'static str;
    fn line(&self) -> u32;
    fn column(&self) -> u32;
    fn extra(&self) -> Option<&str>;

    fn render(&self) -> String {
        match self.extra() {
            Some(extra) => format!(
                "Error: {} ({}) at line {}, column {}",
                self.code_phrase(),
                extra,
                self.line(),
                self.column()
            ),
            None => format!(
                "Error: {} at line {}, column {}",
                self.code_phrase(),
                self.line(),
                self.column()
            ),
        }
    }
}

/// Static errors raised while lexing source text.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    InvalidCharacter { line: u32, column: u32, found: char },
    InvalidStringLiteral { line: u32, column: u32 },
    InvalidBasedLiteral { line: u32, column: u32 },
    InvalidExponent { line: u32, column: u32 },
}

impl StaticError for LexError {
    fn code_phrase(&self) -> &'static str {
        match self {
            Self::InvalidCharacter { .. } => "invalid character",
            Self::InvalidStringLiteral { .. } => "invalid string literal",
            Self::InvalidBasedLiteral { .. } => "invalid based literal",
            Self::InvalidExponent { .. } => "invalid exponent",
        }
    }

    fn line(&self) -> u32 {
        match self {
            Self::InvalidCharacter { line, .. }
            | Self::InvalidStringLiteral { line, .. }
            | Self::InvalidBasedLiteral { line, .. }
            | Self::InvalidExponent { line, .. } => *line,
        }
    }

    fn column(&self) -> u32 {
        match self {
            Self::InvalidCharacter { column, .. }
            | Self::InvalidStringLiteral { column, .. }
            | Self::InvalidBasedLiteral { column, .. }
            | Self::InvalidExponent { column, .. } => *column,
        }
    }

    fn extra(&self) -> Option<&str> {
        None
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Self::InvalidCharacter { found, .. } = self {
            return write!(
                f,
                "Error: invalid character ({found:?}) at line {}, column {}",
                self.line(),
                self.column()
            );
        }
        f.write_str(&self.render())
    }
}

impl std::error::Error for LexError {}

/// Static errors raised while parsing a token stream into an AST.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxError {
    InvalidStatement { line: u32, column: u32, found: String },
    IdentifierExpected { line: u32, column: u32, found: String },
    KeywordExpected { line: u32, column: u32, expected: &'static str, found: String },
    InvalidToken { line: u32, column: u32, found: String },
    InvalidRangeOrIterable { line: u32, column: u32 },
    UnexpectedClosure { line: u32, column: u32, found: String },
    UnexpectedEof { line: u32, column: u32 },
}

impl SyntaxError {
    const fn loc(&self) -> (u32, u32) {
        match self {
            Self::InvalidStatement { line, column, .. }
            | Self::IdentifierExpected { line, column, .. }
            | Self::KeywordExpected { line, column, .. }
            | Self::InvalidToken { line, column, .. }
            | Self::InvalidRangeOrIterable { line, column }
            | Self::UnexpectedClosure { line, column, .. }
            | Self::UnexpectedEof { line, column } => (*line, *column),
        }
    }
}

impl StaticError for SyntaxError {
    fn code_phrase(&self) -> &'static str {
        match self {
            Self::InvalidStatement { .. } => "invalid statement",
            Self::IdentifierExpected { .. } => "identifier expected",
            Self::KeywordExpected { .. } => "keyword expected",
            Self::InvalidToken { .. } => "invalid token",
            Self::InvalidRangeOrIterable { .. } => "invalid range or iterable",
            Self::UnexpectedClosure { .. } => "unexpected closure",
            Self::UnexpectedEof { .. } => "unexpected end of file",
        }
    }

    fn line(&self) -> u32 {
        self.loc().0
    }

    fn column(&self) -> u32 {
        self.loc().1
    }

    fn extra(&self) -> Option<&str> {
        match self {
            Self::InvalidStatement { found, .. }
            | Self::IdentifierExpected { found, .. }
            | Self::InvalidToken { found, .. }
            | Self::UnexpectedClosure { found, .. } => Some(found),
            Self::KeywordExpected { expected, .. } => Some(expected),
            Self::InvalidRangeOrIterable { .. } | Self::UnexpectedEof { .. } => None,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::error::Error for SyntaxError {}

/// Runtime errors raised by the interpreter while walking the AST.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    UnknownSymbol { line: u32, column: u32, name: String },
    DeclarationError { line: u32, column: u32, type_name: String },
    AssignmentError { line: u32, column: u32, detail: String },
    IllegalComparison { line: u32, column: u32 },
    OperatorTypeError { line: u32, column: u32, detail: String },
    InvalidAssignment { line: u32, column: u32 },
    InvalidCondition { line: u32, column: u32 },
    InvalidJump { line: u32, column: u32 },
    InvalidContainerType { line: u32, column: u32 },
    InvalidAccessValue { line: u32, column: u32, detail: String },
    InvalidNumericValue { line: u32, column: u32, lexeme: String },
}

impl RuntimeError {
    const fn loc(&self) -> (u32, u32) {
        match self {
            Self::UnknownSymbol { line, column, .. }
            | Self::DeclarationError { line, column, .. }
            | Self::AssignmentError { line, column, .. }
            | Self::IllegalComparison { line, column }
            | Self::OperatorTypeError { line, column, .. }
            | Self::InvalidAssignment { line, column }
            | Self::InvalidCondition { line, column }
            | Self::InvalidJump { line, column }
            | Self::InvalidContainerType { line, column }
            | Self::InvalidAccessValue { line, column, .. }
            | Self::InvalidNumericValue { line, column, .. } => (*line, *column),
        }
    }
}

impl StaticError for RuntimeError {
    fn code_phrase(&self) -> &'static str {
        match self {
            Self::UnknownSymbol { .. } => "unknown symbol",
            Self::DeclarationError { .. } => "declaration error",
            Self::AssignmentError { .. } => "assignment error",
            Self::IllegalComparison { .. } => "illegal comparison",
            Self::OperatorTypeError { .. } => "operator type error",
            Self::InvalidAssignment { .. } => "invalid assignment",
            Self::InvalidCondition { .. } => "invalid condition",
            Self::InvalidJump { .. } => "invalid jump",
            Self::InvalidContainerType { .. } => "invalid container type",
            Self::InvalidAccessValue { .. } => "invalid access value",
            Self::InvalidNumericValue { .. } => "invalid numeric value",
        }
    }

    fn line(&self) -> u32 {
        self.loc().0
    }

    fn column(&self) -> u32 {
        self.loc().1
    }

    fn extra(&self) -> Option<&str> {
        match self {
            Self::UnknownSymbol { name, .. } => Some(name),
            Self::DeclarationError { type_name, .. } => Some(type_name),
            Self::AssignmentError { detail, .. }
            | Self::OperatorTypeError { detail, .. }
            | Self::InvalidAccessValue { detail, .. } => Some(detail),
            Self::InvalidNumericValue { lexeme, .. } => Some(lexeme),
            Self::IllegalComparison { .. }
            | Self::InvalidAssignment { .. }
            | Self::InvalidCondition { .. }
            | Self::InvalidJump { .. }
            | Self::InvalidContainerType { .. } => None,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::error::Error for RuntimeError {}

/// Crate-wide error, unifying every phase behind one `Result` type at the host boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum NeoAdaError {
    Lex(LexError),
    Syntax(SyntaxError),
    Runtime(RuntimeError),
}

impl fmt::Display for NeoAdaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(error) => write!(f, "{error}"),
            Self::Syntax(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for NeoAdaError {}

impl From<LexError> for NeoAdaError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<SyntaxError> for NeoAdaError {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<RuntimeError> for NeoAdaError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

#[cfg(test)]
mod tests {
    use super::{LexError, StaticError};

    #[test]
    fn renders_without_extra() {
        let err = LexError::InvalidStringLiteral { line: 3, column: 5 };
        assert_eq!(err.render(), "Error: invalid string literal at line 3, column 5");
    }
}

//! Non-fatal interpreter diagnostics.
//!
//! `break`/`continue` outside a loop scope is the one situation the interpreter reports
//! without raising: the statement is ignored and a `Diagnostic` is appended to `State` instead.
//! The core never prints anything itself; the host (the CLI binary) drains these after a run.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    BreakOutsideLoop,
    ContinueOutsideLoop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phrase = match self.kind {
            DiagnosticKind::BreakOutsideLoop => "break outside a loop",
            DiagnosticKind::ContinueOutsideLoop => "continue outside a loop",
        };
        write!(f, "warning: {phrase} at line {}, column {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::{Diagnostic, DiagnosticKind};

    #[test]
    fn renders_with_location() {
        let diag = Diagnostic {
            kind: DiagnosticKind::BreakOutsideLoop,
            line: 4,
            column: 2,
        };
        assert_eq!(diag.to_string(), "warning: break outside a loop at line 4, column 2");
    }
}

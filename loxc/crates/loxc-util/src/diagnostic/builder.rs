//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Level};
use crate::Reporter;

/// Builder for creating diagnostics with a fluent API
///
/// ```
/// use loxc_util::{DiagnosticBuilder, DiagnosticCode, Handler};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unterminated block comment")
///     .line(12)
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
///     .note("block comments nest; every `/*` needs its own `*/`")
///     .emit(&handler);
///
/// let diags = handler.diagnostics();
/// assert_eq!(diags[0].line, Some(12));
/// assert_eq!(diags[0].notes.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    line: Option<u32>,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            line: None,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Create an informational builder
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Tie the diagnostic to a 1-based source line
    pub fn line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            line: self.line,
            code: self.code,
            notes: self.notes,
        }
    }

    /// Build and emit the diagnostic to a reporter
    pub fn emit<R: Reporter + ?Sized>(self, reporter: &R) {
        reporter.emit(self.build());
    }
}

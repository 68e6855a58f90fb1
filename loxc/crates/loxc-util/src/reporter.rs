//! The reporting capability handed to compiler phases.
//!
//! A phase receives a `&dyn Reporter` and calls [`Reporter::line_error`]
//! (or emits a full [`Diagnostic`]) when it finds a problem. Whether the
//! message is collected, logged, or both is the caller's choice.

use crate::diagnostic::{Diagnostic, Level};

/// Sink for diagnostics.
///
/// Only [`emit`](Reporter::emit) is required; the other methods are the
/// three shorthand operations phases use most often.
pub trait Reporter {
    /// Receive a fully built diagnostic.
    fn emit(&self, diagnostic: Diagnostic);

    /// Report an error tied to a 1-based source line.
    fn line_error(&self, line: u32, message: &str) {
        self.emit(Diagnostic::error(message).with_line(line));
    }

    /// Report an error that is not tied to a source location.
    fn error(&self, message: &str) {
        self.emit(Diagnostic::error(message));
    }

    /// Report informational output.
    fn info(&self, message: &str) {
        self.emit(Diagnostic::info(message));
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn emit(&self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic)
    }
}

/// Reporter that forwards every diagnostic to the `tracing` facade.
///
/// Line-tied diagnostics are rendered as `[line N] Error: message` (or
/// `Warning:` / `Info:` by level), with the diagnostic code, when present,
/// attached as a structured `code` field. Nothing is printed
/// unless a subscriber is installed.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl TracingReporter {
    /// Create a new tracing reporter
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TracingReporter {
    fn emit(&self, diagnostic: Diagnostic) {
        let label = match diagnostic.level {
            Level::Error => "Error",
            Level::Warning => "Warning",
            Level::Info => "Info",
        };
        let text = match diagnostic.line {
            Some(line) => format!("[line {}] {}: {}", line, label, diagnostic.message),
            None => diagnostic.message.clone(),
        };

        match (diagnostic.level, diagnostic.code) {
            (Level::Error, Some(code)) => tracing::error!(code = %code, "{}", text),
            (Level::Error, None) => tracing::error!("{}", text),
            (Level::Warning, Some(code)) => tracing::warn!(code = %code, "{}", text),
            (Level::Warning, None) => tracing::warn!("{}", text),
            (Level::Info, _) => tracing::info!("{}", text),
        }
        for note in &diagnostic.notes {
            tracing::info!("note: {}", note);
        }
    }
}

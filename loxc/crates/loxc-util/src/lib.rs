//! loxc-util - Core utilities shared by the loxc crates
//!
//! This crate holds the diagnostic model every phase reports through:
//!
//! - [`Diagnostic`], [`Level`] and [`DiagnosticCode`] describe a single
//!   message and where it came from.
//! - [`DiagnosticBuilder`] constructs diagnostics fluently.
//! - [`Reporter`] is the logging capability phases are handed. A phase never
//!   decides how a diagnostic is displayed; it only emits it.
//! - [`Handler`] collects diagnostics in memory and answers "did anything
//!   fail?". [`TracingReporter`] forwards them to the `tracing` facade.
//!
//! # Example
//!
//! ```
//! use loxc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Reporter};
//!
//! let handler = Handler::new();
//! handler.line_error(3, "unexpected character");
//! DiagnosticBuilder::error("unterminated string")
//!     .line(7)
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 2);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod reporter;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use reporter::{Reporter, TracingReporter};

//! loxc-drv - Driver for the Lox Scanner
//!
//! Reads Lox source from a file or an interactive prompt, runs the scanner
//! and prints one token per line as text or JSON. The `loxc` binary wraps
//! this library with a clap command line.
//!
//! ```
//! use loxc_drv::{Config, Session};
//!
//! let mut session = Session::new(Config::default(), Vec::new());
//! let outcome = session.run_source("var answer = 42;").unwrap();
//!
//! assert_eq!(outcome.tokens, 6);
//! assert!(!session.had_error());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod logging;
pub mod session;

pub use config::{Config, OutputConfig, OutputFormat, ReplConfig, CONFIG_FILE_NAME};
pub use error::{DriverError, Result, EXIT_DATA_ERROR, EXIT_FAILURE, EXIT_NO_INPUT};
pub use logging::init_logging;
pub use session::{RunOutcome, Session};

//! The Lox scanner.
//!
//! Split by token family: `core` holds the main loop and dispatch, the
//! other modules add the sub-lexers as `impl Scanner` blocks.

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{scan, ScanResult, Scanner};

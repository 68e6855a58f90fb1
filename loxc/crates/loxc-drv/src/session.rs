//! Scanning sessions.
//!
//! A [`Session`] owns the configuration and the output sink, runs the
//! scanner over a file, a single source string, or an interactive prompt,
//! and prints the resulting tokens.

use std::io::{BufRead, ErrorKind, Write};
use std::path::Path;

use loxc_lex::{scan, Token};
use tracing::debug;

use crate::config::{Config, OutputFormat};
use crate::error::{DriverError, Result};

/// Counts from scanning one piece of source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Tokens printed, including the `EOF` sentinel.
    pub tokens: usize,
    /// Lexical errors reported.
    pub errors: usize,
}

impl RunOutcome {
    /// Returns true if the scan reported lexical errors.
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// A scanning session writing tokens to `W`.
pub struct Session<W: Write> {
    config: Config,
    out: W,
    had_error: bool,
}

impl<W: Write> Session<W> {
    /// Creates a session writing to `out`.
    pub fn new(config: Config, out: W) -> Self {
        Self {
            config,
            out,
            had_error: false,
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns true if the last run reported lexical errors.
    ///
    /// The interactive prompt clears this after every line.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Consumes the session and returns its output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Reads a script from `path` and scans it.
    pub fn run_file(&mut self, path: &Path) -> Result<RunOutcome> {
        debug!(path = %path.display(), "reading script");

        let source = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DriverError::FileNotFound(path.to_path_buf()),
            _ => DriverError::Io(e),
        })?;

        debug!(bytes = source.len(), "script loaded");
        self.run_source(&source)
    }

    /// Scans `source` and prints its tokens.
    pub fn run_source(&mut self, source: &str) -> Result<RunOutcome> {
        let (tokens, errors) = scan(source).into_parts();
        self.print_tokens(&tokens)?;

        let outcome = RunOutcome {
            tokens: tokens.len(),
            errors: errors.len(),
        };
        if outcome.has_errors() {
            self.had_error = true;
        }

        debug!(tokens = outcome.tokens, errors = outcome.errors, "scan finished");
        Ok(outcome)
    }

    /// Runs the interactive prompt over `input`.
    ///
    /// Each line is scanned on its own. An empty line or end of input ends
    /// the session.
    pub fn run_prompt<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        let mut line = String::new();

        loop {
            write!(self.out, "{}", self.config.repl.prompt)?;
            self.out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let text = line.trim_end_matches(|c| c == '\n' || c == '\r');
            if text.is_empty() {
                break;
            }

            self.run_source(text)?;
            self.had_error = false;
        }

        debug!("prompt closed");
        Ok(())
    }

    fn print_tokens(&mut self, tokens: &[Token<'_>]) -> Result<()> {
        for token in tokens {
            match self.config.output.format {
                OutputFormat::Text => writeln!(self.out, "{}", token)?,
                OutputFormat::Json => {
                    serde_json::to_writer(&mut self.out, token)?;
                    writeln!(self.out)?;
                },
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn session(format: OutputFormat) -> Session<Vec<u8>> {
        let mut config = Config::default();
        config.output.format = format;
        Session::new(config, Vec::new())
    }

    fn output(session: Session<Vec<u8>>) -> String {
        String::from_utf8(session.into_inner()).unwrap()
    }

    #[test]
    fn test_run_source_text_output() {
        let mut session = session(OutputFormat::Text);
        let outcome = session.run_source("print \"hi\";").unwrap();

        assert_eq!(outcome, RunOutcome { tokens: 4, errors: 0 });
        assert!(!session.had_error());
        assert_eq!(
            output(session),
            "PRINT print nil\nSTRING \"hi\" hi\nSEMICOLON ; nil\nEOF  nil\n"
        );
    }

    #[test]
    fn test_run_source_json_output() {
        let mut session = session(OutputFormat::Json);
        session.run_source("x = 1.5").unwrap();

        let text = output(session);
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["kind"], "IDENTIFIER");
        assert_eq!(lines[2]["literal"], 1.5);
        assert_eq!(lines[3]["kind"], "EOF");
        assert_eq!(lines[3]["lexeme"], "");
    }

    #[test]
    fn test_lexical_errors_set_flag() {
        let mut session = session(OutputFormat::Text);
        let outcome = session.run_source("@").unwrap();

        assert!(outcome.has_errors());
        assert!(session.had_error());
        assert_eq!(output(session), "EOF  nil\n");
    }

    #[test]
    fn test_run_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("script.lox");
        std::fs::write(&path, "var a;\n").unwrap();

        let mut session = session(OutputFormat::Text);
        let outcome = session.run_file(&path).unwrap();
        assert_eq!(outcome.tokens, 4);
        assert!(output(session).ends_with("EOF  nil\n"));
    }

    #[test]
    fn test_run_file_missing() {
        let mut session = session(OutputFormat::Text);
        let err = session
            .run_file(Path::new("/nonexistent/script.lox"))
            .unwrap_err();
        assert!(matches!(err, DriverError::FileNotFound(_)));
    }

    #[test]
    fn test_prompt_stops_on_empty_line() {
        let mut session = session(OutputFormat::Text);
        session.run_prompt("1\n\n2\n".as_bytes()).unwrap();

        assert_eq!(output(session), "> NUMBER 1 1.0\nEOF  nil\n> ");
    }

    #[test]
    fn test_prompt_stops_on_end_of_input() {
        let mut session = session(OutputFormat::Text);
        session.run_prompt("nil\r\n".as_bytes()).unwrap();

        assert_eq!(output(session), "> NIL nil nil\nEOF  nil\n> ");
    }

    #[test]
    fn test_prompt_resets_error_flag() {
        let mut session = session(OutputFormat::Text);
        session.run_prompt("#\n".as_bytes()).unwrap();
        assert!(!session.had_error());
    }

    #[test]
    fn test_custom_prompt() {
        let mut config = Config::default();
        config.repl.prompt = "lox> ".to_string();
        let mut session = Session::new(config, Vec::new());
        session.run_prompt("".as_bytes()).unwrap();

        assert_eq!(session.config().repl.prompt, "lox> ");
        assert_eq!(output(session), "lox> ");
    }
}

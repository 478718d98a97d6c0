//! Errors raised by the I/O glue around the rule engine.
//!
//! Rule failures are not errors in this sense: they travel as
//! [`RuleViolation`](crate::move_validation::validation_outcome::RuleViolation)
//! values out of the validation pipeline. `ChessErrors` covers everything that
//! happens before a move reaches the engine (parsing algebraic squares,
//! reading move files, loading configuration, building boards).
//!
//! Usage guidelines:
//! - Parsing and input variants (`InvalidAlgebraicString`, `InvalidMoveLine`)
//!   are recoverable and suitable for presenting to end users.
//! - Configuration variants (`InvalidConfig`, `BoardTooSmall`) mean the
//!   program was started with settings it cannot honour; callers usually
//!   abort.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for parsing, configuration and board construction.
#[derive(Debug, Error)]
pub enum ChessErrors {
    /// A square written in algebraic notation could not be interpreted.
    ///
    /// Payload: the rejected text.
    #[error("Invalid algebraic square: {0}")]
    InvalidAlgebraicString(String),

    /// A line of a move file did not contain exactly two squares.
    #[error("Invalid move on line {line_number}: '{line}'")]
    InvalidMoveLine { line_number: usize, line: String },

    /// The move file could not be opened or read.
    #[error("The moves could not be read from {path}")]
    MoveFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The move stream failed while reading.
    #[error("Failed reading moves: {0}")]
    MoveStream(#[from] std::io::Error),

    /// The configuration file could not be opened.
    #[error("The configuration could not be read from {path}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid JSON for `AppConfig`.
    #[error("Malformed configuration: {0}")]
    ConfigMalformed(#[from] serde_json::Error),

    /// The configuration parsed but holds values the program cannot use.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The starting arrangement needs at least eight rows and columns.
    ///
    /// Payload: the configured board size.
    #[error("A {0}x{0} board is too small for the starting position")]
    BoardTooSmall(usize),
}

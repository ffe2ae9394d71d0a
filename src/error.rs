//! Error types for the public API. Parsing is the only fallible entry point into this
//! crate; everything past a successfully built [`crate::Solver`] is infallible.
use thiserror::Error;

/// Failures that can occur while parsing a DIMACS CNF document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedInput {
    #[error("line {line}: expected a problem line (`p cnf <vars> <clauses>`), found {found:?}")]
    MissingHeader { line: usize, found: String },

    #[error("line {line}: malformed problem line: {detail}")]
    InvalidHeader { line: usize, detail: String },

    #[error("line {line}: expected an integer literal, found {token:?}")]
    InvalidToken { line: usize, token: String },

    #[error("clause starting at line {line} is not terminated by a `0`")]
    UnterminatedClause { line: usize },

    #[error(
        "line {line}: variable {var} is out of the range declared by the problem line (1..={max})"
    )]
    VariableOutOfRange { line: usize, var: i64, max: u32 },
}

/// Top-level error type returned by fallible solver entry points.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Parse(#[from] MalformedInput),
}

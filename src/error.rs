use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CensusError {
    #[error("Invalid sequence: unexpected character(s) {invalid:?}, only ABCabc are allowed")]
    InvalidSequence { invalid: Vec<char> },
    #[error("Could not read input: {0}")]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Could not serialize JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

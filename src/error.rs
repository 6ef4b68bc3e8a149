// Error kinds for the standup pipeline. Load and output failures abort the
// run; `Persist` is the one kind the caller downgrades to a warning.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StandupError {
    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),
    #[error("could not read state file {path}: {reason}")]
    FileRead { path: PathBuf, reason: String },
    #[error("state file {path} is not valid JSON: {reason}")]
    FileDecode { path: PathBuf, reason: String },
    #[error("could not create {path}: {reason}")]
    FileWrite { path: PathBuf, reason: String },
    #[error("could not save responses: {0}")]
    Persist(String),
    #[error("interrupted")]
    Interrupted,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

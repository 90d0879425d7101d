use thiserror::Error as ThisError;

#[derive(Debug, ThisError, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("malformed catalog record on line {0}")]
    BadRecord(usize),
}

impl Error {
    /// The 1-based input line the error points at.
    pub fn line(&self) -> usize {
        match self {
            Self::BadRecord(line) => *line,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

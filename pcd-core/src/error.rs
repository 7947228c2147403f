use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `line` is 1-based. Zero means the position is unknown.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("format error: {0}")]
    Format(String),
}

impl Error {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

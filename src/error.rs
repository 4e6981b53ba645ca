//! Errors for the fallible edges of the crate: plan parsing, plan replay,
//! and I/O. The grid itself never fails; degenerate input is a no-op there.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: duplicate `{directive}` directive")]
    DuplicateDirective { line: usize, directive: &'static str },

    #[error("line {line}: `root` must come before any `rect`")]
    RootAfterRect { line: usize },

    #[error("no vertex at ({x}, {y}) to anchor a rectangle")]
    UnknownAnchor { x: i64, y: i64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}

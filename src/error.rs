use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("'{}' does not have the expected .{expected} extension", .path.display())]
    UnexpectedExtension { path: PathBuf, expected: String },
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{count} line(s) are not valid source lines")]
    InvalidLines { count: usize },
    #[error(transparent)]
    Check(#[from] sjava_core::Error),
}

impl Error {
    /// Status printed on stdout and used as the process exit code.
    pub fn status(&self) -> u8 {
        match self {
            Error::InvalidLines { .. } | Error::Check(_) => 1,
            Error::UnexpectedExtension { .. } | Error::Io { .. } => 2,
        }
    }
}

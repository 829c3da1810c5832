use std::io;

use conway::GridError;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("terminal write failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to start the async runtime: {0}")]
    Runtime(#[source] io::Error),
}

impl AppError {
    /// The reader went away, e.g. the output was piped into `head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, AppError::Io(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}

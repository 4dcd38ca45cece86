use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Task with title '{0}' already exists")]
    DuplicateTitle(String),

    #[error("task {0} not found")]
    NotFound(i64),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl Error {
    /// True for errors the caller can fix by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::DuplicateTitle(_) | Error::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A directory listing or stat failed somewhere in the traversal.
    #[error("cannot read {path}: {source}")]
    ReadDir {
        path: String,
        source: std::io::Error,
    },
    /// Writing a rendered line to the output sink failed.
    #[error("write error: {0}")]
    Write(#[from] std::io::Error),
}

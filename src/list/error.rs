use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Invalid id '{0}': ids are non-negative whole numbers")]
    InvalidId(String),

    #[error("Id {id} is out of range (highest id is {max})")]
    IdOutOfRange { id: usize, max: usize },

    #[error("Id {0} does not exist: the todo list is empty")]
    EmptyList(usize),

    #[error("Expected exactly {expected} ids, got {got}")]
    WrongIdCount { expected: usize, got: usize },

    #[error("Missing todo id")]
    MissingId,

    #[error("Missing todo description")]
    MissingDescription,

    #[error("Todo descriptions cannot span multiple lines")]
    InvalidDescription,

    #[error("Cannot find home directory")]
    NoHomeDir,

    #[error("Failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TodoError>;

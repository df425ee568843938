use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("malformed library document: {0}")]
    Document(#[from] quick_xml::Error),

    #[error("malformed library document: {0}")]
    Malformed(&'static str),

    #[error("book is missing its {0} element")]
    MissingField(&'static str),

    #[error("invalid page count {value:?}: {source}")]
    InvalidPages {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to serialize library: {0}")]
    Serialize(#[from] quick_xml::SeError),

    #[error("documents directory not found")]
    NoDocumentsDir,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type LibraryResult<T> = Result<T, LibraryError>;

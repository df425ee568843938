use crate::error::LibraryError;
use std::path::PathBuf;

/// File name of the library document inside the default library directory.
pub const LIBRARY_FILE_NAME: &str = "books.xml";

/// Resolves the default library document, `~/Documents/library/books.xml`.
///
/// Only the path is computed; nothing is created on disk.
///
/// # Errors
/// - [`LibraryError::NoDocumentsDir`] if the user's documents directory cannot be determined
pub fn default_library_file() -> Result<PathBuf, LibraryError> {
    let docs = dirs::document_dir().ok_or(LibraryError::NoDocumentsDir)?;

    Ok(docs.join("library").join(LIBRARY_FILE_NAME))
}

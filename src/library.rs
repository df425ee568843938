//! The in-memory book collection and its XML persistence.
//!
//! [`BookLibrary`] owns an insertion-ordered list of [`Book`]s. It can be
//! replaced from an XML file, written back to one, appended to, and queried
//! through [`SortedBooks`] and [`TitleMatches`]. Queries borrow the library and
//! are computed from its state at call time.
//!
//! ```rust,no_run
//! use book_library::domain::Book;
//! use book_library::library::BookLibrary;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut library = BookLibrary::new();
//! library.add_book(Book::new("Dune", "Frank Herbert", 412))?;
//! library.save_to_xml("books.xml")?;
//!
//! library.load_from_xml("books.xml")?;
//! for book in library.search_by_title("dune") {
//!     println!("{} by {}", book.title, book.author);
//! }
//! # Ok(())
//! # }
//! ```

mod document;
pub mod search;

use crate::config;
use crate::domain::Book;
use crate::error::LibraryError;
use crate::log::{LibraryLog, TracingLog};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub use search::{SortedBooks, TitleMatches};

const BOOK_IS_NULL: &str = "Book is null";
const TITLE_IS_EMPTY: &str = "Title is empty";

/// An ordered, in-memory collection of books backed by an XML file.
///
/// Not synchronized; share it across threads behind a lock if needed.
#[derive(Debug)]
pub struct BookLibrary<L = TracingLog> {
    books: Vec<Book>,
    log: L,
}

impl BookLibrary<TracingLog> {
    /// Creates an empty library that reports diagnostics through `tracing`.
    pub fn new() -> Self {
        Self::with_log(TracingLog)
    }
}

impl Default for BookLibrary<TracingLog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LibraryLog> BookLibrary<L> {
    /// Creates an empty library that reports diagnostics to `log`.
    pub fn with_log(log: L) -> Self {
        BookLibrary {
            books: Vec::new(),
            log,
        }
    }

    /// The held books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books held.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns `true` if no books are held.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Replaces the collection with the books stored in the XML file at `path`.
    ///
    /// The document is read and checked for well-formedness before anything is
    /// touched. The collection is then cleared and refilled one `Book` element
    /// at a time, so a book with a missing field or a bad page count keeps the
    /// books converted before it and drops the rest.
    ///
    /// # Errors
    /// - [`LibraryError::NotFound`] if `path` is not an existing file
    /// - [`LibraryError::Io`] if the file cannot be read
    /// - [`LibraryError::Document`] or [`LibraryError::Malformed`] if the document is not well-formed
    /// - [`LibraryError::MissingField`] if a book lacks `Title`, `Author` or `Pages`
    /// - [`LibraryError::InvalidPages`] if a page count is not an integer
    pub fn load_from_xml(&mut self, path: impl AsRef<Path>) -> Result<(), LibraryError> {
        let path = path.as_ref();

        if !path.is_file() {
            let err = LibraryError::NotFound(path.to_path_buf());
            self.log.error(&err.to_string());
            return Err(err);
        }

        let text = fs::read_to_string(path)?;
        let doc = document::parse(&text)?;

        self.books.clear();
        for element in doc.books {
            self.books.push(element.into_book()?);
        }

        tracing::debug!(path = %path.display(), count = self.books.len(), "loaded library");
        Ok(())
    }

    /// Writes every held book, in order, to an XML file at `path`.
    ///
    /// The file is created or overwritten atomically. On Unix a newly created
    /// file gets mode `0600`, since it starts out as a private temporary file.
    ///
    /// # Errors
    /// - [`LibraryError::Serialize`] if the document cannot be rendered
    /// - [`LibraryError::Io`] if writing fails
    pub fn save_to_xml(&self, path: impl AsRef<Path>) -> Result<(), LibraryError> {
        let path = path.as_ref();
        let xml = document::render(&self.books)?;

        Self::write_atomic(path, xml.as_bytes())?;

        tracing::debug!(path = %path.display(), count = self.books.len(), "saved library");
        Ok(())
    }

    /// Appends `book` to the end of the collection.
    ///
    /// Accepts a [`Book`] or an `Option<Book>`. No deduplication is done.
    ///
    /// # Errors
    /// - [`LibraryError::InvalidArgument`] if `book` is `None`
    pub fn add_book(&mut self, book: impl Into<Option<Book>>) -> Result<(), LibraryError> {
        let book: Option<Book> = book.into();
        let Some(book) = book else {
            self.log.error(BOOK_IS_NULL);
            return Err(LibraryError::InvalidArgument(BOOK_IS_NULL.to_owned()));
        };

        self.books.push(book);
        Ok(())
    }

    /// Returns the books ordered by author, then by title.
    ///
    /// Both keys compare by code point. Books with equal keys keep their
    /// insertion order.
    pub fn get_sorted_books(&self) -> SortedBooks<'_> {
        SortedBooks::new(&self.books)
    }

    /// Returns the books whose title contains `title_part`, ignoring case.
    ///
    /// Results keep collection order. A missing, empty, or blank pattern logs a
    /// warning and matches nothing.
    ///
    /// Case is folded with Unicode lowercase mapping ([`str::to_lowercase`]) on
    /// both sides, so special cases follow that mapping: `"İstanbul"` lowercases
    /// to `"i̇stanbul"` and matches the pattern `"i"`.
    pub fn search_by_title<'p>(&self, title_part: impl Into<Option<&'p str>>) -> TitleMatches<'_> {
        let title_part: Option<&str> = title_part.into();
        match title_part {
            Some(pattern) if !pattern.trim().is_empty() => TitleMatches::new(&self.books, pattern),
            _ => {
                self.log.warn(TITLE_IS_EMPTY);
                TitleMatches::empty()
            }
        }
    }

    /// Loads from [`config::default_library_file`].
    pub fn load_default(&mut self) -> Result<(), LibraryError> {
        let path = config::default_library_file()?;
        self.load_from_xml(path)
    }

    /// Saves to [`config::default_library_file`], creating its directory if missing.
    pub fn save_default(&self) -> Result<(), LibraryError> {
        let path = config::default_library_file()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        self.save_to_xml(path)
    }

    /// Writes data to a temporary file beside `path` and renames it into place,
    /// so an interrupted save never leaves a truncated document.
    fn write_atomic(path: &Path, data: &[u8]) -> Result<(), LibraryError> {
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(data)?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

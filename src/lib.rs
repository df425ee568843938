//! # book_library
//!
//! An in-memory collection of book records persisted to a single XML file.
//!
//! ## Features
//!
//! - **Persistence**: Load a library from XML, replacing what is held, and save it back atomically
//! - **Sorted view**: Books ordered by author, then title
//! - **Title search**: Case-insensitive substring matching that keeps collection order
//! - **Injected diagnostics**: Errors and warnings go through a [`log::LibraryLog`] chosen by the caller
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use book_library::{Book, BookLibrary};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut library = BookLibrary::new();
//! library.add_book(Book::new("Test 2", "Author 2", 150))?;
//! library.add_book(Book::new("Test 1", "Author 1", 100))?;
//!
//! let sorted: Vec<_> = library.get_sorted_books().map(|b| b.title.as_str()).collect();
//! assert_eq!(sorted, ["Test 1", "Test 2"]);
//!
//! library.save_to_xml("books.xml")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **[`domain`]**: The [`Book`] record
//! - **[`library`]**: [`BookLibrary`], its XML document shape and query iterators
//! - **[`log`]**: The diagnostics port and its `tracing` and no-op implementations
//! - **[`config`]**: Default location of the library file
//! - **[`error`]**: Unified error handling
//!
//! ## Error Handling
//!
//! All fallible operations return [`LibraryResult<T>`], wrapping [`LibraryError`].
//! I/O and XML errors convert automatically, so `?` works throughout.
//!
//! ```rust,no_run
//! use book_library::{BookLibrary, LibraryError, LibraryResult};
//!
//! fn open(path: &str) -> LibraryResult<BookLibrary> {
//!     let mut library = BookLibrary::new();
//!     match library.load_from_xml(path) {
//!         Err(LibraryError::NotFound(_)) => Ok(library),
//!         other => other.map(|()| library),
//!     }
//! }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod library;
pub mod log;

/// Re-exports the most commonly used types for convenience.
pub use domain::Book;
pub use error::{LibraryError, LibraryResult};
pub use library::BookLibrary;

use book_library::log::{LibraryLog, TracingLog};
use book_library::{Book, BookLibrary};
use std::cell::RefCell;
use tempfile::TempDir;

/// Helper: remembers every diagnostic the library emits
#[derive(Default)]
struct RecordingLog {
    entries: RefCell<Vec<(&'static str, String)>>,
}

impl RecordingLog {
    fn entries(&self) -> Vec<(&'static str, String)> {
        self.entries.borrow().clone()
    }
}

impl LibraryLog for RecordingLog {
    fn error(&self, message: &str) {
        self.entries.borrow_mut().push(("error", message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.entries.borrow_mut().push(("warn", message.to_string()));
    }
}

#[test]
fn missing_file_is_logged_as_error_with_path() {
    let tmpdir = TempDir::new().unwrap();
    let path = tmpdir.path().join("nowhere.xml");

    let log = RecordingLog::default();
    let mut lib = BookLibrary::with_log(&log);
    assert!(lib.load_from_xml(&path).is_err());

    let entries = log.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, "error");
    assert_eq!(entries[0].1, format!("File not found: {}", path.display()));
}

#[test]
fn null_book_is_logged_as_error() {
    let log = RecordingLog::default();
    let mut lib = BookLibrary::with_log(&log);

    assert!(lib.add_book(None).is_err());
    assert_eq!(log.entries(), [("error", "Book is null".to_string())]);
}

#[test]
fn blank_search_is_logged_as_warning_only() {
    let log = RecordingLog::default();
    let mut lib = BookLibrary::with_log(&log);
    lib.add_book(Book::new("Test 1", "Author 1", 100)).unwrap();

    assert_eq!(lib.search_by_title("").count(), 0);
    assert_eq!(lib.search_by_title(None).count(), 0);

    assert_eq!(
        log.entries(),
        [
            ("warn", "Title is empty".to_string()),
            ("warn", "Title is empty".to_string()),
        ]
    );
}

#[test]
fn successful_operations_log_nothing() {
    let tmpdir = TempDir::new().unwrap();
    let path = tmpdir.path().join("books.xml");

    let log = RecordingLog::default();
    let mut lib = BookLibrary::with_log(&log);
    lib.add_book(Book::new("Dune", "Frank Herbert", 412)).unwrap();
    lib.save_to_xml(&path).unwrap();
    lib.load_from_xml(&path).unwrap();
    assert_eq!(lib.search_by_title("dun").count(), 1);
    assert_eq!(lib.get_sorted_books().count(), 1);

    assert!(log.entries().is_empty());
}

#[test]
fn tracing_log_emits_without_affecting_results() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("book_library=debug")
        .with_test_writer()
        .try_init();

    TracingLog.error("direct error");
    TracingLog.warn("direct warning");

    let mut lib = BookLibrary::new();
    assert!(lib.add_book(None).is_err());
    assert!(lib.search_by_title("  ").next().is_none());
    assert!(lib.is_empty());
}

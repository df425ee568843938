//! Diagnostic output for the library service.
//!
//! [`BookLibrary`](crate::library::BookLibrary) never logs through a global; it
//! calls the [`LibraryLog`] it was built with. Implementations are side channels
//! only: they must not panic and cannot influence the operation in progress.

/// Sink for the diagnostics emitted by the library service.
pub trait LibraryLog {
    /// Reports a failure that is about to be returned to the caller.
    fn error(&self, message: &str);

    /// Reports a suspicious but non-fatal input.
    fn warn(&self, message: &str);
}

/// Forwards diagnostics to `tracing` under the `book_library` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl LibraryLog for TracingLog {
    fn error(&self, message: &str) {
        tracing::error!(target: "book_library", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "book_library", "{message}");
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLog;

impl LibraryLog for NoopLog {
    fn error(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}
}

impl<L: LibraryLog + ?Sized> LibraryLog for &L {
    fn error(&self, message: &str) {
        (**self).error(message);
    }

    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

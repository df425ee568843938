use crate::domain::Book;
use std::slice;
use std::vec;

/// Books ordered by author, then title.
///
/// Produced by [`BookLibrary::get_sorted_books`](super::BookLibrary::get_sorted_books).
/// Clone it to walk the same ordering again.
#[derive(Debug, Clone)]
pub struct SortedBooks<'a> {
    inner: vec::IntoIter<&'a Book>,
}

impl<'a> SortedBooks<'a> {
    pub(crate) fn new(books: &'a [Book]) -> Self {
        let mut sorted: Vec<&Book> = books.iter().collect();
        // stable, so equal keys keep insertion order
        sorted.sort_by(|a, b| a.author.cmp(&b.author).then_with(|| a.title.cmp(&b.title)));

        SortedBooks {
            inner: sorted.into_iter(),
        }
    }
}

impl<'a> Iterator for SortedBooks<'a> {
    type Item = &'a Book;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SortedBooks<'_> {}

/// Books whose title contains a pattern, ignoring case, in collection order.
///
/// Matching is lazy: titles are only compared as the iterator advances.
/// Produced by [`BookLibrary::search_by_title`](super::BookLibrary::search_by_title).
#[derive(Debug, Clone)]
pub struct TitleMatches<'a> {
    books: slice::Iter<'a, Book>,
    needle: Option<String>,
}

impl<'a> TitleMatches<'a> {
    pub(crate) fn new(books: &'a [Book], pattern: &str) -> Self {
        TitleMatches {
            books: books.iter(),
            needle: Some(pattern.to_lowercase()),
        }
    }

    /// A search that yields nothing.
    pub(crate) fn empty() -> Self {
        let none: &[Book] = &[];
        TitleMatches {
            books: none.iter(),
            needle: None,
        }
    }
}

impl<'a> Iterator for TitleMatches<'a> {
    type Item = &'a Book;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle.as_deref()?;
        self.books
            .by_ref()
            .find(|book| book.title.to_lowercase().contains(needle))
    }
}

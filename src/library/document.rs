//! XML shape of a saved library.
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <Books>
//!   <Book>
//!     <Title>Dune</Title>
//!     <Author>Frank Herbert</Author>
//!     <Pages>412</Pages>
//!   </Book>
//! </Books>
//! ```
//!
//! The root element name is not checked on input, and children of the root
//! other than `Book` are skipped. Field text is kept exactly as written,
//! whitespace included.

use crate::domain::Book;
use crate::error::LibraryError;
use quick_xml::Reader;
use quick_xml::events::Event;
use quick_xml::se::Serializer;
use serde::Serialize;
use std::mem;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

// element depths below the document node
const ROOT_DEPTH: usize = 1;
const BOOK_DEPTH: usize = 2;
const FIELD_DEPTH: usize = 3;

#[derive(Debug, Default)]
pub(crate) struct BooksDocument {
    pub books: Vec<BookElement>,
}

/// A `Book` element as read from disk.
///
/// Fields are optional here; a missing one only fails when the element is
/// converted with [`BookElement::into_book`].
#[derive(Debug, Default)]
pub(crate) struct BookElement {
    title: Option<String>,
    author: Option<String>,
    pages: Option<String>,
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Title,
    Author,
    Pages,
}

impl Field {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"Title" => Some(Field::Title),
            b"Author" => Some(Field::Author),
            b"Pages" => Some(Field::Pages),
            _ => None,
        }
    }
}

impl BookElement {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Title => &mut self.title,
            Field::Author => &mut self.author,
            Field::Pages => &mut self.pages,
        }
    }

    /// Converts the raw element into a [`Book`].
    ///
    /// # Errors
    /// - [`LibraryError::MissingField`] if `Title`, `Author` or `Pages` is absent
    /// - [`LibraryError::InvalidPages`] if `Pages` is not an `i32`
    pub fn into_book(self) -> Result<Book, LibraryError> {
        let title = self.title.ok_or(LibraryError::MissingField("Title"))?;
        let author = self.author.ok_or(LibraryError::MissingField("Author"))?;
        let raw_pages = self.pages.ok_or(LibraryError::MissingField("Pages"))?;

        let pages = raw_pages
            .trim()
            .parse::<i32>()
            .map_err(|source| LibraryError::InvalidPages {
                value: raw_pages.clone(),
                source,
            })?;

        Ok(Book {
            title,
            author,
            pages,
        })
    }
}

#[derive(Serialize)]
#[serde(rename = "Books")]
struct SavedBooks<'a> {
    #[serde(rename = "Book")]
    books: &'a [Book],
}

/// Parses a library document into raw `Book` elements.
///
/// Only well-formedness is checked here. Duplicate fields keep the first
/// occurrence, and text of nested elements inside a field is concatenated.
pub(crate) fn parse(text: &str) -> Result<BooksDocument, LibraryError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(false);

    let mut doc = BooksDocument::default();
    let mut depth = 0usize;
    let mut seen_root = false;
    let mut book: Option<BookElement> = None;
    let mut field: Option<Field> = None;
    let mut text_buf = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                match depth {
                    ROOT_DEPTH => {
                        if seen_root {
                            return Err(LibraryError::Malformed("more than one root element"));
                        }
                        seen_root = true;
                    }
                    BOOK_DEPTH if e.name().as_ref() == b"Book" => {
                        book = Some(BookElement::default());
                    }
                    FIELD_DEPTH => {
                        if let Some(current) = book.as_mut() {
                            field = Field::from_name(e.name().as_ref())
                                .filter(|f| current.slot(*f).is_none());
                            text_buf.clear();
                        }
                    }
                    _ => {}
                }
            }
            Event::Empty(e) => match depth + 1 {
                ROOT_DEPTH => {
                    if seen_root {
                        return Err(LibraryError::Malformed("more than one root element"));
                    }
                    seen_root = true;
                }
                BOOK_DEPTH if e.name().as_ref() == b"Book" => {
                    doc.books.push(BookElement::default());
                }
                FIELD_DEPTH => {
                    if let (Some(current), Some(f)) =
                        (book.as_mut(), Field::from_name(e.name().as_ref()))
                    {
                        current.slot(f).get_or_insert_with(String::new);
                    }
                }
                _ => {}
            },
            Event::Text(e) => {
                if field.is_some() {
                    text_buf.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if field.is_some() {
                    let cdata = std::str::from_utf8(&e)
                        .map_err(|_| LibraryError::Malformed("CDATA is not valid UTF-8"))?;
                    text_buf.push_str(cdata);
                }
            }
            Event::End(_) => {
                match depth {
                    FIELD_DEPTH => {
                        if let (Some(current), Some(f)) = (book.as_mut(), field.take()) {
                            *current.slot(f) = Some(mem::take(&mut text_buf));
                        }
                    }
                    BOOK_DEPTH => {
                        if let Some(done) = book.take() {
                            doc.books.push(done);
                        }
                    }
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(LibraryError::Malformed("unexpected end of document"));
    }
    if !seen_root {
        return Err(LibraryError::Malformed("no root element"));
    }

    Ok(doc)
}

/// Renders `books` as a complete document, declaration included.
pub(crate) fn render(books: &[Book]) -> Result<String, LibraryError> {
    let mut out = String::from(XML_DECLARATION);

    let mut ser = Serializer::new(&mut out);
    ser.indent(' ', 2);
    SavedBooks { books }.serialize(ser)?;

    out.push('\n');
    Ok(out)
}

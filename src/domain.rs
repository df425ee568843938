use serde::Serialize;

/// A single book record held by a [`BookLibrary`](crate::library::BookLibrary).
///
/// Plain data: nothing is validated on construction, so titles and authors
/// may be empty and `pages` may be any `i32`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub pages: i32,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, pages: i32) -> Self {
        Book {
            title: title.into(),
            author: author.into(),
            pages,
        }
    }
}

//! Association between a book and a genre.

/// One row of the `book_genres` join table.
///
/// The pair is the primary key; rows disappear when either the book or the
/// genre is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookGenre {
    pub book_id: i64,
    pub genre_id: i64,
}

impl BookGenre {
    pub fn new(book_id: i64, genre_id: i64) -> Self {
        Self { book_id, genre_id }
    }
}

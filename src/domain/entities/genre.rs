//! Domain entity representing a book genre.

#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct NewGenre {
    pub title: String,
}

#[derive(Debug, Clone, Default)]
pub struct GenrePatch {
    pub title: Option<String>,
}

//! DTOs for genre endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Genre;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGenreRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGenreRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenreItem {
    pub id: i64,
    pub title: String,
}

impl From<Genre> for GenreItem {
    fn from(g: Genre) -> Self {
        Self {
            id: g.id,
            title: g.title,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenreResponse {
    pub success: bool,
    pub genre: GenreItem,
}

//! Handlers for genre endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::api::dto::genre::{CreateGenreRequest, GenreItem, GenreResponse, UpdateGenreRequest};
use crate::api::extractors::{PathParam, ValidatedJson};
use crate::domain::entities::{GenrePatch, NewGenre};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /genres`
pub async fn list_genres_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<GenreItem>>, AppError> {
    let genres = state.genre_service.list_genres().await?;

    Ok(Json(genres.into_iter().map(Into::into).collect()))
}

/// `GET /genres/{id}`
pub async fn get_genre_handler(
    PathParam(id): PathParam<i64>,
    State(state): State<AppState>,
) -> Result<Json<GenreItem>, AppError> {
    let genre = state.genre_service.get_genre(id).await?;

    Ok(Json(genre.into()))
}

/// `POST /genres`
pub async fn create_genre_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateGenreRequest>,
) -> Result<(StatusCode, Json<GenreResponse>), AppError> {
    let genre = state
        .genre_service
        .create_genre(NewGenre {
            title: payload.title,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(GenreResponse {
            success: true,
            genre: genre.into(),
        }),
    ))
}

/// `PATCH /genres/{id}`
pub async fn update_genre_handler(
    PathParam(id): PathParam<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateGenreRequest>,
) -> Result<Json<GenreResponse>, AppError> {
    let genre = state
        .genre_service
        .update_genre(
            id,
            GenrePatch {
                title: payload.title,
            },
        )
        .await?;

    Ok(Json(GenreResponse {
        success: true,
        genre: genre.into(),
    }))
}

/// Deletes a genre. Books lose the association, the books themselves stay.
///
/// # Endpoint
///
/// `DELETE /genres/{id}`
pub async fn delete_genre_handler(
    PathParam(id): PathParam<i64>,
    State(state): State<AppState>,
) -> Result<Json<GenreResponse>, AppError> {
    let genre = state.genre_service.delete_genre(id).await?;

    Ok(Json(GenreResponse {
        success: true,
        genre: genre.into(),
    }))
}

mod common;

use axum::http::StatusCode;
use common::authed;
use serde_json::{Value, json};
use sqlx::PgPool;

// ─── READ ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_book_genres(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let genre = common::create_test_genre(&pool, "Drama").await;
    let b1 = common::create_test_book(&pool, "One").await;
    let b2 = common::create_test_book(&pool, "Two").await;
    common::link_genre(&pool, b1, genre).await;
    common::link_genre(&pool, b2, genre).await;

    let response = authed(server.get("/bookGenres")).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!([
            { "bookId": b1, "genreId": genre },
            { "bookId": b2, "genreId": genre }
        ])
    );
}

#[sqlx::test]
async fn test_list_genres_for_book(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let g1 = common::create_test_genre(&pool, "First").await;
    let g2 = common::create_test_genre(&pool, "Second").await;
    let book = common::create_test_book(&pool, "Book").await;
    let other = common::create_test_book(&pool, "Other").await;
    common::link_genre(&pool, book, g2).await;
    common::link_genre(&pool, book, g1).await;
    common::link_genre(&pool, other, g1).await;

    let response = authed(server.get(&format!("/bookGenres/{book}/all"))).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!([
            { "bookId": book, "genreId": g2 },
            { "bookId": book, "genreId": g1 }
        ])
    );
}

#[sqlx::test]
async fn test_list_genres_for_unknown_book_is_empty(pool: PgPool) {
    let server = common::make_server(pool);

    let response = authed(server.get("/bookGenres/999999/all")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[sqlx::test]
async fn test_get_book_genre(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let genre = common::create_test_genre(&pool, "Horror").await;
    let book = common::create_test_book(&pool, "It").await;
    common::link_genre(&pool, book, genre).await;

    let response = authed(server.get(&format!("/bookGenres/{book}/{genre}"))).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "bookId": book, "genreId": genre })
    );
}

#[sqlx::test]
async fn test_get_book_genre_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = authed(server.get("/bookGenres/1/2")).await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "BookGenre not found" })
    );
}

#[sqlx::test]
async fn test_delete_book_genre_non_numeric_key(pool: PgPool) {
    let server = common::make_server(pool);

    let response = authed(server.delete("/bookGenres/1/fantasy")).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Invalid path parameter");
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_book_genre(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let genre = common::create_test_genre(&pool, "Mystery").await;
    let book = common::create_test_book(&pool, "Clue").await;

    let response = authed(server.post("/bookGenres"))
        .json(&json!({ "bookId": book, "genreId": genre }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["bookGenre"], json!({ "bookId": book, "genreId": genre }));
    assert_eq!(common::genre_ids_of(&pool, book).await, vec![genre]);
}

#[sqlx::test]
async fn test_create_book_genre_duplicate(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let genre = common::create_test_genre(&pool, "Mystery").await;
    let book = common::create_test_book(&pool, "Clue").await;
    common::link_genre(&pool, book, genre).await;

    let response = authed(server.post("/bookGenres"))
        .json(&json!({ "bookId": book, "genreId": genre }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[sqlx::test]
async fn test_create_book_genre_unknown_reference(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let book = common::create_test_book(&pool, "Clue").await;

    let response = authed(server.post("/bookGenres"))
        .json(&json!({ "bookId": book, "genreId": 999999 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_create_book_genre_validation(pool: PgPool) {
    let server = common::make_server(pool);

    let response = authed(server.post("/bookGenres"))
        .json(&json!({ "bookId": 0, "genreId": 1 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Validation failed");
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_book_genre_rewrites_keys(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let old = common::create_test_genre(&pool, "Old").await;
    let new = common::create_test_genre(&pool, "New").await;
    let book = common::create_test_book(&pool, "Moved").await;
    common::link_genre(&pool, book, old).await;

    let response = authed(server.patch(&format!("/bookGenres/{book}/{old}")))
        .json(&json!({ "bookId": book, "genreId": new }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["bookGenre"],
        json!({ "bookId": book, "genreId": new })
    );
    assert_eq!(common::genre_ids_of(&pool, book).await, vec![new]);
}

#[sqlx::test]
async fn test_update_book_genre_not_found(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let genre = common::create_test_genre(&pool, "G").await;
    let book = common::create_test_book(&pool, "B").await;

    let response = authed(server.patch(&format!("/bookGenres/{book}/{genre}")))
        .json(&json!({ "bookId": book, "genreId": genre }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_book_genre(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let g1 = common::create_test_genre(&pool, "G1").await;
    let g2 = common::create_test_genre(&pool, "G2").await;
    let book = common::create_test_book(&pool, "B").await;
    common::link_genre(&pool, book, g1).await;
    common::link_genre(&pool, book, g2).await;

    let response = authed(server.delete(&format!("/bookGenres/{book}/{g1}"))).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["bookGenre"],
        json!({ "bookId": book, "genreId": g1 })
    );
    assert_eq!(common::genre_ids_of(&pool, book).await, vec![g2]);

    authed(server.delete(&format!("/bookGenres/{book}/{g1}")))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_delete_all_for_book(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let g1 = common::create_test_genre(&pool, "G1").await;
    let g2 = common::create_test_genre(&pool, "G2").await;
    let book = common::create_test_book(&pool, "B").await;
    let other = common::create_test_book(&pool, "Other").await;
    common::link_genre(&pool, book, g1).await;
    common::link_genre(&pool, book, g2).await;
    common::link_genre(&pool, other, g1).await;

    let response = authed(server.delete(&format!("/bookGenres/{book}/all"))).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["deletedCount"], 2);
    assert_eq!(body["genres"].as_array().unwrap().len(), 2);

    assert!(common::genre_ids_of(&pool, book).await.is_empty());
    assert_eq!(common::genre_ids_of(&pool, other).await, vec![g1]);
}

#[sqlx::test]
async fn test_delete_all_for_book_without_rows(pool: PgPool) {
    let server = common::make_server(pool);

    let response = authed(server.delete("/bookGenres/999999/all")).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["deletedCount"], 0);
    assert_eq!(body["genres"], json!([]));
}

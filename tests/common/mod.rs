#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue, header};
use axum_test::{TestRequest, TestServer};
use bookstore_api::routes::{app_router, router};
use bookstore_api::state::AppState;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-secret";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), TEST_SECRET)
}

/// Full application router, auth included.
pub fn make_server(pool: PgPool) -> TestServer {
    let app = router(create_test_state(pool), "*");
    TestServer::new(app).unwrap()
}

/// The router as served by the binary, trailing-slash normalization included.
pub fn make_app_server(pool: PgPool) -> TestServer {
    let app = app_router(create_test_state(pool), "*");
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub fn auth_header() -> (HeaderName, HeaderValue) {
    (
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {TEST_SECRET}")).unwrap(),
    )
}

/// Adds the valid bearer token to a request.
pub fn authed(request: TestRequest) -> TestRequest {
    let (name, value) = auth_header();
    request.add_header(name, value)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn create_test_genre(pool: &PgPool, title: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO genres (title) VALUES ($1) RETURNING id")
        .bind(title)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_book(pool: &PgPool, title: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO books (title, author, published_at) VALUES ($1, 'Test Author', $2) RETURNING id",
    )
    .bind(title)
    .bind(date(2020, 1, 15))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn link_genre(pool: &PgPool, book_id: i64, genre_id: i64) {
    sqlx::query("INSERT INTO book_genres (book_id, genre_id) VALUES ($1, $2)")
        .bind(book_id)
        .bind(genre_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_menu(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO menus (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_order(pool: &PgPool, menu_id: i64, count: i64) -> i64 {
    sqlx::query_scalar("INSERT INTO orders (menu_id, count) VALUES ($1, $2) RETURNING id")
        .bind(menu_id)
        .bind(count)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_student(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (name, surname, user_id, birth, sex) VALUES ($1, 'Tester', 1001, $2, 'F') RETURNING id",
    )
    .bind(name)
    .bind(date(2001, 4, 12))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &PgPool, sql: &str) -> i64 {
    sqlx::query_scalar(sql).fetch_one(pool).await.unwrap()
}

/// Genre ids of a book in association order.
pub async fn genre_ids_of(pool: &PgPool, book_id: i64) -> Vec<i64> {
    sqlx::query_scalar("SELECT genre_id FROM book_genres WHERE book_id = $1 ORDER BY seq")
        .bind(book_id)
        .fetch_all(pool)
        .await
        .unwrap()
}

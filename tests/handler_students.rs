mod common;

use axum::http::StatusCode;
use common::authed;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_create_student(pool: PgPool) {
    let server = common::make_server(pool);

    let response = authed(server.post("/students"))
        .json(&json!({
            "name": "Ada",
            "surname": "Lovelace",
            "userId": 1815,
            "birth": "1815-12-10",
            "sex": "F"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["student"]["name"], "Ada");
    assert_eq!(body["student"]["userId"], 1815);
    assert_eq!(body["student"]["birth"], "1815-12-10");
    assert!(body["student"]["id"].is_i64());
}

#[sqlx::test]
async fn test_create_student_missing_fields(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let response = authed(server.post("/students"))
        .json(&json!({ "name": "Ada" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(common::count_rows(&pool, "SELECT COUNT(*) FROM users").await, 0);
}

#[sqlx::test]
async fn test_create_student_empty_name(pool: PgPool) {
    let server = common::make_server(pool);

    let response = authed(server.post("/students"))
        .json(&json!({
            "name": "",
            "surname": "Lovelace",
            "userId": 1,
            "birth": "1815-12-10",
            "sex": "F"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Validation failed");
}

#[sqlx::test]
async fn test_list_and_get_students(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let first = common::create_test_student(&pool, "Alice").await;
    common::create_test_student(&pool, "Bob").await;

    let listed = authed(server.get("/students")).await;
    listed.assert_status_ok();
    assert_eq!(listed.json::<Value>().as_array().unwrap().len(), 2);

    let fetched = authed(server.get(&format!("/students/{first}"))).await;
    fetched.assert_status_ok();
    let body = fetched.json::<Value>();
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["surname"], "Tester");
    assert_eq!(body["sex"], "F");
}

#[sqlx::test]
async fn test_get_student_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = authed(server.get("/students/999999")).await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({ "error": "Student not found" }));
}

#[sqlx::test]
async fn test_update_student_partial(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let id = common::create_test_student(&pool, "Carol").await;

    let response = authed(server.patch(&format!("/students/{id}")))
        .json(&json!({ "surname": "Danvers", "birth": "1999-09-09" }))
        .await;

    response.assert_status_ok();
    let student = &response.json::<Value>()["student"];
    assert_eq!(student["name"], "Carol");
    assert_eq!(student["surname"], "Danvers");
    assert_eq!(student["birth"], "1999-09-09");
}

#[sqlx::test]
async fn test_delete_student(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let id = common::create_test_student(&pool, "Dave").await;

    let response = authed(server.delete(&format!("/students/{id}"))).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["student"]["name"], "Dave");

    authed(server.delete(&format!("/students/{id}")))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

//! API route configuration.
//!
//! Every route here requires Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{book_genres, books, genres, menus, orders, students};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// All protected resource routes.
///
/// # Endpoints
///
/// - `GET|POST          /books`
/// - `GET|PATCH|DELETE  /books/{id}`
/// - `PUT               /books/{id}/genres`         - Replace a book's genre set
/// - `GET|POST          /genres`
/// - `GET|PATCH|DELETE  /genres/{id}`
/// - `GET|POST          /bookGenres`
/// - `GET|DELETE        /bookGenres/{bookId}/all`
/// - `GET|PATCH|DELETE  /bookGenres/{bookId}/{genreId}`
/// - `GET|POST          /students`
/// - `GET|PATCH|DELETE  /students/{id}`
/// - `GET|POST          /menus`
/// - `GET|PATCH|DELETE  /menus/{id}`
/// - `GET|POST          /orders`
/// - `GET|PATCH|DELETE  /orders/{id}`
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/books",
            get(books::list_books_handler).post(books::create_book_handler),
        )
        .route(
            "/books/{id}",
            get(books::get_book_handler)
                .patch(books::update_book_handler)
                .delete(books::delete_book_handler),
        )
        .route("/books/{id}/genres", put(books::set_book_genres_handler))
        .route(
            "/genres",
            get(genres::list_genres_handler).post(genres::create_genre_handler),
        )
        .route(
            "/genres/{id}",
            get(genres::get_genre_handler)
                .patch(genres::update_genre_handler)
                .delete(genres::delete_genre_handler),
        )
        .route(
            "/bookGenres",
            get(book_genres::list_book_genres_handler)
                .post(book_genres::create_book_genre_handler),
        )
        .route(
            "/bookGenres/{book_id}/all",
            get(book_genres::list_genres_for_book_handler)
                .delete(book_genres::delete_all_book_genres_handler),
        )
        .route(
            "/bookGenres/{book_id}/{genre_id}",
            get(book_genres::get_book_genre_handler)
                .patch(book_genres::update_book_genre_handler)
                .delete(book_genres::delete_book_genre_handler),
        )
        .route(
            "/students",
            get(students::list_students_handler).post(students::create_student_handler),
        )
        .route(
            "/students/{id}",
            get(students::get_student_handler)
                .patch(students::update_student_handler)
                .delete(students::delete_student_handler),
        )
        .route(
            "/menus",
            get(menus::list_menus_handler).post(menus::create_menu_handler),
        )
        .route(
            "/menus/{id}",
            get(menus::get_menu_handler)
                .patch(menus::update_menu_handler)
                .delete(menus::delete_menu_handler),
        )
        .route(
            "/orders",
            get(orders::list_orders_handler).post(orders::create_order_handler),
        )
        .route(
            "/orders/{id}",
            get(orders::get_order_handler)
                .patch(orders::update_order_handler)
                .delete(orders::delete_order_handler),
        )
}

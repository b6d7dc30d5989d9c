//! Application layer services implementing business logic.
//!
//! Services consume repository traits, turn missing records into
//! not-found errors and enforce the rules that sit above single queries.
//!
//! # Available Services
//!
//! - [`services::book_service::BookService`] - Books and transactional genre replacement
//! - [`services::book_genre_service::BookGenreService`] - Individual association rows
//! - [`services::genre_service::GenreService`] - Genres
//! - [`services::student_service::StudentService`] - Students
//! - [`services::menu_service::MenuService`] - Menu entries
//! - [`services::order_service::OrderService`] - Orders
//! - [`services::auth_service::AuthService`] - Static bearer token check

pub mod services;

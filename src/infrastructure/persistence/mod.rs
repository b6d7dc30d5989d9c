//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries
//! are checked at runtime and mapped through `FromRow` row structs so the
//! crate builds without a live database.
//!
//! # Repositories
//!
//! - [`PgBookRepository`] - Books, genre aggregation and transactional genre replacement
//! - [`PgBookGenreRepository`] - Association rows
//! - [`PgGenreRepository`] - Genres
//! - [`PgStudentRepository`] - Students
//! - [`PgMenuRepository`] - Menu entries
//! - [`PgOrderRepository`] - Orders

pub mod pg_book_genre_repository;
pub mod pg_book_repository;
pub mod pg_genre_repository;
pub mod pg_menu_repository;
pub mod pg_order_repository;
pub mod pg_student_repository;

pub use pg_book_genre_repository::PgBookGenreRepository;
pub use pg_book_repository::PgBookRepository;
pub use pg_genre_repository::PgGenreRepository;
pub use pg_menu_repository::PgMenuRepository;
pub use pg_order_repository::PgOrderRepository;
pub use pg_student_repository::PgStudentRepository;

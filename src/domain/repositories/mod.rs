//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access and are implemented by the PostgreSQL
//! repositories in `crate::infrastructure::persistence`. Mock implementations
//! are generated via `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`BookRepository`] - Books, their genre aggregates and genre replacement
//! - [`BookGenreRepository`] - Raw book/genre association rows
//! - [`GenreRepository`] - Genres
//! - [`StudentRepository`] - Students
//! - [`MenuRepository`] - Menu entries
//! - [`OrderRepository`] - Orders
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod book_genre_repository;
pub mod book_repository;
pub mod genre_repository;
pub mod menu_repository;
pub mod order_repository;
pub mod student_repository;

pub use book_genre_repository::BookGenreRepository;
pub use book_repository::BookRepository;
pub use genre_repository::GenreRepository;
pub use menu_repository::MenuRepository;
pub use order_repository::OrderRepository;
pub use student_repository::StudentRepository;

#[cfg(test)]
pub use book_genre_repository::MockBookGenreRepository;
#[cfg(test)]
pub use book_repository::MockBookRepository;
#[cfg(test)]
pub use genre_repository::MockGenreRepository;
#[cfg(test)]
pub use menu_repository::MockMenuRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
#[cfg(test)]
pub use student_repository::MockStudentRepository;

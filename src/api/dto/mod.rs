//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde with camelCase field names and `validator` for input
//! validation. Dates travel as `YYYY-MM-DD`.

pub mod book;
pub mod book_genre;
pub mod genre;
pub mod health;
pub mod menu;
pub mod order;
pub mod student;

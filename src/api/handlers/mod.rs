//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod book_genres;
pub mod books;
pub mod fallback;
pub mod genres;
pub mod health;
pub mod menus;
pub mod orders;
pub mod root;
pub mod students;

pub use fallback::fallback_handler;
pub use health::health_handler;
pub use root::root_handler;

//! Business logic services for the application layer.

pub mod auth_service;
pub mod book_genre_service;
pub mod book_service;
pub mod genre_service;
pub mod menu_service;
pub mod order_service;
pub mod student_service;

pub use auth_service::AuthService;
pub use book_genre_service::BookGenreService;
pub use book_service::BookService;
pub use genre_service::GenreService;
pub use menu_service::MenuService;
pub use order_service::OrderService;
pub use student_service::StudentService;

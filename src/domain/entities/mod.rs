//! Core domain entities representing the book store data model.
//!
//! # Entity Types
//!
//! - [`Book`] - A book in the catalogue, plus [`BookWithGenres`] for aggregated views
//! - [`Genre`] - A genre a book can belong to
//! - [`BookGenre`] - One row of the book/genre association table
//! - [`Student`] - A registered user of the store
//! - [`Menu`] - A cafe menu entry
//! - [`Order`] - A cafe order referencing a menu entry
//!
//! # Design Pattern
//!
//! Entities come with separate structs for creation and partial updates:
//! - `NewBook`, `NewGenre`, ... - For creating new records
//! - `BookPatch`, `GenrePatch`, ... - For partial updates, `None` leaves a field unchanged

pub mod book;
pub mod book_genre;
pub mod genre;
pub mod menu;
pub mod order;
pub mod student;

pub use book::{Book, BookPatch, BookWithGenres, NewBook};
pub use book_genre::BookGenre;
pub use genre::{Genre, GenrePatch, NewGenre};
pub use menu::{Menu, MenuPatch, NewMenu};
pub use order::{NewOrder, Order, OrderPatch, OrderWithMenu};
pub use student::{NewStudent, Student, StudentPatch};

//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AuthService, BookGenreService, BookService, GenreService, MenuService, OrderService,
    StudentService,
};
use crate::infrastructure::persistence::{
    PgBookGenreRepository, PgBookRepository, PgGenreRepository, PgMenuRepository,
    PgOrderRepository, PgStudentRepository,
};

/// Services wired to their PostgreSQL repositories.
///
/// Cloning is cheap: every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub book_service: Arc<BookService<PgBookRepository>>,
    pub book_genre_service: Arc<BookGenreService<PgBookGenreRepository>>,
    pub genre_service: Arc<GenreService<PgGenreRepository>>,
    pub student_service: Arc<StudentService<PgStudentRepository>>,
    pub menu_service: Arc<MenuService<PgMenuRepository>>,
    pub order_service: Arc<OrderService<PgOrderRepository>>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Builds repositories and services on top of one connection pool.
    pub fn new(pool: Arc<PgPool>, api_secret: &str) -> Self {
        let book_repo = Arc::new(PgBookRepository::new(pool.clone()));
        let book_genre_repo = Arc::new(PgBookGenreRepository::new(pool.clone()));
        let genre_repo = Arc::new(PgGenreRepository::new(pool.clone()));
        let student_repo = Arc::new(PgStudentRepository::new(pool.clone()));
        let menu_repo = Arc::new(PgMenuRepository::new(pool.clone()));
        let order_repo = Arc::new(PgOrderRepository::new(pool.clone()));

        Self {
            pool,
            book_service: Arc::new(BookService::new(book_repo)),
            book_genre_service: Arc::new(BookGenreService::new(book_genre_repo)),
            genre_service: Arc::new(GenreService::new(genre_repo)),
            student_service: Arc::new(StudentService::new(student_repo)),
            menu_service: Arc::new(MenuService::new(menu_repo)),
            order_service: Arc::new(OrderService::new(order_repo)),
            auth_service: Arc::new(AuthService::new(api_secret)),
        }
    }
}

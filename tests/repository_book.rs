mod common;

use bookstore_api::AppError;
use bookstore_api::domain::entities::{BookGenre, BookPatch, NewBook};
use bookstore_api::domain::repositories::BookRepository;
use bookstore_api::infrastructure::persistence::PgBookRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_book(title: &str) -> NewBook {
    NewBook {
        title: title.to_string(),
        author: "Repo Author".to_string(),
        info: Some("First edition".to_string()),
        summary: None,
        published_at: common::date(1999, 5, 1),
    }
}

#[sqlx::test]
async fn test_create_with_genres_keeps_order(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool.clone()));

    let a = common::create_test_genre(&pool, "Alpha").await;
    let b = common::create_test_genre(&pool, "Beta").await;

    let book = repo.create(new_book("Ordered"), vec![b, a]).await.unwrap();

    assert_eq!(book.title, "Ordered");
    assert_eq!(book.info.as_deref(), Some("First edition"));

    let view = repo.find_by_id(book.id).await.unwrap().unwrap();
    assert_eq!(view.genre_ids, Some(format!("{b}, {a}")));
    assert_eq!(view.genre_titles.as_deref(), Some("Beta, Alpha"));
    assert_eq!(view.genre_id_list(), vec![b, a]);
}

#[sqlx::test]
async fn test_create_with_unknown_genre_rolls_back(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool.clone()));

    let result = repo.create(new_book("Phantom"), vec![424242]).await;

    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    assert_eq!(common::count_rows(&pool, "SELECT COUNT(*) FROM books").await, 0);
}

#[sqlx::test]
async fn test_list_has_null_genres_without_associations(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool.clone()));

    common::create_test_book(&pool, "Bare").await;

    let books = repo.list().await.unwrap();

    assert_eq!(books.len(), 1);
    assert!(books[0].genre_ids.is_none());
    assert!(books[0].genre_titles.is_none());
}

#[sqlx::test]
async fn test_update_only_touches_given_fields(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool.clone()));

    let created = repo.create(new_book("Patched"), vec![]).await.unwrap();

    let patch = BookPatch {
        author: Some("New Author".to_string()),
        info: Some(None),
        summary: Some(Some("Now with summary".to_string())),
        ..Default::default()
    };
    let updated = repo.update(created.id, patch, None).await.unwrap().unwrap();

    assert_eq!(updated.title, "Patched");
    assert_eq!(updated.author, "New Author");
    assert_eq!(updated.info, None);
    assert_eq!(updated.summary.as_deref(), Some("Now with summary"));
    assert_eq!(updated.published_at, created.published_at);
}

#[sqlx::test]
async fn test_update_genres_only_keeps_fields(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool.clone()));

    let a = common::create_test_genre(&pool, "A").await;
    let b = common::create_test_genre(&pool, "B").await;
    let created = repo.create(new_book("Regenred"), vec![a]).await.unwrap();

    let updated = repo
        .update(created.id, BookPatch::default(), Some(vec![b]))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, created.title);
    assert_eq!(updated.author, created.author);
    assert_eq!(updated.info, created.info);
    assert_eq!(updated.summary, created.summary);
    assert_eq!(updated.published_at, created.published_at);
    assert_eq!(common::genre_ids_of(&pool, created.id).await, vec![b]);
}

#[sqlx::test]
async fn test_update_missing_book(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    let result = repo
        .update(999_999, BookPatch::default(), Some(vec![]))
        .await
        .unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_set_genres_replaces_atomically(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool.clone()));

    let a = common::create_test_genre(&pool, "A").await;
    let b = common::create_test_genre(&pool, "B").await;
    let book = repo.create(new_book("Swapped"), vec![a]).await.unwrap();

    let rows = repo.set_genres(book.id, vec![b, a]).await.unwrap().unwrap();
    assert_eq!(
        rows,
        vec![BookGenre::new(book.id, b), BookGenre::new(book.id, a)]
    );
    assert_eq!(common::genre_ids_of(&pool, book.id).await, vec![b, a]);

    let failed = repo.set_genres(book.id, vec![a, 777_777]).await;
    assert!(failed.is_err());
    assert_eq!(common::genre_ids_of(&pool, book.id).await, vec![b, a]);
}

#[sqlx::test]
async fn test_set_genres_unknown_book(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    let result = repo.set_genres(999_999, vec![]).await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_delete_returns_row_and_cascades(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool.clone()));

    let a = common::create_test_genre(&pool, "A").await;
    let book = repo.create(new_book("Gone"), vec![a]).await.unwrap();

    let deleted = repo.delete(book.id).await.unwrap().unwrap();

    assert_eq!(deleted.id, book.id);
    assert!(repo.find_by_id(book.id).await.unwrap().is_none());
    assert_eq!(
        common::count_rows(&pool, "SELECT COUNT(*) FROM book_genres").await,
        0
    );
    assert!(repo.delete(book.id).await.unwrap().is_none());
}

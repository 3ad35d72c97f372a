use book_catalog::domain::entities::{NewAuthor, NewBook, NewPublisher};
use book_catalog::domain::repositories::{AuthorRepository, BookRepository, PublisherRepository};
use book_catalog::error::AppError;
use book_catalog::infrastructure::persistence::{
    PgAuthorRepository, PgBookRepository, PgPublisherRepository,
};
use sqlx::PgPool;
use std::sync::Arc;

async fn seed_references(pool: &PgPool) -> (i64, i64) {
    let pool = Arc::new(pool.clone());
    let author = PgAuthorRepository::new(pool.clone())
        .create(NewAuthor {
            name: "Ray Bradbury".to_string(),
        })
        .await
        .unwrap();
    let publisher = PgPublisherRepository::new(pool)
        .create(NewPublisher {
            name: "Ballantine Books".to_string(),
        })
        .await
        .unwrap();

    (author.id, publisher.id)
}

fn new_book(title: &str, author_id: i64, publisher_id: i64) -> NewBook {
    NewBook {
        title: title.to_string(),
        genre: Some("Science fiction".to_string()),
        language: None,
        edition: None,
        place: None,
        year: Some(1953),
        author_id,
        publisher_id,
    }
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_and_find_book(pool: PgPool) {
    let (author_id, publisher_id) = seed_references(&pool).await;
    let repo = PgBookRepository::new(Arc::new(pool));

    let book = repo
        .create(new_book("Fahrenheit 451", author_id, publisher_id))
        .await
        .unwrap();

    let found = repo.find_by_id(book.id).await.unwrap();

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.title, "Fahrenheit 451");
    assert_eq!(found.year, Some(1953));
    assert_eq!(found.author_id, author_id);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_book_with_dangling_author(pool: PgPool) {
    let (_, publisher_id) = seed_references(&pool).await;
    let repo = PgBookRepository::new(Arc::new(pool));

    let result = repo.create(new_book("Orphan", 9_999, publisher_id)).await;

    match result {
        Err(AppError::Validation { violations }) => {
            assert_eq!(violations, vec!["Author must exist".to_string()]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_list_is_ordered_by_id(pool: PgPool) {
    let (author_id, publisher_id) = seed_references(&pool).await;
    let repo = PgBookRepository::new(Arc::new(pool));

    for n in 1..=30 {
        repo.create(new_book(&format!("Book {n}"), author_id, publisher_id))
            .await
            .unwrap();
    }

    let page = repo.list(25, 25).await.unwrap();

    assert_eq!(page.len(), 5);
    assert_eq!(page[0].title, "Book 26");
    assert_eq!(page[4].title, "Book 30");
    assert_eq!(repo.count().await.unwrap(), 30);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_update_book(pool: PgPool) {
    let (author_id, publisher_id) = seed_references(&pool).await;
    let repo = PgBookRepository::new(Arc::new(pool));
    let book = repo
        .create(new_book("The Martian Chronicles", author_id, publisher_id))
        .await
        .unwrap();

    let mut changes = new_book("The Silver Locusts", author_id, publisher_id);
    changes.genre = None;

    let updated = repo.update(book.id, changes).await.unwrap().unwrap();

    assert_eq!(updated.title, "The Silver Locusts");
    assert_eq!(updated.genre, None);
    assert!(updated.updated_at >= book.updated_at);

    let missing = repo
        .update(book.id + 1000, new_book("Ghost", author_id, publisher_id))
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_delete_book(pool: PgPool) {
    let (author_id, publisher_id) = seed_references(&pool).await;
    let repo = PgBookRepository::new(Arc::new(pool));
    let book = repo
        .create(new_book("Dandelion Wine", author_id, publisher_id))
        .await
        .unwrap();

    let deleted = repo.delete(book.id).await.unwrap();
    assert_eq!(deleted.map(|b| b.title), Some("Dandelion Wine".to_string()));

    assert!(repo.find_by_id(book.id).await.unwrap().is_none());
    assert!(repo.delete(book.id).await.unwrap().is_none());
}

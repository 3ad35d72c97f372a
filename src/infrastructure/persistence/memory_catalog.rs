//! In-process catalog storage.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Author, Book, NewAuthor, NewBook, NewPublisher, Publisher};
use crate::domain::repositories::{AuthorRepository, BookRepository, PublisherRepository};
use crate::error::AppError;

/// Catalog kept in memory, implementing every repository trait.
///
/// Enforces the same reference rules as the PostgreSQL schema: a book can only
/// point at an existing author and publisher. Ids are assigned sequentially per
/// table starting at 1.
///
/// # Use Cases
///
/// - Development without a database (`STORAGE_BACKEND=memory`)
/// - HTTP integration tests
///
/// Clones share the same tables.
#[derive(Clone, Default)]
pub struct MemoryCatalog {
    tables: Arc<RwLock<Tables>>,
}

#[derive(Default)]
struct Tables {
    authors: BTreeMap<i64, Author>,
    publishers: BTreeMap<i64, Publisher>,
    books: BTreeMap<i64, Book>,
    last_author_id: i64,
    last_publisher_id: i64,
    last_book_id: i64,
}

impl Tables {
    fn check_references(&self, book: &NewBook) -> Result<(), AppError> {
        let mut violations = Vec::new();
        if !self.authors.contains_key(&book.author_id) {
            violations.push("Author must exist".to_string());
        }
        if !self.publishers.contains_key(&book.publisher_id) {
            violations.push("Publisher must exist".to_string());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(violations))
        }
    }
}

impl MemoryCatalog {
    pub fn new() -> Self {
        debug!("Using in-memory catalog");
        Self::default()
    }
}

#[async_trait]
impl BookRepository for MemoryCatalog {
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError> {
        let mut tables = self.tables.write().await;
        tables.check_references(&new_book)?;

        tables.last_book_id += 1;
        let now = Utc::now();
        let book = Book {
            id: tables.last_book_id,
            title: new_book.title,
            genre: new_book.genre,
            language: new_book.language,
            edition: new_book.edition,
            place: new_book.place,
            year: new_book.year,
            author_id: new_book.author_id,
            publisher_id: new_book.publisher_id,
            created_at: now,
            updated_at: now,
        };
        tables.books.insert(book.id, book.clone());

        Ok(book)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        Ok(self.tables.read().await.books.get(&id).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Book>, AppError> {
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(0);

        Ok(self
            .tables
            .read()
            .await
            .books
            .values()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables.read().await.books.len() as i64)
    }

    async fn update(&self, id: i64, changes: NewBook) -> Result<Option<Book>, AppError> {
        let mut tables = self.tables.write().await;
        if !tables.books.contains_key(&id) {
            return Ok(None);
        }
        tables.check_references(&changes)?;

        let Some(book) = tables.books.get_mut(&id) else {
            return Ok(None);
        };
        book.title = changes.title;
        book.genre = changes.genre;
        book.language = changes.language;
        book.edition = changes.edition;
        book.place = changes.place;
        book.year = changes.year;
        book.author_id = changes.author_id;
        book.publisher_id = changes.publisher_id;
        book.updated_at = Utc::now();

        Ok(Some(book.clone()))
    }

    async fn delete(&self, id: i64) -> Result<Option<Book>, AppError> {
        Ok(self.tables.write().await.books.remove(&id))
    }
}

#[async_trait]
impl AuthorRepository for MemoryCatalog {
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let mut tables = self.tables.write().await;
        tables.last_author_id += 1;

        let now = Utc::now();
        let author = Author::new(tables.last_author_id, new_author.name, now, now);
        tables.authors.insert(author.id, author.clone());

        Ok(author)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError> {
        Ok(self.tables.read().await.authors.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Author>, AppError> {
        Ok(self.tables.read().await.authors.values().cloned().collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables.read().await.authors.len() as i64)
    }
}

#[async_trait]
impl PublisherRepository for MemoryCatalog {
    async fn create(&self, new_publisher: NewPublisher) -> Result<Publisher, AppError> {
        let mut tables = self.tables.write().await;
        tables.last_publisher_id += 1;

        let now = Utc::now();
        let publisher = Publisher::new(tables.last_publisher_id, new_publisher.name, now, now);
        tables.publishers.insert(publisher.id, publisher.clone());

        Ok(publisher)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Publisher>, AppError> {
        Ok(self.tables.read().await.publishers.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Publisher>, AppError> {
        Ok(self.tables.read().await.publishers.values().cloned().collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables.read().await.publishers.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book(title: &str, author_id: i64, publisher_id: i64) -> NewBook {
        NewBook {
            title: title.to_string(),
            genre: None,
            language: None,
            edition: None,
            place: None,
            year: None,
            author_id,
            publisher_id,
        }
    }

    async fn seeded() -> (MemoryCatalog, i64, i64) {
        let catalog = MemoryCatalog::new();
        let author = AuthorRepository::create(
            &catalog,
            NewAuthor {
                name: "Ursula K. Le Guin".to_string(),
            },
        )
        .await
        .unwrap();
        let publisher = PublisherRepository::create(
            &catalog,
            NewPublisher {
                name: "Ace Books".to_string(),
            },
        )
        .await
        .unwrap();
        (catalog, author.id, publisher.id)
    }

    #[tokio::test]
    async fn test_create_rejects_dangling_references() {
        let catalog = MemoryCatalog::new();

        let err = BookRepository::create(&catalog, new_book("Orphan", 1, 1))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Validation failed: Author must exist, Publisher must exist"
        );
    }

    #[tokio::test]
    async fn test_list_is_ordered_and_windowed() {
        let (catalog, author_id, publisher_id) = seeded().await;
        for i in 1..=30 {
            BookRepository::create(&catalog, new_book(&format!("Book {i}"), author_id, publisher_id))
                .await
                .unwrap();
        }

        let window = BookRepository::list(&catalog, 25, 25).await.unwrap();

        assert_eq!(window.len(), 5);
        assert_eq!(window[0].id, 26);
        assert_eq!(window[4].id, 30);
        assert_eq!(BookRepository::count(&catalog).await.unwrap(), 30);
    }

    #[tokio::test]
    async fn test_update_missing_book_returns_none() {
        let (catalog, author_id, publisher_id) = seeded().await;

        let result = BookRepository::update(&catalog, 42, new_book("Ghost", author_id, publisher_id))
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_book() {
        let (catalog, author_id, publisher_id) = seeded().await;
        let book = BookRepository::create(&catalog, new_book("The Dispossessed", author_id, publisher_id))
            .await
            .unwrap();

        let deleted = BookRepository::delete(&catalog, book.id).await.unwrap();
        assert_eq!(deleted.unwrap().title, "The Dispossessed");

        assert!(BookRepository::delete(&catalog, book.id).await.unwrap().is_none());
        assert!(BookRepository::find_by_id(&catalog, book.id).await.unwrap().is_none());
    }
}

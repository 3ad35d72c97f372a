//! Book management service.

use std::sync::Arc;

use validator::Validate;

use crate::domain::entities::{Book, BookDraft, BookPatch, NewBook};
use crate::domain::pagination::{BOOKS_PER_PAGE, Page, PageRequest};
use crate::domain::repositories::{AuthorRepository, BookRepository, PublisherRepository};
use crate::domain::validation::full_messages;
use crate::error::AppError;

/// Book fields in declaration order, used to order violation messages.
const BOOK_FIELDS: &[&str] = &[
    "title",
    "genre",
    "language",
    "edition",
    "place",
    "year",
];

/// Service for the book resource.
///
/// Owns the rules a book must satisfy before it is written:
/// - the referenced author exists
/// - the referenced publisher exists
/// - the title is present and not blank
pub struct BookService {
    books: Arc<dyn BookRepository>,
    authors: Arc<dyn AuthorRepository>,
    publishers: Arc<dyn PublisherRepository>,
}

impl BookService {
    /// Creates a new book service.
    pub fn new(
        books: Arc<dyn BookRepository>,
        authors: Arc<dyn AuthorRepository>,
        publishers: Arc<dyn PublisherRepository>,
    ) -> Self {
        Self {
            books,
            authors,
            publishers,
        }
    }

    /// Returns page `page` of the catalog, ordered by id, 25 books per page.
    ///
    /// Pages past the end yield an empty item list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_books(&self, page: u32) -> Result<Page<Book>, AppError> {
        let request = PageRequest::new(page, BOOKS_PER_PAGE);

        let (items, total) = tokio::try_join!(
            self.books.list(request.offset(), request.limit()),
            self.books.count()
        )?;

        Ok(Page::new(request, items, total))
    }

    /// Counts all books.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_books(&self) -> Result<i64, AppError> {
        self.books.count().await
    }

    /// Looks up a book by the identifier as received from the client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `id` is not an integer or no such
    /// book exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_book(&self, id: &str) -> Result<Book, AppError> {
        let not_found = || AppError::record_not_found("Book", id);

        let Ok(numeric_id) = id.trim().parse::<i64>() else {
            return Err(not_found());
        };

        self.books
            .find_by_id(numeric_id)
            .await?
            .ok_or_else(not_found)
    }

    /// Creates a book from client-supplied fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every violated rule.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_book(&self, patch: BookPatch) -> Result<Book, AppError> {
        let new_book = self.validate(BookDraft::from(patch)).await?;
        let book = self.books.create(new_book).await?;

        tracing::info!(book_id = book.id, title = %book.title, "Book created");
        Ok(book)
    }

    /// Applies `patch` on top of `book` and stores the result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every violated rule of the
    /// merged record.
    /// Returns [`AppError::NotFound`] if the book disappeared meanwhile.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_book(&self, book: Book, patch: BookPatch) -> Result<Book, AppError> {
        let id = book.id;
        let changes = self.validate(BookDraft::from_book(&book).apply(patch)).await?;

        let updated = self
            .books
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::record_not_found("Book", id))?;

        tracing::info!(book_id = id, "Book updated");
        Ok(updated)
    }

    /// Deletes a book and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such book exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_book(&self, id: &str) -> Result<Book, AppError> {
        let book = self.get_book(id).await?;

        let deleted = self
            .books
            .delete(book.id)
            .await?
            .ok_or_else(|| AppError::record_not_found("Book", id))?;

        tracing::info!(book_id = deleted.id, title = %deleted.title, "Book deleted");
        Ok(deleted)
    }

    /// Checks every rule and collects all violations in declaration order:
    /// author, publisher, then the book's own fields.
    async fn validate(&self, draft: BookDraft) -> Result<NewBook, AppError> {
        let mut violations = Vec::new();

        if !self.author_exists(draft.author_id).await? {
            violations.push("Author must exist".to_string());
        }

        if !self.publisher_exists(draft.publisher_id).await? {
            violations.push("Publisher must exist".to_string());
        }

        if let Err(errors) = draft.validate() {
            violations.extend(full_messages(&errors, BOOK_FIELDS));
        }

        if !violations.is_empty() {
            return Err(AppError::validation(violations));
        }

        draft
            .into_new_book()
            .ok_or_else(|| AppError::internal("Book draft incomplete after validation"))
    }

    async fn author_exists(&self, id: Option<i64>) -> Result<bool, AppError> {
        match id {
            Some(id) => Ok(self.authors.find_by_id(id).await?.is_some()),
            None => Ok(false),
        }
    }

    async fn publisher_exists(&self, id: Option<i64>) -> Result<bool, AppError> {
        match id {
            Some(id) => Ok(self.publishers.find_by_id(id).await?.is_some()),
            None => Ok(false),
        }
    }
}

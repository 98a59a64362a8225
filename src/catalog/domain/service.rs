use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, BookPatch};
use crate::books::repository::BookRepository;
use crate::catalog::domain::{CatalogService, RemoveOutcome};
use crate::catalog::domain::validation::invalid_fields;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    strict_updates: bool,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
            strict_updates: config.strict_updates,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let invalid = invalid_fields(book);
        if !invalid.is_empty() {
            warn!(book = %book.name, ?invalid, "rejecting invalid book");
            return Err(LibraryError::invalid_book("Invalid Book Details..", invalid));
        }
        if self.book_repository.exists(book.name.as_str()).await? {
            warn!(book = %book.name, "rejecting duplicate book");
            return Err(LibraryError::already_exists("Book With Same Name Exist"));
        }
        // the store refuses an existing key, which covers a writer racing past the check above
        let _ = self.book_repository.create(&BookEntity::from(book)).await?;
        info!(book = %book.name, "added book");
        Ok(book.clone())
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.list_all().await?;
        debug!(count = books.len(), "listed books");
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn exists_by_name(&self, name: &str) -> LibraryResult<bool> {
        self.book_repository.exists(name).await
    }

    async fn find_book_by_name(&self, name: &str) -> LibraryResult<Option<BookDto>> {
        let book = self.book_repository.get(name).await?;
        debug!(book = name, found = book.is_some(), "looked up book");
        Ok(book.as_ref().map(BookDto::from))
    }

    async fn update_book(&self, name: &str, patch: &BookPatch) -> LibraryResult<BookDto> {
        let mut book = self.book_repository.get(name).await?
            .ok_or_else(|| LibraryError::not_found(format!("Book not found with id: {}", name).as_str()))?;
        patch.apply(&mut book);

        let invalid = invalid_fields(&book);
        if !invalid.is_empty() {
            if self.strict_updates {
                warn!(book = name, ?invalid, "rejecting invalid book update");
                return Err(LibraryError::invalid_book("Invalid Book Details..", invalid));
            }
            warn!(book = name, ?invalid, "saving book update that fails validation");
        }

        let _ = self.book_repository.save(&book).await?;
        info!(book = name, "updated book");
        Ok(BookDto::from(&book))
    }

    async fn remove_book(&self, name: &str) -> LibraryResult<RemoveOutcome> {
        match self.book_repository.get(name).await? {
            Some(_) => {
                let _ = self.book_repository.delete(name).await?;
                info!(book = name, "removed book");
                Ok(RemoveOutcome::Deleted(name.to_string()))
            }
            None => {
                debug!(book = name, "nothing to remove");
                Ok(RemoveOutcome::NotFound(name.to_string()))
            }
        }
    }

    async fn remove_all_books(&self) -> LibraryResult<usize> {
        let before = self.book_repository.count().await?;
        let _ = self.book_repository.delete_all().await?;
        let after = self.book_repository.count().await?;
        let removed = before.saturating_sub(after);
        info!(removed, remaining = after, "removed all books");
        Ok(removed)
    }
}

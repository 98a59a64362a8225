pub mod service;
pub mod validation;

use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookDto, BookPatch};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn exists_by_name(&self, name: &str) -> LibraryResult<bool>;
    async fn find_book_by_name(&self, name: &str) -> LibraryResult<Option<BookDto>>;
    async fn update_book(&self, name: &str, patch: &BookPatch) -> LibraryResult<BookDto>;
    async fn remove_book(&self, name: &str) -> LibraryResult<RemoveOutcome>;
    async fn remove_all_books(&self) -> LibraryResult<usize>;
}

// RemoveOutcome tells whether a delete by name found something to remove
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoveOutcome {
    Deleted(String),
    NotFound(String),
}

impl Display for RemoveOutcome {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RemoveOutcome::Deleted(name) => write!(f, "Book with ID {} deleted", name),
            RemoveOutcome::NotFound(name) => write!(f, "Book with ID {} not found", name),
        }
    }
}

pub mod ddb_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::memory_repository::MemoryRepository;
use crate::core::repository::Repository;


// BookRepository is the keyed store of catalog books, the key is the book name
pub trait BookRepository: Repository<BookEntity> {}

impl BookRepository for MemoryRepository<BookEntity> {}

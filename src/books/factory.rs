use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::books::repository::ddb_book_repository::DDBBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::memory_repository::MemoryRepository;
use crate::core::repository::RepositoryStore;
use crate::utils::ddb::{build_db_client, create_table};

pub async fn create_book_repository(config: &Configuration) -> LibraryResult<Box<dyn BookRepository>> {
    match config.store {
        RepositoryStore::InMemory => {
            Ok(Box::new(MemoryRepository::<BookEntity>::new()))
        }
        RepositoryStore::DynamoDB => {
            let client = build_db_client(config).await;
            Ok(Box::new(DDBBookRepository::new(client, config.table_name.as_str())))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(config).await;
            create_table(&client, config.table_name.as_str(), "name").await?;
            Ok(Box::new(DDBBookRepository::new(client, config.table_name.as_str())))
        }
    }
}

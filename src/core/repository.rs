pub mod memory_repository;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // check whether an entity is stored under the key
    async fn exists(&self, id: &str) -> LibraryResult<bool>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Option<Entity>>;

    // create an entity, fails if the key is already taken
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // upsert an entity
    async fn save(&self, entity: &Entity) -> LibraryResult<usize>;

    // delete an entity, returns whether it existed
    async fn delete(&self, id: &str) -> LibraryResult<bool>;

    // delete all entities, returns the number removed
    async fn delete_all(&self) -> LibraryResult<usize>;

    async fn count(&self) -> LibraryResult<usize>;

    async fn list_all(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    #[serde(rename = "memory")]
    InMemory,
    #[serde(rename = "dynamodb")]
    DynamoDB,
    #[serde(rename = "local-dynamodb")]
    LocalDynamoDB,
}

impl RepositoryStore {
    pub fn is_dynamodb(&self) -> bool {
        match self {
            RepositoryStore::InMemory => { false }
            RepositoryStore::DynamoDB => { true }
            RepositoryStore::LocalDynamoDB => { true }
        }
    }
}

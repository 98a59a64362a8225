use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryRepository keeps entities in a process-local map keyed by their id. Every operation
// runs under a single lock acquisition so single-key writes are atomic.
#[derive(Debug)]
pub struct MemoryRepository<Entity> {
    entities: RwLock<HashMap<String, Entity>>,
}

impl<Entity> MemoryRepository<Entity> {
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl<Entity> Repository<Entity> for MemoryRepository<Entity>
    where Entity: Identifiable + Clone + 'static {
    async fn exists(&self, id: &str) -> LibraryResult<bool> {
        Ok(self.entities.read().contains_key(id))
    }

    async fn get(&self, id: &str) -> LibraryResult<Option<Entity>> {
        Ok(self.entities.read().get(id).cloned())
    }

    async fn create(&self, entity: &Entity) -> LibraryResult<usize> {
        match self.entities.write().entry(entity.id()) {
            Entry::Occupied(entry) => {
                Err(LibraryError::already_exists(format!("entity {} already exists", entry.key()).as_str()))
            }
            Entry::Vacant(entry) => {
                entry.insert(entity.clone());
                Ok(1)
            }
        }
    }

    async fn save(&self, entity: &Entity) -> LibraryResult<usize> {
        self.entities.write().insert(entity.id(), entity.clone());
        Ok(1)
    }

    async fn delete(&self, id: &str) -> LibraryResult<bool> {
        Ok(self.entities.write().remove(id).is_some())
    }

    async fn delete_all(&self) -> LibraryResult<usize> {
        let mut entities = self.entities.write();
        let removed = entities.len();
        entities.clear();
        Ok(removed)
    }

    async fn count(&self) -> LibraryResult<usize> {
        Ok(self.entities.read().len())
    }

    // records come back sorted by id so listings are stable
    async fn list_all(&self) -> LibraryResult<Vec<Entity>> {
        let entities = self.entities.read();
        let mut ids: Vec<&String> = entities.keys().collect();
        ids.sort();
        Ok(ids.into_iter().filter_map(|id| entities.get(id).cloned()).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::core::library::LibraryError;
    use crate::core::repository::memory_repository::MemoryRepository;
    use crate::core::repository::Repository;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        key: String,
        text: String,
    }

    impl Note {
        fn new(key: &str, text: &str) -> Self {
            Self { key: key.to_string(), text: text.to_string() }
        }
    }

    impl Identifiable for Note {
        fn id(&self) -> String {
            self.key.to_string()
        }
    }

    #[tokio::test]
    async fn test_should_create_get_entities() {
        let repo = MemoryRepository::new();
        let note = Note::new("a", "first");
        assert_eq!(1, repo.create(&note).await.expect("should create note"));
        assert!(repo.exists("a").await.expect("should check note"));
        assert_eq!(Some(note), repo.get("a").await.expect("should get note"));
        assert_eq!(None, repo.get("b").await.expect("should get nothing"));
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_create() {
        let repo = MemoryRepository::new();
        let _ = repo.create(&Note::new("a", "first")).await.expect("should create note");
        let res = repo.create(&Note::new("a", "second")).await;
        assert!(matches!(res, Err(LibraryError::BookAlreadyExists { .. })));
        let loaded = repo.get("a").await.expect("should get note").expect("should exist");
        assert_eq!("first", loaded.text.as_str());
    }

    #[tokio::test]
    async fn test_should_upsert_entities() {
        let repo = MemoryRepository::new();
        let _ = repo.save(&Note::new("a", "first")).await.expect("should save note");
        let _ = repo.save(&Note::new("a", "second")).await.expect("should save note");
        assert_eq!(1, repo.count().await.expect("should count"));
        let loaded = repo.get("a").await.expect("should get note").expect("should exist");
        assert_eq!("second", loaded.text.as_str());
    }

    #[tokio::test]
    async fn test_should_delete_entities() {
        let repo = MemoryRepository::new();
        let _ = repo.save(&Note::new("a", "first")).await.expect("should save note");
        assert!(repo.delete("a").await.expect("should delete note"));
        assert!(!repo.delete("a").await.expect("should delete nothing"));
        assert!(!repo.exists("a").await.expect("should check note"));
    }

    #[tokio::test]
    async fn test_should_list_and_delete_all() {
        let repo = MemoryRepository::new();
        for key in ["c", "a", "b"] {
            let _ = repo.save(&Note::new(key, key)).await.expect("should save note");
        }
        let keys: Vec<String> = repo.list_all().await.expect("should list")
            .into_iter().map(|n| n.key).collect();
        assert_eq!(vec!["a", "b", "c"], keys);
        assert_eq!(3, repo.delete_all().await.expect("should delete all"));
        assert_eq!(0, repo.count().await.expect("should count"));
        assert!(repo.list_all().await.expect("should list").is_empty());
    }
}

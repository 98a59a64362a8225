use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveAllBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveAllBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RemoveAllBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct RemoveAllBooksCommandResponse {
    pub removed: usize,
    pub message: String,
}

impl RemoveAllBooksCommandResponse {
    pub fn new(removed: usize) -> Self {
        Self {
            removed,
            message: format!("{} books deleted", removed),
        }
    }
}

#[async_trait]
impl Command<RemoveAllBooksCommandRequest, RemoveAllBooksCommandResponse> for RemoveAllBooksCommand {
    async fn execute(&self, _req: RemoveAllBooksCommandRequest) -> Result<RemoveAllBooksCommandResponse, CommandError> {
        self.catalog_service.remove_all_books().await
            .map_err(CommandError::from).map(RemoveAllBooksCommandResponse::new)
    }
}

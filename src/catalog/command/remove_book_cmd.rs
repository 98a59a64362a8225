use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::{CatalogService, RemoveOutcome};
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub name: String,
}

impl RemoveBookCommandRequest {
    pub fn new(name: String) -> Self {
        Self {
            name,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub outcome: RemoveOutcome,
    pub message: String,
}

impl RemoveBookCommandResponse {
    pub fn new(outcome: RemoveOutcome) -> Self {
        let message = outcome.to_string();
        Self {
            outcome,
            message,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.name.as_str()).await
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}

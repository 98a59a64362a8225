use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookDto, BookPatch};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// the target name comes from the path, a name in the body is ignored
#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub publication: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl UpdateBookCommandRequest {
    pub fn new(name: &str, author: &str, publication: &str, price: f64) -> Self {
        Self {
            name: name.to_string(),
            author: Some(author.to_string()),
            publication: Some(publication.to_string()),
            price: Some(price),
        }
    }

    pub fn build_patch(&self) -> BookPatch {
        BookPatch {
            author: self.author.clone(),
            publication: self.publication.clone(),
            price: self.price,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub book: BookDto,
    pub message: String,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        let message = format!("Book updated: {}", book.name);
        Self {
            book,
            message,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let patch = req.build_patch();
        self.catalog_service.update_book(req.name.as_str(), &patch)
            .await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}

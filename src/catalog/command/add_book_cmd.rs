use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// missing or null fields decode as blanks so that validation, not parsing, rejects them
#[derive(Debug, Default, Deserialize)]
pub struct AddBookCommandRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub publication: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl AddBookCommandRequest {
    pub fn new(name: &str, author: &str, publication: &str, price: f64) -> Self {
        Self {
            name: Some(name.to_string()),
            author: Some(author.to_string()),
            publication: Some(publication.to_string()),
            price: Some(price),
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto::new(
            self.name.as_deref().unwrap_or_default(),
            self.author.as_deref().unwrap_or_default(),
            self.publication.as_deref().unwrap_or_default(),
            self.price.unwrap_or_default())
    }
}


#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

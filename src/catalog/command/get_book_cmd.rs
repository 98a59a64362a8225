use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub name: String,
}

impl GetBookCommandRequest {
    pub fn new(name: String) -> Self {
        Self {
            name,
        }
    }
}


// absence is a normal outcome, the book is simply missing
#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: Option<BookDto>,
}

impl GetBookCommandResponse {
    pub fn new(book: Option<BookDto>) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_name(req.name.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books()
            .await.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let svc = factory::create_catalog_service(&Configuration::new("test")).await.expect("should create service");
        let add_cmd = AddBookCommand::new(svc.clone());
        let list_cmd = ListBooksCommand::new(svc);

        let empty = list_cmd.execute(ListBooksCommandRequest::default()).await.expect("should list books");
        assert!(empty.books.is_empty());

        let _ = add_cmd.execute(AddBookCommandRequest::new("Clean Code", "Uncle Bob", "OReally", 100.0))
            .await.expect("should add book");
        let _ = add_cmd.execute(AddBookCommandRequest::new("Java", "Uncle Arc", "Oracle", 190.0))
            .await.expect("should add book");
        let res = list_cmd.execute(ListBooksCommandRequest::default()).await.expect("should list books");
        assert_eq!(2, res.books.len());
    }
}

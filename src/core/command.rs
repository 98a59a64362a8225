use async_trait::async_trait;
use crate::core::library::{BookField, LibraryError};

#[derive(Debug)]
pub enum CommandError {
    InvalidBook {
        message: String,
        invalid_fields: Vec<BookField>,
    },
    AlreadyExists {
        message: String,
    },
    NotFound {
        message: String,
    },
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::InvalidBook { message, invalid_fields } => {
                CommandError::InvalidBook { message, invalid_fields }
            }
            LibraryError::BookAlreadyExists { message } => {
                CommandError::AlreadyExists { message }
            }
            LibraryError::BookNotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Database { message, reason_code, retryable } => {
                CommandError::Database { message, reason_code, retryable }
            }
            LibraryError::CurrentlyUnavailable { message, reason_code, retryable } => {
                CommandError::Runtime { message, reason_code, retryable }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: true }
            }
        }
    }
}

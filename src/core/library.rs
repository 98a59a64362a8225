use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    // One or more fields of a book failed validation.
    InvalidBook {
        message: String,
        invalid_fields: Vec<BookField>,
    },
    BookAlreadyExists {
        message: String,
    },
    BookNotFound {
        message: String,
    },
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    // This is a retry-able error, which indicates that the store throttled or timed out the
    // request. The caller can retry with or without a backoff.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn invalid_book(message: &str, invalid_fields: Vec<BookField>) -> LibraryError {
        LibraryError::InvalidBook { message: message.to_string(), invalid_fields }
    }

    pub fn already_exists(message: &str) -> LibraryError {
        LibraryError::BookAlreadyExists { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::BookNotFound { message: message.to_string() }
    }

    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    pub fn database_or_unavailable(message: &str, reason: Option<String>, retryable: bool) -> LibraryError {
        if retryable {
            LibraryError::unavailable(
                format!("ddb database unavailable error {:?} {:?}", message, reason).as_str(), reason, true)
        } else {
            LibraryError::database(
                format!("ddb database error {:?} {:?}", message, reason).as_str(), reason, false)
        }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    // domain errors are expected outcomes of catalog operations, everything else is infrastructure
    pub fn is_domain(&self) -> bool {
        matches!(self, LibraryError::InvalidBook { .. }
            | LibraryError::BookAlreadyExists { .. }
            | LibraryError::BookNotFound { .. })
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<String> for LibraryError {
    fn from(err: String) -> Self {
        LibraryError::serialization(
            format!("serde parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidBook { message, invalid_fields } => {
                write!(f, "{} {:?}", message, invalid_fields)
            }
            LibraryError::BookAlreadyExists { message } => {
                write!(f, "{}", message)
            }
            LibraryError::BookNotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::CurrentlyUnavailable { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog and repository operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// BookField names a validated attribute of a book
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BookField {
    Name,
    Author,
    Publication,
    Price,
}

impl Display for BookField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookField::Name => write!(f, "name"),
            BookField::Author => write!(f, "author"),
            BookField::Publication => write!(f, "publication"),
            BookField::Price => write!(f, "price"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BookField, LibraryError};

    #[tokio::test]
    async fn test_should_create_invalid_book_error() {
        let err = LibraryError::invalid_book("test", vec![BookField::Price]);
        assert!(matches!(err, LibraryError::InvalidBook{ message: _, ref invalid_fields } if invalid_fields == &vec![BookField::Price]));
    }

    #[tokio::test]
    async fn test_should_create_already_exists_error() {
        assert!(matches!(LibraryError::already_exists("test"), LibraryError::BookAlreadyExists{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::BookNotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_database_error() {
        assert!(matches!(LibraryError::database("test", None, false), LibraryError::Database{ message: _, reason_code: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_unavailable_error() {
        assert!(matches!(LibraryError::unavailable("test", None, false), LibraryError::CurrentlyUnavailable{ message: _, reason_code: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_database_or_unavailable_error() {
        assert!(matches!(LibraryError::database_or_unavailable("test", None, true), LibraryError::CurrentlyUnavailable{ message: _, reason_code: _, retryable: true }));
        assert!(matches!(LibraryError::database_or_unavailable("test", Some("400".to_string()), false), LibraryError::Database{ message: _, reason_code: _, retryable: false }));
        assert!(matches!(LibraryError::database_or_unavailable("test", None, false), LibraryError::Database{ message: _, reason_code: _, retryable: false }));
    }

    #[tokio::test]
    async fn test_should_separate_domain_from_infrastructure_errors() {
        assert!(LibraryError::invalid_book("test", vec![BookField::Name]).is_domain());
        assert!(LibraryError::already_exists("test").is_domain());
        assert!(LibraryError::not_found("test").is_domain());
        assert!(!LibraryError::database("test", None, false).is_domain());
        assert!(!LibraryError::unavailable("test", None, true).is_domain());
        assert!(!LibraryError::serialization("test").is_domain());
        assert!(!LibraryError::runtime("test", None).is_domain());
    }

    #[tokio::test]
    async fn test_should_format_book_field() {
        assert_eq!("name", BookField::Name.to_string());
        assert_eq!("author", BookField::Author.to_string());
        assert_eq!("publication", BookField::Publication.to_string());
        assert_eq!("price", BookField::Price.to_string());
    }

    #[tokio::test]
    async fn test_should_convert_store_serialization_failures() {
        let err = serde_json::from_str::<serde_json::Value>("{").map_err(LibraryError::from);
        assert!(matches!(err, Err(LibraryError::Serialization { .. })));
        assert!(matches!(LibraryError::from("bad item".to_string()), LibraryError::Serialization { .. }));
    }
}

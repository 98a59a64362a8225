use std::sync::Arc;
use axum::http::StatusCode;
use tracing::error;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogService>) -> AppState {
        AppState {
            catalog,
        }
    }

    // builds the catalog service once, every request shares it
    pub async fn build(config: &Configuration) -> LibraryResult<AppState> {
        let catalog = factory::create_catalog_service(config).await?;
        Ok(AppState::new(catalog))
    }
}

pub type ServerError = (StatusCode, String);

const INTERNAL_ERROR: &str = "Internal Server Error";

// request bodies that fail to decode are client errors
pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::InvalidBook { .. } => {
                (StatusCode::BAD_REQUEST, "Invalid Book Details".to_string())
            }
            CommandError::AlreadyExists { .. } => {
                (StatusCode::BAD_REQUEST, "Book Already Exists".to_string())
            }
            CommandError::NotFound { message } => {
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::Serialization { ref message } => {
                error!(detail = message.as_str(), "catalog serialization failure");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
            }
            CommandError::Database { ref message, ref reason_code, retryable } => {
                error!(detail = message.as_str(), ?reason_code, retryable, "catalog store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
            }
            CommandError::Runtime { ref message, ref reason_code, retryable } => {
                error!(detail = message.as_str(), ?reason_code, retryable, "catalog runtime failure");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
            }
        }
    }
}

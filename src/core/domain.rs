use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use crate::core::repository::RepositoryStore;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}


// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub store: RepositoryStore,
    pub table_name: String,
    pub dynamodb_endpoint: String,
    pub listen_addr: String,
    pub lambda: bool,
    // reject updates whose merged record fails validation
    pub strict_updates: bool,
    pub log_level: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            store: RepositoryStore::InMemory,
            table_name: "books".to_string(),
            dynamodb_endpoint: "http://localhost:8000".to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
            lambda: false,
            strict_updates: false,
            log_level: "info".to_string(),
        }
    }

    /// Loads defaults overlaid by `CATALOG_*` environment variables, e.g.
    /// `CATALOG_STORE=dynamodb` or `CATALOG_STRICT_UPDATES=true`.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        let defaults = Configuration::new("dev");
        Config::builder()
            .set_default("branch_id", defaults.branch_id)?
            .set_default("store", "memory")?
            .set_default("table_name", defaults.table_name)?
            .set_default("dynamodb_endpoint", defaults.dynamodb_endpoint)?
            .set_default("listen_addr", defaults.listen_addr)?
            .set_default("lambda", defaults.lambda)?
            .set_default("strict_updates", defaults.strict_updates)?
            .set_default("log_level", defaults.log_level)?
            .add_source(
                Environment::with_prefix("CATALOG")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(RepositoryStore::InMemory, config.store);
        assert_eq!("books", config.table_name.as_str());
        assert!(!config.strict_updates);
        assert!(!config.lambda);
    }

    #[tokio::test]
    async fn test_should_load_config_defaults() {
        let config = Configuration::load().expect("should load config");
        assert_eq!("books", config.table_name.as_str());
        assert_eq!("0.0.0.0:8080", config.listen_addr.as_str());
    }
}

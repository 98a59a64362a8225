use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is the stored form of a catalog book, keyed by its unique name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub name: String,
    pub author: String,
    pub publication: String,
    pub price: f64,
}

impl BookEntity {
    pub fn new(name: &str, author: &str, publication: &str, price: f64) -> Self {
        Self {
            name: name.to_string(),
            author: author.to_string(),
            publication: publication.to_string(),
            price,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.name.to_string()
    }
}

impl Book for BookEntity {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn publication(&self) -> &str {
        self.publication.as_str()
    }

    fn price(&self) -> f64 {
        self.price
    }
}

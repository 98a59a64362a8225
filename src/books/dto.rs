use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub name: String,
    pub author: String,
    pub publication: String,
    pub price: f64,
}

impl BookDto {
    pub fn new(name: &str, author: &str, publication: &str, price: f64) -> BookDto {
        BookDto {
            name: name.to_string(),
            author: author.to_string(),
            publication: publication.to_string(),
            price,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.name.to_string()
    }
}

impl Book for BookDto {
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

// BookPatch carries the mutable attributes of an update, absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookPatch {
    pub author: Option<String>,
    pub publication: Option<String>,
    pub price: Option<f64>,
}

impl BookPatch {
    pub fn new(author: &str, publication: &str, price: f64) -> Self {
        Self {
            author: Some(author.to_string()),
            publication: Some(publication.to_string()),
            price: Some(price),
        }
    }

    // apply the patch onto a stored book, the name is never touched
    pub fn apply(&self, book: &mut BookEntity) {
        if let Some(author) = &self.author {
            book.author = author.to_string();
        }
        if let Some(publication) = &self.publication {
            book.publication = publication.to_string();
        }
        if let Some(price) = self.price {
            book.price = price;
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            name: other.name.to_string(),
            author: other.author.to_string(),
            publication: other.publication.to_string(),
            price: other.price,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            name: other.name.to_string(),
            author: other.author.to_string(),
            publication: other.publication.to_string(),
            price: other.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::{BookDto, BookPatch};

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("Clean Code", "Uncle Bob", "OReally", 100.0);
        assert_eq!("Clean Code", book.name.as_str());
        assert_eq!("Uncle Bob", book.author.as_str());
        assert_eq!(book, BookDto::from(&BookEntity::from(&book)));
    }

    #[tokio::test]
    async fn test_should_apply_patch() {
        let mut book = BookEntity::new("Clean Code", "Uncle Bob", "OReally", 100.0);
        BookPatch::new("New Author", "New Publication", 200.0).apply(&mut book);
        assert_eq!(BookEntity::new("Clean Code", "New Author", "New Publication", 200.0), book);
    }

    #[tokio::test]
    async fn test_should_keep_fields_missing_from_patch() {
        let mut book = BookEntity::new("Clean Code", "Uncle Bob", "OReally", 100.0);
        let patch = BookPatch { price: Some(50.0), ..BookPatch::default() };
        patch.apply(&mut book);
        assert_eq!(BookEntity::new("Clean Code", "Uncle Bob", "OReally", 50.0), book);
    }
}

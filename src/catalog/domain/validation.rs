use lazy_static::lazy_static;
use regex::Regex;
use crate::books::domain::Book;
use crate::core::library::BookField;

lazy_static! {
    // letters, ASCII whitespace and periods across the whole value
    static ref CATALOG_TEXT: Regex = Regex::new(r"(?-u)^[A-Za-z.\s]*$").expect("valid catalog text pattern");
}

pub fn is_name_valid(name: &str) -> bool {
    is_catalog_text(name)
}

pub fn is_author_valid(author: &str) -> bool {
    is_catalog_text(author)
}

pub fn is_publication_valid(publication: &str) -> bool {
    is_catalog_text(publication)
}

pub fn is_price_valid(price: f64) -> bool {
    price > 0.0
}

pub fn is_book_valid<B: Book + ?Sized>(book: &B) -> bool {
    is_name_valid(book.name()) && is_author_valid(book.author()) &&
        is_publication_valid(book.publication()) && is_price_valid(book.price())
}

/// Lists the fields of `book` that fail validation, in declaration order.
pub fn invalid_fields<B: Book + ?Sized>(book: &B) -> Vec<BookField> {
    let mut fields = vec![];
    if !is_name_valid(book.name()) {
        fields.push(BookField::Name);
    }
    if !is_author_valid(book.author()) {
        fields.push(BookField::Author);
    }
    if !is_publication_valid(book.publication()) {
        fields.push(BookField::Publication);
    }
    if !is_price_valid(book.price()) {
        fields.push(BookField::Price);
    }
    fields
}

fn is_catalog_text(value: &str) -> bool {
    !value.is_empty() && CATALOG_TEXT.is_match(value)
}

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue, Select};

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::ddb::{parse_float_attribute, parse_item, parse_string_attribute};

// "name" is a DynamoDB reserved word so expressions refer to the key through this placeholder
const NAME_ATTR: &str = "#book_name";

#[derive(Debug)]
pub struct DDBBookRepository {
    client: Client,
    table_name: String,
}

impl DDBBookRepository {
    pub(crate) fn new(client: Client, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }

    fn key(id: &str) -> (String, AttributeValue) {
        ("name".to_string(), AttributeValue::S(id.to_string()))
    }

    // walks every scan page, only the key attribute is loaded when keys_only is set
    async fn scan_all(&self, keys_only: bool) -> LibraryResult<Vec<HashMap<String, AttributeValue>>> {
        let table_name: &str = self.table_name.as_ref();
        let mut items = vec![];
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;
        loop {
            let mut request = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(true)
                .set_exclusive_start_key(exclusive_start_key.take());
            if keys_only {
                request = request
                    .projection_expression(NAME_ATTR)
                    .expression_attribute_names(NAME_ATTR, "name");
            }
            let page = request.send().await.map_err(LibraryError::from)?;
            if let Some(page_items) = page.items() {
                items.extend(page_items.iter().cloned());
            }
            match page.last_evaluated_key() {
                Some(last_key) if !last_key.is_empty() => {
                    exclusive_start_key = Some(last_key.clone());
                }
                _ => break,
            }
        }
        Ok(items)
    }
}

#[async_trait]
impl Repository<BookEntity> for DDBBookRepository {
    async fn exists(&self, id: &str) -> LibraryResult<bool> {
        self.get(id).await.map(|book| book.is_some())
    }

    async fn get(&self, id: &str) -> LibraryResult<Option<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let (key, value) = Self::key(id);
        self.client
            .get_item()
            .table_name(table_name)
            .key(key, value)
            .consistent_read(true)
            .send()
            .await.map_err(LibraryError::from)
            .map(|out| out.item().map(map_to_book))
    }

    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression(format!("attribute_not_exists({})", NAME_ATTR))
            .expression_attribute_names(NAME_ATTR, "name")
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| 1).map_err(|err| {
            if is_conditional_check_failure(&err) {
                LibraryError::already_exists(format!("book {} already exists", entity.name).as_str())
            } else {
                LibraryError::from(err)
            }
        })
    }

    async fn save(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn delete(&self, id: &str) -> LibraryResult<bool> {
        let table_name: &str = self.table_name.as_ref();
        let (key, value) = Self::key(id);
        self.client.delete_item()
            .table_name(table_name)
            .key(key, value)
            .return_values(ReturnValue::AllOld)
            .send()
            .await.map_err(LibraryError::from)
            .map(|out| out.attributes().map(|attrs| !attrs.is_empty()).unwrap_or(false))
    }

    async fn delete_all(&self) -> LibraryResult<usize> {
        let keys = self.scan_all(true).await?;
        let mut removed = 0;
        for item in keys {
            if let Some(name) = parse_string_attribute("name", &item) {
                if self.delete(name.as_str()).await? {
                    removed += 1;
                }
            }
        }
        Ok(removed)
    }

    async fn count(&self) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let mut total = 0;
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;
        loop {
            let page = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(true)
                .select(Select::Count)
                .set_exclusive_start_key(exclusive_start_key.take())
                .send()
                .await.map_err(LibraryError::from)?;
            total += page.count().max(0) as usize;
            match page.last_evaluated_key() {
                Some(last_key) if !last_key.is_empty() => {
                    exclusive_start_key = Some(last_key.clone());
                }
                _ => break,
            }
        }
        Ok(total)
    }

    async fn list_all(&self) -> LibraryResult<Vec<BookEntity>> {
        self.scan_all(false).await.map(|items| items.iter().map(map_to_book).collect())
    }
}

impl BookRepository for DDBBookRepository {}

// a failed attribute_not_exists condition means another writer already owns the key
fn is_conditional_check_failure<R>(err: &SdkError<PutItemError, R>) -> bool {
    matches!(err, SdkError::ServiceError(ctx) if ctx.err().is_conditional_check_failed_exception())
}

fn map_to_book(map: &HashMap<String, AttributeValue>) -> BookEntity {
    BookEntity {
        name: parse_string_attribute("name", map).unwrap_or(String::from("")),
        author: parse_string_attribute("author", map).unwrap_or(String::from("")),
        publication: parse_string_attribute("publication", map).unwrap_or(String::from("")),
        price: parse_float_attribute("price", map),
    }
}

use axum::{
    body::HttpBody,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post, put},
    BoxError, Router,
};
use serde::Deserialize;
use serde_json::Value;
use tower_http::trace::TraceLayer;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_all_books_cmd::{RemoveAllBooksCommand, RemoveAllBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

#[derive(Debug, Deserialize)]
pub(crate) struct BookQuery {
    name: String,
}

// generic over the request body so the same routes serve lambda_http and hyper requests
pub fn app<B>(state: AppState) -> Router<(), B>
    where
        B: HttpBody + Send + 'static,
        B::Data: Send,
        B::Error: Into<BoxError> {
    let api = Router::new()
        .route("/book", post(add_book).get(find_book_by_query))
        .route("/book/:name", get(find_book_by_name))
        .route("/book/update/:name", put(update_book))
        .route("/book/delete/:name", delete(remove_book))
        .route("/books", get(list_books))
        .route("/books/delete", delete(remove_all_books));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Response, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res.book).into_response())
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Response, ServerError> {
    let res = ListBooksCommand::new(state.catalog).execute(ListBooksCommandRequest::default()).await?;
    if res.books.is_empty() {
        return Ok((StatusCode::OK, "All books are deleted").into_response());
    }
    Ok(Json(res.books).into_response())
}

pub(crate) async fn find_book_by_query(
    State(state): State<AppState>,
    Query(query): Query<BookQuery>) -> Result<Response, ServerError> {
    find_book(state, query.name).await
}

pub(crate) async fn find_book_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>) -> Result<Response, ServerError> {
    find_book(state, name).await
}

async fn find_book(state: AppState, name: String) -> Result<Response, ServerError> {
    let res = GetBookCommand::new(state.catalog).execute(GetBookCommandRequest::new(name)).await?;
    match res.book {
        Some(book) => Ok(Json(book).into_response()),
        None => Err((StatusCode::BAD_REQUEST, "Book Not Found".to_string())),
    }
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(name): Path<String>,
    json: Json<Value>) -> Result<Response, ServerError> {
    let mut req: UpdateBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.name = name;
    let res = UpdateBookCommand::new(state.catalog).execute(req).await?;
    Ok((StatusCode::OK, res.message).into_response())
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(name): Path<String>) -> Result<Response, ServerError> {
    let res = RemoveBookCommand::new(state.catalog).execute(RemoveBookCommandRequest::new(name)).await?;
    Ok((StatusCode::OK, res.message).into_response())
}

pub(crate) async fn remove_all_books(
    State(state): State<AppState>) -> Result<Response, ServerError> {
    let res = RemoveAllBooksCommand::new(state.catalog).execute(RemoveAllBooksCommandRequest::default()).await?;
    Ok((StatusCode::OK, res.message).into_response())
}

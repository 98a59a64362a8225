use std::net::SocketAddr;
use lambda_http::{run, Error};
use tracing::info;
use book_catalog::catalog::controller::app;
use book_catalog::core::controller::AppState;
use book_catalog::core::domain::Configuration;
use book_catalog::utils::logs::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::load()?;
    setup_tracing(&config);

    info!(branch = config.branch_id.as_str(), store = ?config.store, lambda = config.lambda, "starting book catalog");

    let state = AppState::build(&config).await?;

    if config.lambda {
        return run(app::<lambda_http::Body>(state)).await;
    }

    let addr: SocketAddr = config.listen_addr.parse()?;
    info!(%addr, "listening");
    axum::Server::bind(&addr)
        .serve(app::<axum::body::Body>(state).into_make_service())
        .await?;
    Ok(())
}

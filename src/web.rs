//! The prediction web application.

pub mod middleware;
pub mod requests;
pub mod responses;
pub mod views;

use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Cors, Tracing};
use poem::{get, post, Endpoint, EndpointExt, Response, Route, Server};

use crate::opts::WebOpts;
use crate::prelude::*;
use crate::trainer::model::Model;
use crate::web::middleware::ErrorMiddleware;

/// Loads the model and runs the web application.
///
/// The model is loaded before the listener binds: without a readable
/// artifact the process never starts serving.
pub async fn run(opts: WebOpts) -> Result {
    let model = Model::load(&opts.model_path)?;
    info!(model_path = %opts.model_path.display(), "model loaded");

    let app = create_app(model);
    info!(host = opts.host.as_str(), port = opts.port, "listening");
    Server::new(TcpListener::bind((IpAddr::from_str(&opts.host)?, opts.port)))
        .run_with_graceful_shutdown(app, shutdown_signal(), None)
        .await?;
    Ok(())
}

pub fn create_app(model: Model) -> impl Endpoint<Output = Response> {
    Route::new()
        .at("/", get(views::get_index))
        .at("/predict", post(views::post_predict))
        .data(Arc::new(model))
        .with(Tracing)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(Cors::new())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!("failed to listen for the shutdown signal: {:#}", error);
    }
}

//! Proxy server: one inference endpoint plus the static web bundle.
//!
//! The server reads its own API key (`OPENAI_API_KEY`) so the client build
//! never has to carry one.

pub mod handlers;
pub mod static_files;

use crate::{
    config::ServerConfig,
    inference::CompletionClient,
    logger,
    models::ErrorResponse,
};
use actix_cors::Cors;
use actix_web::{error::InternalError, middleware, web, App, HttpResponse, HttpServer};
use std::{path::PathBuf, sync::Arc};

pub struct AppState {
    pub client: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }
}

/// JSON extractor settings: large bodies for base64 images, and unreadable
/// bodies reported as `500 {error}` like any other failed evaluation.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let message = err.to_string();
            log::warn!("Rejected request body: {}", message);
            InternalError::from_response(
                err,
                HttpResponse::InternalServerError().json(ErrorResponse { error: message }),
            )
            .into()
        })
}

/// The API route first, then the bundle as the catch-all.
pub fn routes(static_dir: PathBuf) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(web::resource("/api/evaluate").route(web::post().to(handlers::evaluate)))
            .service(static_files::bundle(&static_dir));
    }
}

pub async fn run(config: ServerConfig, client: Arc<dyn CompletionClient>) -> std::io::Result<()> {
    let address = config.bind_address();
    let body_limit = config.body_limit;
    let static_dir = config.static_dir.clone();
    let state = web::Data::new(AppState::new(client));

    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), &address);
    logger::log_config_info(&config);
    if config.inference.api_key.is_none() {
        log::warn!("⚠️  OPENAI_API_KEY is not set, every evaluation will fail");
    }

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::new("%r %s %b %Dms"))
            .app_data(state.clone())
            .app_data(json_config(body_limit))
            .configure(routes(static_dir.clone()))
    })
    .bind(&address)?
    .run()
    .await
}

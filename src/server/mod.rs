//! main file for the server

mod controller;
pub mod model;
mod routes;
mod state;

use crate::server::controller::error::json_error_handler;
use crate::server::model::config::ServerConfig;
use crate::server::state::AppState;
use actix_web::{middleware::Logger, web, App, HttpServer};

/// Run the server
pub async fn run(ServerConfig { addr, json_limit }: ServerConfig) -> std::io::Result<()> {
    let state = web::Data::new(AppState::seeded());
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(json_config(json_limit))
            .configure(routes::configure)
    })
        .bind(addr)?
        .run()
        .await
}

/// json extractor config shared by all routes
pub(crate) fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(json_error_handler)
}

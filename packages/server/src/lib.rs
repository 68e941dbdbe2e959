#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the card-parse application.
//!
//! Serves the REST API used by the statement-upload frontend: a liveness
//! check and the PDF parse endpoint. Uploaded documents are converted to
//! text, run through issuer detection and field extraction, and returned as
//! a structured record. Nothing is persisted — every request is a single
//! pure pass over its own upload.

mod handlers;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use card_parse_issuer::registry;

/// Starts the card-parse API server.
///
/// Touches the issuer registry before binding so that malformed profiles
/// abort startup instead of the first request. This is a regular async
/// function — the caller provides the runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
///
/// # Panics
///
/// Panics if any embedded issuer profile fails to parse or compile.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let issuers: Vec<&str> = registry()
        .profiles()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    log::info!("Supported issuers: {}", issuers.join(", "));

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/parse", web::post().to(handlers::parse)),
            )
    })
    .bind((bind_addr, port))?
    .run()
    .await
}

use actix_web::{web, App, HttpServer};
use log::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod apis;
mod cores;
mod configs;
mod utils;

use crate::apis::api_doc::ApiDoc;
use crate::apis::models_api::json_config;
use crate::configs::settings::Config;
use crate::cores::image_models::replicate_client::ReplicateClient;
use crate::utils::log::init_logger;

#[cfg(test)]
mod test;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    init_logger()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("Logger setup failed: {}", e)))?;

    // Loaded once, then shared read-only with every worker
    let config = Config::load_config()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("Config load failed: {}", e)))?;
    let client = ReplicateClient::from_config(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("HTTP client setup failed: {}", e)))?;
    let client = web::Data::new(client);

    info!("Replicate proxy listening on http://{}:{}", config.host, config.port);
    info!(
        "Using API token: {}",
        if config.api_token.is_placeholder() { "NOT SET" } else { "***masked***" }
    );

    let json_limit = config.json_limit;
    let cors_max_age = config.cors_max_age;

    // Start the HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(apis::cors(cors_max_age))
            .app_data(client.clone())
            .app_data(json_config(json_limit))
            .configure(apis::models_api::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

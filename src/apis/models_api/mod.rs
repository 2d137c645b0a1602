use actix_web::{error, web, HttpResponse};

use crate::apis::schemas::ErrorResponse;

pub mod background;
pub mod health;
pub mod image_edit;
pub mod relay;
pub mod schemas;

// Configure the actix_web service routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health)
       .service(image_edit::replicate)
       .service(background::background_remover);
}

// JSON extractor settings: body size limit and a JSON body for rejected payloads.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let error_response = ErrorResponse {
                error: "Invalid request".into(),
                detail: err.to_string(),
            };
            error::InternalError::from_response(err, HttpResponse::BadRequest().json(error_response)).into()
        })
}

use actix_web::{HttpRequest, HttpResponse};
use log::{error, info};

use crate::apis::models_api::schemas::PredictionResponse;
use crate::apis::schemas::ErrorResponse;
use crate::cores::image_models::image_controller::PredictionProvider;
use crate::cores::image_models::replicate_client::ReplicateClient;
use crate::utils::log::log_request;

// define an interface layer that runs one prediction and turns it into the client response
pub struct Relay {
    model: Box<dyn PredictionProvider>,
    error_label: &'static str,
}

impl Relay {
    pub fn new(model: Box<dyn PredictionProvider>, error_label: &'static str) -> Self {
        Relay { model, error_label }
    }

    // Every failure is reported as a 500 carrying the endpoint's label.
    pub async fn respond(&self, req: &HttpRequest, client: &ReplicateClient) -> HttpResponse {
        match self.model.predict(client).await {
            Ok(output) => {
                info!(target: "access_log", "{}", log_request(req, 200, None));
                HttpResponse::Ok().json(PredictionResponse { output })
            }
            Err(err) => {
                let detail = err.to_string();
                error!(target: "error_log", "{}: {}", self.error_label, detail);
                info!(target: "access_log", "{}", log_request(req, 500, Some(&detail)));
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: self.error_label.into(),
                    detail,
                })
            }
        }
    }
}

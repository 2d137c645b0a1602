use actix_web::{post, web, HttpRequest, Responder};
use log::info;

use crate::apis::models_api::image_edit::is_supplied;
use crate::apis::models_api::relay::Relay;
use crate::apis::models_api::schemas::BackgroundRemovalRequest;
use crate::cores::image_models::background_remover::BackgroundRemover;
use crate::cores::image_models::replicate_client::ReplicateClient;

pub const BACKGROUND_PROXY_ERROR: &str = "Background remover proxy error";

#[utoipa::path(
    post,
    path = "/background-remover",
    request_body = BackgroundRemovalRequest,
    responses(
        (status = 200, body = crate::apis::models_api::schemas::PredictionResponse),
        (status = 400, body = crate::apis::schemas::ErrorResponse),
        (status = 500, body = crate::apis::schemas::ErrorResponse),
    )
)]

// Handle the POST request for /background-remover.
#[post("/background-remover")]
pub async fn background_remover(
    req: HttpRequest,
    req_body: web::Json<BackgroundRemovalRequest>,
    client: web::Data<ReplicateClient>,
) -> impl Responder {
    let req_body = req_body.into_inner();
    info!("Background remover request received: has_image_url={}", is_supplied(req_body.image_url.as_ref()));

    let relay = Relay::new(Box::new(BackgroundRemover::new(req_body)), BACKGROUND_PROXY_ERROR);
    relay.respond(&req, client.get_ref()).await
}

use actix_web::{post, web, HttpRequest, Responder};
use log::info;
use serde_json::Value;

use crate::apis::models_api::relay::Relay;
use crate::apis::models_api::schemas::TransformRequest;
use crate::cores::image_models::flux_kontext::FluxKontext;
use crate::cores::image_models::replicate_client::ReplicateClient;

pub const PROXY_ERROR: &str = "Proxy error";

const PROMPT_PREVIEW_CHARS: usize = 100;

#[utoipa::path(
    post,  // request method
    path = "/replicate",
    request_body = TransformRequest,
    responses(
        (status = 200, body = crate::apis::models_api::schemas::PredictionResponse),
        (status = 400, body = crate::apis::schemas::ErrorResponse),
        (status = 500, body = crate::apis::schemas::ErrorResponse),
    )
)]

// Handle the POST request for /replicate.
#[post("/replicate")]
pub async fn replicate(
    req: HttpRequest,
    req_body: web::Json<TransformRequest>,
    client: web::Data<ReplicateClient>,
) -> impl Responder {
    // 1. Log a summary of the request, never the image itself
    let req_body = req_body.into_inner();
    info!(
        "Request received: prompt={}, has_image={}",
        prompt_preview(req_body.prompt.as_ref()),
        is_supplied(req_body.input_image.as_ref())
    );

    // 2. Run the prediction and relay its result
    let relay = Relay::new(Box::new(FluxKontext::new(req_body)), PROXY_ERROR);
    relay.respond(&req, client.get_ref()).await
}

pub fn prompt_preview(prompt: Option<&Value>) -> String {
    match prompt.and_then(Value::as_str) {
        Some(prompt) => format!("{}...", prompt.chars().take(PROMPT_PREVIEW_CHARS).collect::<String>()),
        None => "<none>".to_string(),
    }
}

// A field counts as supplied when it is present and not null.
pub fn is_supplied(value: Option<&Value>) -> bool {
    value.is_some_and(|value| !value.is_null())
}

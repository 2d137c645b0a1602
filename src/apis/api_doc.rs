use utoipa::OpenApi;

use crate::apis::models_api;
use crate::apis::models_api::schemas::{BackgroundRemovalRequest, PredictionResponse, TransformRequest};
use crate::apis::schemas::ErrorResponse;


#[derive(OpenApi)]
#[openapi(
    paths(
        models_api::health::health,
        models_api::image_edit::replicate,
        models_api::background::background_remover,
    ),
    components(
        schemas(TransformRequest, BackgroundRemovalRequest, PredictionResponse, ErrorResponse)
    )
)]

pub struct ApiDoc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::cores::schemas::present;

// Request parameters of the /replicate interface. Values are relayed to
// Replicate as received, whatever their JSON type.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct TransformRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub prompt: Option<Value>,      // Editing instruction for the model.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub input_image: Option<Value>, // URL or data URI of the source image.
}

// Request parameters of the /background-remover interface.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct BackgroundRemovalRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Value>, // URL or data URI of the source image.
}

// Successful response of both relay interfaces. `output` is passed through as
// Replicate returned it: a URL, a list of URLs, or any other JSON value. It is
// left out when Replicate sent none.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PredictionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub output: Option<Value>,
}

use async_trait::async_trait;
use serde_json::Value;
use log::info;

use crate::apis::models_api::schemas::TransformRequest;
use crate::cores::error::PredictionError;
use crate::cores::image_models::image_controller::{describe_output, interpret_prediction, PredictionProvider};
use crate::cores::image_models::replicate_client::{AuthScheme, ReplicateClient};
use crate::cores::schemas::{FluxKontextInput, ModelPredictionRequest};

pub const PREDICTIONS_PATH: &str = "/models/black-forest-labs/flux-kontext-dev-lora/predictions";
pub const LORA_WEIGHTS: &str =
    "https://replicate.delivery/xezq/9cGqCafl9wQMVS0WwkAAvFg0tT5hBTHOseO1YJCKFw3qRbEVA/flux-lora.tar";

const API_NAME: &str = "Replicate API";
const TASK: &str = "Prediction";

// Prompt-guided image editing with the FLUX.1 Kontext [dev] LoRA model.
pub struct FluxKontext {
    pub prompt: Option<Value>,
    pub input_image: Option<Value>,
}

impl FluxKontext {
    pub fn new(req_body: TransformRequest) -> Self {
        FluxKontext {
            prompt: req_body.prompt,
            input_image: req_body.input_image,
        }
    }

    // The sampling parameters match the trained LoRA and must not drift.
    pub fn request_body(&self) -> ModelPredictionRequest<FluxKontextInput> {
        ModelPredictionRequest {
            input: FluxKontextInput {
                prompt: self.prompt.clone(),
                guidance: 2.5,
                megapixels: "1",
                input_image: self.input_image.clone(),
                aspect_ratio: "match_input_image",
                lora_strength: 1,
                output_format: "webp",
                output_quality: 100,
                num_inference_steps: 30,
                lora_weights: LORA_WEIGHTS,
            },
        }
    }
}

#[async_trait]
impl PredictionProvider for FluxKontext {
    async fn predict(&self, client: &ReplicateClient) -> Result<Option<Value>, PredictionError> {
        // 1. Build the request body from the prompt, image and fixed parameters
        let request_body = self.request_body();

        // 2. Send it to the model-specific endpoint and wait for the prediction
        info!("Sending to Replicate API with model-specific endpoint...");
        let result = client
            .create_prediction(API_NAME, PREDICTIONS_PATH, AuthScheme::Token, &request_body)
            .await?;
        info!(
            "Replicate response received: status={}, output={}",
            result.status.as_deref().unwrap_or("unknown"),
            result.output.as_ref().map(describe_output).unwrap_or_else(|| "none".to_string())
        );

        // 3. Decide between output and error from the prediction status
        interpret_prediction(TASK, result)
    }
}

use async_trait::async_trait;
use serde_json::Value;
use log::info;

use crate::apis::models_api::schemas::BackgroundRemovalRequest;
use crate::cores::error::PredictionError;
use crate::cores::image_models::image_controller::{describe_output, interpret_prediction, PredictionProvider};
use crate::cores::image_models::replicate_client::{AuthScheme, ReplicateClient};
use crate::cores::schemas::{BackgroundRemoverInput, VersionedPredictionRequest};

pub const PREDICTIONS_PATH: &str = "/predictions";
pub const MODEL_VERSION: &str =
    "851-labs/background-remover:a029dff38972b5fda4ec5d75d7d1cd25aeff621d2cf4946a41055d7db66b80bc";

const API_NAME: &str = "Background Remover API";
const TASK: &str = "Background removal";

// 851-labs/background-remover, pinned to a single revision.
pub struct BackgroundRemover {
    pub image_url: Option<Value>,
}

impl BackgroundRemover {
    pub fn new(req_body: BackgroundRemovalRequest) -> Self {
        BackgroundRemover {
            image_url: req_body.image_url,
        }
    }

    pub fn request_body(&self) -> VersionedPredictionRequest<BackgroundRemoverInput> {
        VersionedPredictionRequest {
            version: MODEL_VERSION,
            input: BackgroundRemoverInput {
                image: self.image_url.clone(),
                format: "png",
                reverse: false,
                threshold: 0,
                background_type: "rgba",
            },
        }
    }
}

#[async_trait]
impl PredictionProvider for BackgroundRemover {
    async fn predict(&self, client: &ReplicateClient) -> Result<Option<Value>, PredictionError> {
        // 1. Build the versioned request body
        let request_body = self.request_body();

        // 2. Send it to the generic predictions endpoint and wait for the prediction
        info!("Sending to Replicate Background Remover API...");
        let result = client
            .create_prediction(API_NAME, PREDICTIONS_PATH, AuthScheme::Bearer, &request_body)
            .await?;
        info!(
            "Background Remover response received: status={}, output={}",
            result.status.as_deref().unwrap_or("unknown"),
            result.output.as_ref().map(describe_output).unwrap_or_else(|| "none".to_string())
        );

        // 3. Decide between output and error from the prediction status
        interpret_prediction(TASK, result)
    }
}

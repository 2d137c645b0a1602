use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// Keeps an explicit `null` apart from a missing field: with `#[serde(default)]`
// a missing field stays `None` and `null` becomes `Some(Value::Null)`.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

// ------------------------------------------ Replicate Prediction ------------------------------------------
// Body of a prediction answered by Replicate. Only the fields the relay reads are kept.
#[derive(Deserialize, Debug)]
pub struct PredictionResult {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub output: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

// Model-specific endpoint: the model is addressed by the URL path.
#[derive(Serialize, Debug)]
pub struct ModelPredictionRequest<T> {
    pub input: T,
}

// Generic endpoint: the model revision is pinned in the body.
#[derive(Serialize, Debug)]
pub struct VersionedPredictionRequest<T> {
    pub version: &'static str,
    pub input: T,
}

// flux-kontext-dev-lora input
#[derive(Serialize, Debug)]
pub struct FluxKontextInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Value>,
    pub guidance: f64,
    pub megapixels: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_image: Option<Value>,
    pub aspect_ratio: &'static str,
    pub lora_strength: u32,
    pub output_format: &'static str,
    pub output_quality: u32,
    pub num_inference_steps: u32,
    pub lora_weights: &'static str,
}

// background-remover input
#[derive(Serialize, Debug)]
pub struct BackgroundRemoverInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Value>,
    pub format: &'static str,
    pub reverse: bool,
    pub threshold: u32,
    pub background_type: &'static str,
}

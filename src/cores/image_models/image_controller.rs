use async_trait::async_trait;
use serde_json::Value;

use crate::cores::error::PredictionError;
use crate::cores::image_models::replicate_client::ReplicateClient;
use crate::cores::schemas::PredictionResult;

#[async_trait]
pub trait PredictionProvider: Send + Sync {
    async fn predict(&self, client: &ReplicateClient) -> Result<Option<Value>, PredictionError>;
}

// Map a synchronous prediction onto the output relayed to the caller.
//
// `succeeded` always counts as success, even without an output (`None` when
// Replicate left the field out). A `processing` prediction is only accepted
// once it already carries an output; everything else is an error labelled
// with `task`.
pub fn interpret_prediction(task: &'static str, result: PredictionResult) -> Result<Option<Value>, PredictionError> {
    let PredictionResult { status, output, error } = result;

    match (status.as_deref(), output) {
        (Some("succeeded"), output) => Ok(output),
        (Some("processing"), Some(output)) if !output.is_null() => Ok(Some(output)),
        (Some("failed"), _) => Err(PredictionError::Failed {
            task,
            message: error_message(error).unwrap_or_else(|| "Unknown error".to_string()),
        }),
        (status, _) => Err(PredictionError::Incomplete {
            task,
            status: status.unwrap_or("unknown").to_string(),
            message: error_message(error).unwrap_or_else(|| "Waiting for completion".to_string()),
        }),
    }
}

fn error_message(error: Option<Value>) -> Option<String> {
    match error? {
        Value::Null => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message),
        other => Some(other.to_string()),
    }
}

// Short description of an output for logs. Outputs can be whole data URIs.
pub fn describe_output(output: &Value) -> String {
    match output {
        Value::Null => "null".to_string(),
        Value::String(url) if url.len() <= 200 => format!("string {}", url),
        Value::String(url) => format!("string ({} bytes)", url.len()),
        Value::Array(items) => format!("array of {}", items.len()),
        Value::Object(_) => "object".to_string(),
        other => other.to_string(),
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ------------------------------------------ General Error API ------------------------------------------
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}

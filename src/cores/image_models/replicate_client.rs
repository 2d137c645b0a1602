use reqwest::Client;
use serde::Serialize;
use log::error;

use crate::configs::settings::{ApiToken, Config};
use crate::cores::error::PredictionError;
use crate::cores::schemas::PredictionResult;

// Authorization scheme sent with the token. The two Replicate endpoints the
// relay uses were wired with different schemes and both are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    Token,
    Bearer,
}

impl AuthScheme {
    pub fn header_value(&self, token: &ApiToken) -> String {
        match self {
            AuthScheme::Token => format!("Token {}", token.expose()),
            AuthScheme::Bearer => format!("Bearer {}", token.expose()),
        }
    }
}

// Shared, immutable handle on the Replicate API, one per process.
pub struct ReplicateClient {
    client: Client,
    base_url: String,
    api_token: ApiToken,
    timeout_secs: u64,
}

impl ReplicateClient {
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.replicate.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(ReplicateClient {
            client: builder.build()?,
            base_url: config.replicate.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
            timeout_secs: config.replicate.timeout_secs,
        })
    }

    // Submit a prediction and block until Replicate reports a result (`Prefer: wait`).
    pub async fn create_prediction<B>(
        &self,
        api: &'static str,
        path: &str,
        scheme: AuthScheme,
        body: &B,
    ) -> Result<PredictionResult, PredictionError>
    where
        B: Serialize + Sync,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url)
            .header("Authorization", scheme.header_value(&self.api_token))
            .header("Content-Type", "application/json")
            .header("Prefer", "wait")
            .json(body)
            .send()
            .await
            .map_err(|err| self.request_error(api, err))?;

        let status = response.status();
        let text = response.text().await.map_err(|err| self.request_error(api, err))?;

        if !status.is_success() {
            error!(target: "error_log", "{} error details: status={}, body={}", api, status, text);
            return Err(PredictionError::Upstream {
                api,
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|err| PredictionError::MalformedResponse {
            api,
            message: err.to_string(),
        })
    }

    fn request_error(&self, api: &'static str, err: reqwest::Error) -> PredictionError {
        if err.is_timeout() {
            PredictionError::Timeout { api, seconds: self.timeout_secs }
        } else {
            PredictionError::Request { api, message: err.to_string() }
        }
    }
}

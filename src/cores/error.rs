use thiserror::Error;

// Failures of a single relayed prediction. The handlers report every variant
// as a 500; the Display text becomes the `detail` field.
#[derive(Debug, Error)]
pub enum PredictionError {
    // The provider answered with a non-success HTTP status.
    #[error("{api} error: {status} - {body}")]
    Upstream {
        api: &'static str,
        status: u16,
        body: String,
    },

    // The provider reported `status: "failed"`.
    #[error("{task} failed: {message}")]
    Failed {
        task: &'static str,
        message: String,
    },

    // Any other status, `processing` without an output included.
    #[error("{task} status: {status} - {message}")]
    Incomplete {
        task: &'static str,
        status: String,
        message: String,
    },

    #[error("Failed to parse {api} response: {message}")]
    MalformedResponse {
        api: &'static str,
        message: String,
    },

    #[error("{api} request failed: {message}")]
    Request {
        api: &'static str,
        message: String,
    },

    #[error("{api} did not respond within {seconds}s")]
    Timeout {
        api: &'static str,
        seconds: u64,
    },
}

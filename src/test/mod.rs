use actix_web::web;

use crate::configs::settings::{ApiToken, Config, Replicate};
use crate::cores::image_models::replicate_client::ReplicateClient;

mod interpret_test;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_JSON_LIMIT: usize = 1024 * 1024;

pub fn test_config(base_url: &str, timeout_secs: u64) -> Config {
    Config {
        replicate: Replicate {
            base_url: base_url.to_string(),
            timeout_secs,
        },
        api_token: ApiToken::new(TEST_TOKEN),
        ..Config::default()
    }
}

// Client pointed at a mock Replicate server
pub fn test_client(base_url: &str) -> web::Data<ReplicateClient> {
    let client = ReplicateClient::from_config(&test_config(base_url, 10)).unwrap();
    web::Data::new(client)
}

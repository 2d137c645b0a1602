use serde::Deserialize;
use std::fmt;
use std::fs::{File, metadata};
use std::io::Read;
use std::time::Duration;
use log::warn;

pub const API_TOKEN_ENV: &str = "REPLICATE_API_TOKEN";
pub const PLACEHOLDER_API_TOKEN: &str = "your-token-here";

const SYSTEM_CONFIG_PATH: &str = "/etc/imgrelay/configs.yaml";
const LOCAL_CONFIG_PATH: &str = "src/configs/configs.yaml";

// ---------------------------------------------- Credential ----------------------------------------------
// Replicate API token. Formatting it never prints the secret.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(value: impl Into<String>) -> Self {
        ApiToken(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER_API_TOKEN
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***masked***")
    }
}

// Falls back to the placeholder token when the variable is unset or empty.
pub fn resolve_api_token(value: Option<String>) -> ApiToken {
    match value.filter(|token| !token.is_empty()) {
        Some(token) => ApiToken::new(token),
        None => {
            warn!(
                "{} environment variable not set. Please set it before starting the server.",
                API_TOKEN_ENV
            );
            ApiToken::new(PLACEHOLDER_API_TOKEN)
        }
    }
}

// ---------------------------------------------- Upstream Config ----------------------------------------------
// Replicate API
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Replicate {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for Replicate {
    fn default() -> Self {
        Replicate {
            base_url: "https://api.replicate.com/v1".to_string(),
            timeout_secs: 120,
        }
    }
}

impl Replicate {
    // None means the relay waits for the provider indefinitely
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

// ---------------------------------------------- Config ----------------------------------------------
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub json_limit: usize,
    pub cors_max_age: usize,
    pub replicate: Replicate,
    #[serde(skip)]
    pub api_token: ApiToken,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 4000,
            json_limit: 20 * 1024 * 1024,
            cors_max_age: 3600,
            replicate: Replicate::default(),
            api_token: ApiToken::new(PLACEHOLDER_API_TOKEN),
        }
    }
}

impl Config {
    // Reads the YAML file if one exists, then takes the token from the environment.
    pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
        let mut config = match config_path() {
            Some(path) => {
                let mut file = File::open(path)?;
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                Config::from_yaml(&contents)?
            }
            None => Config::default(),
        };
        config.api_token = resolve_api_token(std::env::var(API_TOKEN_ENV).ok());
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Config, serde_yaml::Error> {
        serde_yaml::from_str(contents)
    }
}

fn config_path() -> Option<&'static str> {
    [SYSTEM_CONFIG_PATH, LOCAL_CONFIG_PATH]
        .into_iter()
        .find(|path| metadata(path).is_ok())
}

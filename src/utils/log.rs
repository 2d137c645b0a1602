use actix_web::HttpRequest;
use chrono::Local;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::fs::metadata;

const LOG_CONFIG_PATH: &str = "src/configs/log4rs.yaml";
const CONSOLE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

// Initialize log4rs from the YAML file, or log to the console when it is missing.
pub fn init_logger() -> Result<(), Box<dyn std::error::Error>> {
    if metadata(LOG_CONFIG_PATH).is_ok() {
        log4rs::init_file(LOG_CONFIG_PATH, Default::default()).map_err(|err| err.to_string())?;
        return Ok(());
    }

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}

// Function for access log and error log
pub fn log_request(req: &HttpRequest, status_code: u16, error_message: Option<&str>) -> String {
    let referer = req.headers()
        .get("Referer")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let user_agent = req.headers()
        .get("User-Agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let client_ip = req.peer_addr().map(|addr| addr.ip().to_string()).unwrap_or_else(|| "unknown".to_string());
    let request_method = req.method().as_str();
    let request_uri = req.uri().to_string();
    let http_version = format!("{:?}", req.version());
    let time = Local::now().format("%d/%b/%Y:%H:%M:%S %z");

    match error_message {
        // Error log format
        Some(msg) => format!(
            "{client_ip} - - [{time}] \"{request_method} {request_uri} {http_version}\" {status_code} \"{referer}\" \"{user_agent}\" \"{msg}\""
        ),
        // Access log format
        None => format!(
            "{client_ip} - - [{time}] \"{request_method} {request_uri} {http_version}\" {status_code} \"{referer}\" \"{user_agent}\""
        ),
    }
}

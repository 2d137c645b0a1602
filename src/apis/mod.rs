use actix_cors::Cors;

pub mod api_doc;
pub mod models_api;
pub mod schemas;

// Open to every origin; answers with `Access-Control-Allow-Origin: *`.
pub fn cors(max_age: usize) -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec!["Content-Type", "Authorization"])
        .max_age(max_age)
}

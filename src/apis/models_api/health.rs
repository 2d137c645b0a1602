use actix_web::{get, Responder};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, body = String),
    )
)]

#[get("/health")]
pub async fn health() -> impl Responder {
    "OK"
}

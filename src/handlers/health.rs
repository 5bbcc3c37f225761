use actix_web::{HttpResponse, Responder, get};

#[get("/")]
pub async fn hello() -> impl Responder {
    HttpResponse::Ok().body("More Fans API v1.0")
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().naive_utc()
    }))
}

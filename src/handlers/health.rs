//! 생존 확인 엔드포인트
//!
//! 로드밸런서와 프론트엔드가 서버 상태를 확인할 때 사용합니다.
use actix_web::{get, HttpResponse};
use chrono::Utc;
use serde_json::json;

use crate::domain::dto::users::response::MessageResponse;

/// `GET /api/healthz/ping`
#[get("/ping")]
pub async fn healthz_ping() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Comic Book API is alive and well!"))
}

/// `GET /api/test/ping`
#[get("/ping")]
pub async fn test_ping() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Comic Book API is alive"))
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "comic_book_api",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

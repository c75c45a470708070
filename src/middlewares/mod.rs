//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인의 횡단 관심사를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <jwt>` 추출 및 검증
//! - 사용자 정보를 request extension에 저장
//! - 토큰이 없거나 유효하지 않으면 JSON 401 응답
//!
//! ## 특정 스코프에만 적용
//! ```rust,ignore
//! use actix_web::web;
//!
//! web::scope("/api/auth")
//!     .service(register)
//!     .service(
//!         web::scope("/profile")
//!             .wrap(AuthMiddleware::required())
//!             .service(get_profile),
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;

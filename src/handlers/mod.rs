//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다. Spring의 Controller 레이어와
//! 같은 역할이며, 서비스는 `web::Data`로 주입받습니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 인메모리 저장소                  ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`comic_books`**: 카탈로그 CRUD (`/api/comicbooks`)
//! - **`auth`**: 회원가입, 로그인, 프로필 (`/api/auth`)
//! - **`health`**: 생존 확인 (`/api/healthz/ping`, `/api/test/ping`, `/health`)
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하고, `?`로 전파된
//! `AppError`는 `ResponseError` 구현을 통해 JSON 에러 응답이 됩니다.
//!
//! ```rust,ignore
//! #[get("/{id}", name = "get_comic_book")]
//! pub async fn get_comic_book(
//!     service: web::Data<ComicBookService>,
//!     id: web::Path<i32>,
//! ) -> Result<HttpResponse, AppError> {
//!     let comic_book = service.get_comic_book(id.into_inner())?;
//!     Ok(HttpResponse::Ok().json(comic_book))
//! }
//! ```

pub mod auth;
pub mod comic_books;
pub mod health;

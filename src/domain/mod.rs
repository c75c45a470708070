//! # Domain Layer
//!
//! 코믹북 카탈로그와 사용자 인증의 도메인 타입을 모아둔 계층입니다.
//!
//! ```text
//! domain/
//! ├── entities/   ← 저장소가 보관하는 레코드 (ComicBook, User)
//! ├── dto/        ← 인증 API 요청/응답 본문
//! └── models/     ← 인증 컨텍스트, JWT 클레임
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{ComicBook, User};
pub use dto::{
    LoginRequest, LoginResponse, LoginUserResponse, MessageResponse, ProfileResponse,
    RegisterRequest, UpdateProfileRequest,
};
pub use models::{AuthenticatedUser, TokenClaims};

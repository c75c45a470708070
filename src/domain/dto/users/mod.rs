//! # User DTOs
//!
//! 인증 API(`/api/auth/*`)의 요청/응답 본문입니다.
//!
//! | 엔드포인트 | 요청 | 응답 |
//! |-----------|------|------|
//! | `POST /api/auth/register` | [`RegisterRequest`] | [`MessageResponse`] |
//! | `POST /api/auth/login` | [`LoginRequest`] | [`LoginResponse`] |
//! | `GET /api/auth/profile` | - | [`ProfileResponse`] |
//! | `PUT /api/auth/profile` | [`UpdateProfileRequest`] | [`MessageResponse`] |

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

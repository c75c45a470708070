//! # Domain Models
//!
//! 저장되지 않고 요청 처리 중에만 쓰이는 모델입니다.
//!
//! - [`auth`] - 인증된 사용자
//! - [`token`] - JWT 클레임

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;

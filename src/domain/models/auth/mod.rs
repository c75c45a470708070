//! 요청 인증 모델

pub mod authenticated_user;

pub use authenticated_user::*;

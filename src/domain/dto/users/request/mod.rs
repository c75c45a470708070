//! 사용자 요청 DTO

pub mod auth_request;

pub use auth_request::*;

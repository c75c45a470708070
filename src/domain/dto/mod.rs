//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 오가는 요청/응답 구조체입니다.
//! 코믹북은 엔티티가 곧 본문이므로 별도 DTO가 없습니다.

pub mod users;

pub use users::*;

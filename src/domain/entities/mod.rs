//! # Domain Entities
//!
//! 저장소가 보관하는 핵심 도메인 엔티티들입니다.
//!
//! - [`comic_books`] - 카탈로그의 코믹북 레코드
//! - [`users`] - 인증 대상 사용자 계정

pub mod comic_books;
pub mod users;

pub use comic_books::*;
pub use users::*;

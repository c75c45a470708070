//! # Service Layer
//!
//! 비즈니스 로직 계층입니다. 각 서비스는 레지스트리에 `Service`로 등록되며
//! 저장소 인터페이스에만 의존합니다.
//!
//! - [`auth`] - JWT 발급/검증 (`TokenService`)
//! - [`comic_books`] - 카탈로그 CRUD (`ComicBookService`)
//! - [`users`] - 가입, 로그인, 프로필 (`UserService`)

pub mod auth;
pub mod comic_books;
pub mod users;

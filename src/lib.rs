//! 코믹북 카탈로그 API
//!
//! 코믹북 카탈로그 CRUD와 이메일/비밀번호 기반 JWT 인증을 제공하는
//! Actix-web 서비스입니다. 모든 데이터는 프로세스 메모리에 보관됩니다.
//!
//! # Features
//!
//! - **카탈로그 관리**: 코믹북 목록/조회/등록/수정/삭제
//! - **사용자 인증**: 회원가입, 로그인, 프로필 조회/수정
//! - **JWT 인증**: HS256 서명 액세스 토큰 (기본 24시간)
//! - **레지스트리 DI**: `inventory` 기반 컴포넌트 자동 등록
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 인메모리 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use comic_book_api::core::registry::ServiceLocator;
//! use comic_book_api::services::comic_books::ComicBookService;
//!
//! ServiceLocator::initialize_all();
//!
//! let catalog = ComicBookService::instance();
//! let created = catalog.create_comic_book(comic_book);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

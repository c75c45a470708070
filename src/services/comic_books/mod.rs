//! 코믹북 서비스 모듈

pub mod comic_book_service;

pub use comic_book_service::*;

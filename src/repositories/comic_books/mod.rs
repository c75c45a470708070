//! 코믹북 리포지토리 모듈

pub mod comic_book_repo;

pub use comic_book_repo::*;

//! 코믹북 엔티티 모듈

pub mod comic_book;

pub use comic_book::ComicBook;

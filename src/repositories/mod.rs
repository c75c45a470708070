//! # Repository Layer
//!
//! 데이터 액세스 계층입니다. 각 리포지토리는 저장소 인터페이스(trait)와
//! 그 인메모리 구현을 함께 제공하며, 레지스트리에 `Repository`로 등록됩니다.
//!
//! | 리포지토리 | 인터페이스 | 보관 대상 |
//! |-----------|-----------|----------|
//! | [`ComicBookRepository`](comic_books::ComicBookRepository) | [`ComicBookStore`](comic_books::ComicBookStore) | 코믹북 카탈로그 |
//! | [`UserRepository`](users::UserRepository) | [`UserStore`](users::UserStore) | 사용자 계정 |

pub mod comic_books;
pub mod users;

//! # 코믹북 리포지토리 구현
//!
//! 카탈로그의 코믹북 레코드를 프로세스 메모리에 보관하는 리포지토리입니다.
//!
//! ## 특징
//!
//! - **삽입 순서 보존**: `list`는 저장된 순서 그대로 반환
//! - **식별자 부여**: 생성 시 `기존 최대 ID + 1` (비어 있으면 1)
//! - **원자적 생성**: 최대값 계산, 부여, 추가가 하나의 쓰기 락 안에서 수행
//! - **명시적 수정 결과**: 대상이 없어 적용되지 않은 수정을 `UpdateOutcome`으로 알림
//!
//! 저장소는 프로세스가 끝날 때까지 유지되며 영속화는 하지 않습니다.

use std::any::{Any, TypeId};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::registry::{ComponentKind, ComponentRegistration};
use crate::domain::entities::comic_books::comic_book::ComicBook;

/// 수정 요청의 처리 결과
///
/// `applied`가 `false`이면 같은 ID의 레코드가 없어 아무것도 바뀌지 않았고,
/// `comic_book`은 입력 레코드 그대로입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub comic_book: ComicBook,
    pub applied: bool,
}

/// 코믹북 카탈로그 저장소 인터페이스
///
/// 서비스 계층은 이 trait만 바라보므로, 다른 저장 방식으로 바꿀 때
/// 구현체만 교체하면 됩니다.
pub trait ComicBookStore: Send + Sync {
    /// 저장된 모든 레코드 (저장 순서)
    fn list(&self) -> Vec<ComicBook>;

    /// ID로 조회. 없으면 `None`
    fn get(&self, id: i32) -> Option<ComicBook>;

    /// 새 레코드 저장
    ///
    /// 입력의 `id`는 무시하고 새 식별자를 부여한 뒤 저장된 레코드를 반환합니다.
    fn create(&self, comic_book: ComicBook) -> ComicBook;

    /// 같은 ID의 레코드를 교체
    ///
    /// 기존 레코드를 제거하고 새 레코드를 맨 뒤에 추가합니다.
    fn update(&self, comic_book: ComicBook) -> UpdateOutcome;

    /// ID로 삭제하고 삭제된 레코드를 반환. 없으면 `None`
    fn delete(&self, id: i32) -> Option<ComicBook>;
}

/// 인메모리 코믹북 리포지토리
///
/// 모든 연산은 `RwLock` 하나로 보호됩니다. 락이 poison되어도 `Vec`의
/// 불변식은 깨지지 않으므로 내부 값을 그대로 이어서 사용합니다.
#[derive(Debug, Default)]
pub struct ComicBookRepository {
    comic_books: RwLock<Vec<ComicBook>>,
}

impl ComicBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<ComicBook>> {
        self.comic_books.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<ComicBook>> {
        self.comic_books.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ComicBookStore for ComicBookRepository {
    fn list(&self) -> Vec<ComicBook> {
        self.read().clone()
    }

    fn get(&self, id: i32) -> Option<ComicBook> {
        self.read().iter().find(|comic_book| comic_book.id == id).cloned()
    }

    fn create(&self, comic_book: ComicBook) -> ComicBook {
        let mut comic_books = self.write();

        let next_id = comic_books
            .iter()
            .map(|existing| existing.id)
            .max()
            .map_or(1, |max_id| max_id + 1);

        let stored = comic_book.with_id(next_id);
        comic_books.push(stored.clone());
        stored
    }

    fn update(&self, comic_book: ComicBook) -> UpdateOutcome {
        let mut comic_books = self.write();

        match comic_books.iter().position(|existing| existing.id == comic_book.id) {
            Some(index) => {
                comic_books.remove(index);
                comic_books.push(comic_book.clone());
                UpdateOutcome { comic_book, applied: true }
            }
            None => UpdateOutcome { comic_book, applied: false },
        }
    }

    fn delete(&self, id: i32) -> Option<ComicBook> {
        let mut comic_books = self.write();
        let index = comic_books.iter().position(|existing| existing.id == id)?;
        Some(comic_books.remove(index))
    }
}

fn comic_book_repository_constructor() -> Arc<dyn Any + Send + Sync> {
    Arc::new(ComicBookRepository::new())
}

inventory::submit! {
    ComponentRegistration {
        name: "comic_book_repository",
        kind: ComponentKind::Repository,
        type_id: TypeId::of::<ComicBookRepository>,
        constructor: comic_book_repository_constructor,
    }
}

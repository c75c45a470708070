//! # 코믹북 카탈로그 서비스
//!
//! 카탈로그 CRUD의 비즈니스 규칙을 담당합니다. 저장은 [`ComicBookStore`]에
//! 위임하고, 없는 레코드와 경로/본문 ID 불일치를 `AppError`로 바꿉니다.
//!
//! ## 수정 요청 처리
//!
//! | 상황 | 결과 |
//! |------|------|
//! | 경로 ID ≠ 본문 ID | `ValidationError` (400) |
//! | 레코드 존재 | 교체 후 반환 |
//! | 레코드 없음 (기본) | 경고 로그 후 입력 그대로 반환 |
//! | 레코드 없음 (`COMICBOOK_STRICT_UPDATE=true`) | `NotFound` (404) |

use std::any::{Any, TypeId};
use std::sync::Arc;

use crate::config::CatalogConfig;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{ComponentKind, ComponentRegistration, ServiceLocator};
use crate::domain::entities::comic_books::comic_book::ComicBook;
use crate::repositories::comic_books::{ComicBookRepository, ComicBookStore};

/// 코믹북 카탈로그 비즈니스 로직 서비스
#[derive(Clone)]
pub struct ComicBookService {
    store: Arc<dyn ComicBookStore>,
    strict_update: bool,
}

impl ComicBookService {
    pub fn new(store: Arc<dyn ComicBookStore>, strict_update: bool) -> Self {
        Self {
            store,
            strict_update,
        }
    }

    /// 싱글톤 인스턴스
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    pub fn list_comic_books(&self) -> Vec<ComicBook> {
        self.store.list()
    }

    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 코믹북이 없는 경우
    pub fn get_comic_book(&self, id: i32) -> AppResult<ComicBook> {
        self.store.get(id).ok_or_else(|| Self::not_found(id))
    }

    /// 새 코믹북 등록
    ///
    /// 요청 본문의 `id`는 무시되고 저장소가 새 ID를 부여합니다.
    pub fn create_comic_book(&self, comic_book: ComicBook) -> ComicBook {
        let created = self.store.create(comic_book);
        log::info!("📚 Comic book created: {} (id {})", created.title, created.id);
        created
    }

    /// 코믹북 수정
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 경로 ID와 본문 ID가 다른 경우
    /// * `AppError::NotFound` - 엄격 모드에서 대상이 없는 경우
    pub fn update_comic_book(&self, path_id: i32, comic_book: ComicBook) -> AppResult<ComicBook> {
        if comic_book.id != path_id {
            return Err(AppError::ValidationError(format!(
                "Path id {} does not match body id {}",
                path_id, comic_book.id
            )));
        }

        let outcome = self.store.update(comic_book);
        if !outcome.applied {
            log::warn!("Update ignored, comic book {} does not exist", path_id);
            if self.strict_update {
                return Err(Self::not_found(path_id));
            }
        }

        Ok(outcome.comic_book)
    }

    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 코믹북이 없는 경우
    pub fn delete_comic_book(&self, id: i32) -> AppResult<ComicBook> {
        let removed = self.store.delete(id).ok_or_else(|| Self::not_found(id))?;
        log::info!("🗑️ Comic book deleted: {} (id {})", removed.title, removed.id);
        Ok(removed)
    }

    fn not_found(id: i32) -> AppError {
        AppError::NotFound(format!("Comic book {} not found", id))
    }
}

fn comic_book_service_constructor() -> Arc<dyn Any + Send + Sync> {
    let repository: Arc<dyn ComicBookStore> = ServiceLocator::get::<ComicBookRepository>();
    Arc::new(ComicBookService::new(repository, CatalogConfig::strict_update()))
}

inventory::submit! {
    ComponentRegistration {
        name: "comic_book_service",
        kind: ComponentKind::Service,
        type_id: TypeId::of::<ComicBookService>,
        constructor: comic_book_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn comic(title: &str) -> ComicBook {
        ComicBook {
            title: title.to_string(),
            series: "Detective Comics".to_string(),
            issue: "#27".to_string(),
            genre: "Superhero".to_string(),
            rating: 9.8,
            price: 4.99,
            release_date: NaiveDate::from_ymd_opt(1939, 5, 1).unwrap(),
            ..ComicBook::default()
        }
    }

    fn service(strict_update: bool) -> ComicBookService {
        ComicBookService::new(Arc::new(ComicBookRepository::new()), strict_update)
    }

    #[test]
    fn test_create_then_get() {
        let service = service(false);

        let created = service.create_comic_book(comic("The Bat-Man"));

        assert_eq!(created.id, 1);
        assert_eq!(service.get_comic_book(1).unwrap(), created);
        assert_eq!(service.list_comic_books(), vec![created]);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        assert_eq!(
            service(false).get_comic_book(42),
            Err(AppError::NotFound("Comic book 42 not found".to_string()))
        );
    }

    #[test]
    fn test_update_with_mismatched_id_is_rejected() {
        let service = service(false);
        let created = service.create_comic_book(comic("The Bat-Man"));

        let result = service.update_comic_book(created.id + 1, created.clone());

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(service.get_comic_book(created.id).unwrap(), created);
    }

    #[test]
    fn test_update_existing_replaces_record() {
        let service = service(false);
        let created = service.create_comic_book(comic("The Bat-Man"));

        let changed = ComicBook {
            price: 1.0,
            ..created.clone()
        };
        let updated = service.update_comic_book(created.id, changed.clone()).unwrap();

        assert_eq!(updated, changed);
        assert_eq!(service.get_comic_book(created.id).unwrap().price, 1.0);
    }

    #[test]
    fn test_update_missing_is_lenient_by_default() {
        let service = service(false);
        let ghost = comic("Ghost").with_id(99);

        let result = service.update_comic_book(99, ghost.clone()).unwrap();

        assert_eq!(result, ghost);
        assert!(service.list_comic_books().is_empty());
    }

    #[test]
    fn test_update_missing_in_strict_mode_is_not_found() {
        let service = service(true);

        let result = service.update_comic_book(99, comic("Ghost").with_id(99));

        assert_eq!(
            result,
            Err(AppError::NotFound("Comic book 99 not found".to_string()))
        );
    }

    #[test]
    fn test_delete() {
        let service = service(false);
        let created = service.create_comic_book(comic("The Bat-Man"));

        assert_eq!(service.delete_comic_book(created.id).unwrap(), created);
        assert!(matches!(
            service.delete_comic_book(created.id),
            Err(AppError::NotFound(_))
        ));
    }
}

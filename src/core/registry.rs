//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 카탈로그 API의 리포지토리와 서비스를 프로세스 수명 동안 하나씩만 보관하는
//! 타입 기반 DI 컨테이너입니다. Spring의 ApplicationContext와 같은 역할을 합니다.
//!
//! ## 동작 원리
//!
//! ```text
//! 1. 컴파일 타임 (Component Scanning)
//!    ├─ 각 컴포넌트 파일의 inventory::submit! → ComponentRegistration
//!    └─ inventory::collect! → 전역 레지스트리에 수집
//!
//! 2. 애플리케이션 시작 (Composition Root)
//!    ├─ main → ServiceLocator::initialize_all()
//!    ├─ Repository 먼저, Service 나중에 생성
//!    └─ 생성된 인스턴스는 TypeId 키로 캐싱
//!
//! 3. 의존성 해결 (Autowiring)
//!    ├─ 생성자 안에서 ServiceLocator::get::<T>() 호출
//!    ├─ 캐시에 있으면 그대로 반환
//!    └─ 없으면 등록된 생성자로 만들고 캐싱
//! ```
//!
//! ## 컴포넌트 등록
//!
//! ```rust,ignore
//! fn comic_book_service_constructor() -> Arc<dyn Any + Send + Sync> {
//!     Arc::new(ComicBookService::new(ServiceLocator::get::<ComicBookRepository>(), false))
//! }
//!
//! inventory::submit! {
//!     ComponentRegistration {
//!         name: "comic_book_service",
//!         kind: ComponentKind::Service,
//!         type_id: TypeId::of::<ComicBookService>,
//!         constructor: comic_book_service_constructor,
//!     }
//! }
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::{Lazy, OnceCell};

use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

/// 컴포넌트 계층 구분
///
/// `initialize_all`은 이 순서대로 인스턴스를 생성합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// 데이터 액세스 계층
    Repository,
    /// 비즈니스 로직 계층
    Service,
}

/// 컴포넌트 등록 정보
///
/// 각 컴포넌트 파일에서 `inventory::submit!`으로 제출되어
/// 컴파일 타임에 수집됩니다.
pub struct ComponentRegistration {
    /// 표시용 이름 (`comic_book_repository` 등)
    pub name: &'static str,
    /// 계층 구분
    pub kind: ComponentKind,
    /// 등록 대상 타입의 `TypeId`
    pub type_id: fn() -> TypeId,
    /// 인스턴스 생성 함수
    pub constructor: fn() -> Arc<dyn Any + Send + Sync>,
}

inventory::collect!(ComponentRegistration);

/// `TypeId` → 등록정보 매핑 캐시
static REGISTRATIONS: Lazy<HashMap<TypeId, &'static ComponentRegistration>> = Lazy::new(|| {
    inventory::iter::<ComponentRegistration>()
        .map(|registration| ((registration.type_id)(), registration))
        .collect()
});

/// 싱글톤 의존성 주입 컨테이너
///
/// # 주요 기능
///
/// - **싱글톤 보장**: 타입마다 `OnceCell` 하나를 두어 생성자가 정확히 한 번 실행됨
/// - **지연 초기화**: `get` 최초 호출 시 등록된 생성자로 생성
/// - **순환 참조 감지**: 현재 스레드에서 생성 중인 타입을 추적하여 즉시 패닉
///
/// 여러 스레드가 같은 타입을 동시에 처음 요청하면 하나만 생성하고
/// 나머지는 생성이 끝날 때까지 기다립니다. 생성자 안에서 다른 컴포넌트를
/// `get`으로 가져와도 맵 락을 잡고 있지 않으므로 교착 상태가 생기지 않습니다.
pub struct ServiceLocator {
    cells: RwLock<HashMap<TypeId, Arc<OnceCell<Arc<dyn Any + Send + Sync>>>>>,
}

thread_local! {
    /// 현재 스레드에서 생성자가 실행 중인 타입들
    static RESOLVING: RefCell<HashSet<TypeId>> = RefCell::new(HashSet::new());
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            cells: RwLock::new(HashMap::new()),
        }
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// Spring의 `ApplicationContext.getBean(Class<T>)`과 같은 역할입니다.
    ///
    /// # Panics
    ///
    /// - 등록되지 않은 타입을 요청한 경우
    /// - 생성 도중 자기 자신을 다시 요청하는 순환 의존이 있는 경우
    ///
    /// 두 경우 모두 애플리케이션 구성 오류이므로 시작 시점에 바로 드러나도록 합니다.
    pub fn get<T: Any + Send + Sync>() -> Arc<T> {
        Self::try_get::<T>().unwrap_or_else(|| {
            panic!(
                "Component not found: {}. Register it with inventory::submit!",
                std::any::type_name::<T>()
            )
        })
    }

    /// 지정된 타입의 인스턴스를 가져오되, 등록되지 않았다면 `None`을 반환합니다.
    pub fn try_get<T: Any + Send + Sync>() -> Option<Arc<T>> {
        let instance = LOCATOR.resolve(TypeId::of::<T>(), std::any::type_name::<T>())?;
        instance.downcast::<T>().ok()
    }

    /// 등록된 모든 리포지토리와 서비스를 생성합니다.
    ///
    /// 애플리케이션 시작 시 한 번 호출되며, 리포지토리를 먼저 만든 뒤 서비스를 만듭니다.
    /// 이미 생성된 컴포넌트는 다시 만들지 않습니다.
    ///
    /// # Returns
    ///
    /// 생성(또는 확인)된 컴포넌트 수
    pub fn initialize_all() -> usize {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let mut counts = [0usize; 2];
        let steps = [
            (1u8, ComponentKind::Repository, "Repository"),
            (2u8, ComponentKind::Service, "Service"),
        ];

        for (index, (step, kind, label)) in steps.into_iter().enumerate() {
            let mut registrations: Vec<_> = inventory::iter::<ComponentRegistration>()
                .filter(|registration| registration.kind == kind)
                .collect();
            registrations.sort_by_key(|registration| registration.name);

            if registrations.is_empty() {
                continue;
            }

            print_step_start(step, &format!("Creating {} instances", label));
            for registration in &registrations {
                LOCATOR.resolve((registration.type_id)(), registration.name);
                print_sub_task(registration.name, "✓ Created");
            }
            print_step_complete(step, &format!("{} instances created", label), registrations.len());

            counts[index] = registrations.len();
        }

        print_final_summary(counts[0], counts[1]);
        counts[0] + counts[1]
    }

    fn resolve(&self, type_id: TypeId, type_name: &str) -> Option<Arc<dyn Any + Send + Sync>> {
        let registration = REGISTRATIONS.get(&type_id)?;
        let cell = self.cell_for(type_id);

        if let Some(instance) = cell.get() {
            return Some(instance.clone());
        }

        let reentered = RESOLVING.with(|resolving| !resolving.borrow_mut().insert(type_id));
        if reentered {
            log::error!(
                "❌ Circular dependency detected for type: {}",
                Self::extract_clean_type_name(type_name)
            );
            panic!("Circular dependency detected: {} is already being initialized", type_name);
        }

        let _guard = ResolvingGuard(type_id);
        Some(cell.get_or_init(|| (registration.constructor)()).clone())
    }

    fn cell_for(&self, type_id: TypeId) -> Arc<OnceCell<Arc<dyn Any + Send + Sync>>> {
        if let Some(cell) = self
            .cells
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
        {
            return cell.clone();
        }

        self.cells
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_default()
            .clone()
    }

    /// `std::any::type_name`의 모듈 경로를 떼어내고 타입 이름만 남깁니다.
    fn extract_clean_type_name(type_name: &str) -> &str {
        type_name.rsplit("::").next().unwrap_or(type_name)
    }
}

/// 생성자가 끝나거나 패닉으로 풀릴 때 `RESOLVING`에서 타입을 제거
struct ResolvingGuard(TypeId);

impl Drop for ResolvingGuard {
    fn drop(&mut self) {
        RESOLVING.with(|resolving| {
            resolving.borrow_mut().remove(&self.0);
        });
    }
}

/// 전역 서비스 로케이터 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

//! # Core Framework Module
//!
//! 카탈로그 API 전반에서 공유하는 핵심 기반 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: Spring의 ApplicationContext 역할
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 컴포넌트 등록
//! - **싱글톤 관리**: Thread-safe한 인스턴스 생명주기 관리
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **검증 통합**: `validator` 결과를 에러 목록으로 변환
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `@Component` | `inventory::submit! { ComponentRegistration { .. } }` |
//! | `ApplicationContext` | `ServiceLocator` |
//! | `@Autowired` | 생성자 안의 `ServiceLocator::get::<T>()` |
//! | `@ExceptionHandler` | `AppError::error_response()` |
//! | Bean 생명주기 | Singleton, 시작 시 일괄 생성 |
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! ❌ Circular dependency detected for type: ComicBookService
//! panic: Circular dependency detected: ComicBookService is already being initialized
//! ```
//!
//! ### 미등록 타입 에러
//! ```text
//! panic: Component not found: EmailService. Register it with inventory::submit!
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;

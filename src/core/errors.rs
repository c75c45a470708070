//! # Application Error Handling System
//!
//! 카탈로그 API 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! 모든 실패는 `AppError`로 수렴하고, `actix_web::ResponseError` 구현을 통해
//! 일관된 JSON 에러 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 경로/본문 ID 불일치 등 단일 검증 실패 |
//! | `ValidationFailed` | 400 Bad Request | 필드 단위 검증 실패 목록 (회원가입, 프로필 수정) |
//! | `AuthenticationError` | 401 Unauthorized | 로그인 실패, 토큰 누락/만료 |
//! | `NotFound` | 404 Not Found | 존재하지 않는 코믹북/사용자 |
//! | `InternalError` | 500 Internal Server Error | 해싱 실패, 토큰 서명 실패 등 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": "not_found",
//!   "message": "Comic book 99 not found"
//! }
//! ```
//!
//! `ValidationFailed`는 개별 메시지 목록을 `errors` 필드로 함께 내려보냅니다.
//!
//! ```json
//! {
//!   "error": "validation_failed",
//!   "message": "One or more validation errors occurred",
//!   "errors": ["Email 'reader@example.com' is already taken."]
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error`/`Display`를 구현하고, `ResponseError`로
/// HTTP 응답 변환을 담당합니다. 핸들러는 `Result<HttpResponse, AppError>`를
/// 반환하기만 하면 됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 단일 메시지로 표현되는 입력값 검증 에러
    ///
    /// ```rust,ignore
    /// if path_id != comic_book.id {
    ///     return Err(AppError::ValidationError("Route id does not match body id".to_string()));
    /// }
    /// ```
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필드 단위 검증 에러 목록
    ///
    /// 사용자 저장소가 보고한 에러(중복 이메일 등)와 DTO 검증 에러를
    /// 그대로 클라이언트에 전달합니다.
    #[error("Validation failed: {}", .0.join(", "))]
    ValidationFailed(Vec<String>),

    /// 인증 실패 에러
    ///
    /// 로그인 실패 시에는 존재하지 않는 이메일과 잘못된 비밀번호를
    /// 구분하지 않고 동일한 메시지를 사용해야 합니다.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러
    ///
    /// 5xx 응답에는 내부 정보가 섞이지 않도록 고정 메시지를 내려보내고,
    /// 상세 내용은 서버 로그에만 남깁니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 들어갈 에러 코드
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_error",
            AppError::ValidationFailed(_) => "validation_failed",
            AppError::AuthenticationError(_) => "unauthorized",
            AppError::NotFound(_) => "not_found",
            AppError::InternalError(_) => "internal_error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 변형은 `{"error": code, "message": text}` 형식을 따르며,
    /// `ValidationFailed`만 `errors` 배열을 추가로 포함합니다.
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::NotFound(msg) => json!({
                "error": self.error_code(),
                "message": msg,
            }),
            AppError::ValidationFailed(errors) => json!({
                "error": self.error_code(),
                "message": "One or more validation errors occurred",
                "errors": errors,
            }),
            AppError::InternalError(msg) => {
                log::error!("내부 서버 에러: {}", msg);
                json!({
                    "error": self.error_code(),
                    "message": "An unexpected error occurred",
                })
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// `validator` 검증 결과를 메시지 목록으로 평탄화합니다.
///
/// 필드 이름 순으로 정렬하여 응답 순서를 결정적으로 유지합니다.
/// 메시지가 지정되지 않은 규칙은 `"{field} is invalid"`로 대체됩니다.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let messages = fields
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect();

        AppError::ValidationFailed(messages)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let hash = bcrypt::hash(password, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

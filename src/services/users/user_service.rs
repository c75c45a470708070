//! # 사용자 관리 서비스 구현
//!
//! 회원가입, 로그인, 프로필 조회/수정의 비즈니스 로직입니다.
//! 비밀번호 해싱과 검증은 [`UserStore`]가 맡고, 토큰 발급은
//! 핸들러가 [`TokenService`](crate::services::auth::TokenService)로 처리합니다.
//!
//! ## 보안 규칙
//!
//! - 로그인 실패는 원인과 관계없이 항상 같은 메시지(`Invalid email or password`)
//! - 없는 이메일도 bcrypt 검증 비용을 동일하게 지불
//! - 응답 DTO에는 비밀번호 해시가 포함되지 않음
//! - 요청 검증 오류는 필드 순서로 정렬된 목록으로 응답

use std::any::{Any, TypeId};
use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{ComponentKind, ComponentRegistration, ServiceLocator};
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use crate::domain::dto::users::response::{MessageResponse, ProfileResponse};
use crate::domain::entities::users::user::User;
use crate::repositories::users::{UserRepository, UserStore};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// 사용자 관리 비즈니스 로직 서비스
///
/// ```rust,ignore
/// let user_service = UserService::instance();
///
/// user_service.register(request).await?;
/// let user = user_service.login(credentials).await?;
/// let profile = user_service.get_profile(&user.id).await?;
/// ```
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 싱글톤 인스턴스
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 새 사용자 계정 등록
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationFailed` - 입력값 검증 실패 또는 이메일 중복
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    pub async fn register(&self, request: RegisterRequest) -> AppResult<MessageResponse> {
        request.validate()?;

        let user = User::new(
            request.email,
            request.first_name,
            request.last_name,
            request.date_of_birth,
        );
        let created = self.users.create(user, &request.password).await?;

        log::info!("✅ User registered: {}", created.id);
        Ok(MessageResponse::new("User registered successfully"))
    }

    /// 이메일/비밀번호 인증
    ///
    /// 성공하면 마지막 로그인 시간을 갱신한 사용자를 반환합니다.
    /// 시간 갱신은 다른 필드를 건드리지 않으므로 동시에 진행된 프로필 수정이 유지됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 사용자가 없거나 비밀번호가 틀린 경우
    pub async fn login(&self, request: LoginRequest) -> AppResult<User> {
        let Some(user) = self
            .users
            .verify_credentials(&request.email, &request.password)
            .await?
        else {
            log::warn!("Login failed: invalid credentials");
            return Err(Self::invalid_credentials());
        };

        let user = self.users.record_login(&user.id, Utc::now()).await?;

        log::info!("🔑 User logged in: {}", user.id);
        Ok(user)
    }

    /// # Errors
    ///
    /// * `AppError::NotFound` - 토큰의 사용자가 더 이상 없는 경우
    pub async fn get_profile(&self, user_id: &str) -> AppResult<ProfileResponse> {
        let user = self.find_user(user_id).await?;
        Ok(ProfileResponse::from(&user))
    }

    /// 이름과 생년월일 수정
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationFailed` - 입력값 검증 실패
    /// * `AppError::NotFound` - 사용자가 없는 경우
    pub async fn update_profile(
        &self,
        user_id: &str,
        request: UpdateProfileRequest,
    ) -> AppResult<MessageResponse> {
        request.validate()?;

        let mut user = self.find_user(user_id).await?;
        user.first_name = request.first_name;
        user.last_name = request.last_name;
        user.date_of_birth = request.date_of_birth;
        self.users.update(user).await?;

        log::info!("User profile updated: {}", user_id);
        Ok(MessageResponse::new("Profile updated successfully"))
    }

    async fn find_user(&self, user_id: &str) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    fn invalid_credentials() -> AppError {
        AppError::AuthenticationError(INVALID_CREDENTIALS.to_string())
    }
}

fn user_service_constructor() -> Arc<dyn Any + Send + Sync> {
    let repository: Arc<dyn UserStore> = ServiceLocator::get::<UserRepository>();
    Arc::new(UserService::new(repository))
}

inventory::submit! {
    ComponentRegistration {
        name: "user_service",
        kind: ComponentKind::Service,
        type_id: TypeId::of::<UserService>,
        constructor: user_service_constructor,
    }
}

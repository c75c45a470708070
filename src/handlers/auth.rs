//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 기반 회원가입과 로그인, 그리고 로그인한 사용자의
//! 프로필 조회/수정을 처리합니다. 프로필 엔드포인트는 라우트 설정에서
//! `AuthMiddleware::required()`로 보호됩니다.
//!
//! # Endpoints
//!
//! - `POST /api/auth/register` - 회원가입
//! - `POST /api/auth/login` - 로그인 (JWT 발급)
//! - `GET /api/auth/profile` - 내 프로필 조회
//! - `PUT /api/auth/profile` - 내 프로필 수정
use actix_web::{get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use crate::domain::dto::users::response::{LoginResponse, LoginUserResponse};
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::services::auth::TokenService;
use crate::services::users::UserService;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/auth/register`
#[post("/register")]
pub async fn register(
    user_service: web::Data<UserService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = user_service.register(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 로컬 로그인 핸들러
///
/// 인증에 성공하면 액세스 토큰과 공개 사용자 정보를 반환합니다.
///
/// # Endpoint
/// `POST /api/auth/login`
#[post("/login")]
pub async fn login(
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.login(payload.into_inner()).await?;

    let token = token_service.generate_access_token(&user).map_err(|e| {
        log::error!("토큰 생성 실패 - 사용자: {}, 에러: {}", user.id, e);
        e
    })?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        user: LoginUserResponse::from(&user),
    }))
}

/// # Endpoint
/// `GET /api/auth/profile`
#[get("")]
pub async fn get_profile(
    user_service: web::Data<UserService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = user_service.get_profile(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// # Endpoint
/// `PUT /api/auth/profile`
#[put("")]
pub async fn update_profile(
    user_service: web::Data<UserService>,
    user: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let response = user_service
        .update_profile(&user.user_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

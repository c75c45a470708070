//! JWT 토큰 관리 서비스 구현
//!
//! 로그인한 사용자에게 HS256으로 서명된 액세스 토큰을 발급하고,
//! 보호된 API로 들어온 토큰을 검증합니다.

use std::any::{Any, TypeId};
use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{ComponentKind, ComponentRegistration, ServiceLocator};
use crate::domain::entities::users::user::User;
use crate::domain::models::token::token::TokenClaims;

/// JWT 토큰 관리 서비스
///
/// 서명 키와 만료 시간은 생성 시점에 고정됩니다. 레지스트리 인스턴스는
/// `JwtConfig`에서 값을 읽고, 테스트는 `new`로 원하는 값을 넣습니다.
#[derive(Debug, Clone)]
pub struct TokenService {
    secret: String,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    /// 환경 변수 기반 설정으로 생성
    pub fn from_env() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// 싱글톤 인스턴스
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    pub fn expiration_hours(&self) -> i64 {
        self.expiration_hours
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 인코딩 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_service = TokenService::instance();
    /// let access_token = token_service.generate_access_token(&user)?;
    /// ```
    pub fn generate_access_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: user.id.clone(),
            email: user.email.clone(),
            name: user.display_name(),
            is_premium: user.is_premium,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::new(Algorithm::HS256), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명, 알고리즘(HS256), 만료 시간을 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료(`"Token has expired"`) 또는
    ///   서명/형식 오류(`"Invalid token"`)
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("Token has expired".to_string())
                }
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("Invalid token".to_string())
                }
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// `Authorization: Bearer {token}` 형식만 허용합니다.
    ///
    /// ```rust,ignore
    /// let token = token_service.extract_bearer_token("Bearer eyJhbGciOi...")?;
    /// let claims = token_service.verify_token(token)?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError(
                "Invalid authorization header format".to_string(),
            )),
        }
    }
}

fn token_service_constructor() -> Arc<dyn Any + Send + Sync> {
    Arc::new(TokenService::from_env())
}

inventory::submit! {
    ComponentRegistration {
        name: "token_service",
        kind: ComponentKind::Service,
        type_id: TypeId::of::<TokenService>,
        constructor: token_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SECRET: &str = "test-secret-key-that-is-long-enough-for-hs256";

    fn service() -> TokenService {
        TokenService::new(SECRET, 24)
    }

    fn user() -> User {
        User::new(
            "diana@themyscira.gov".to_string(),
            "Diana".to_string(),
            "Prince".to_string(),
            NaiveDate::from_ymd_opt(1941, 10, 21).unwrap(),
        )
    }

    #[test]
    fn test_generated_token_round_trips_claims() {
        let service = service();
        let user = user();

        let token = service.generate_access_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, "diana@themyscira.gov");
        assert_eq!(claims.name, "Diana Prince");
        assert!(!claims.is_premium);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_each_token_has_unique_jti() {
        let service = service();
        let user = user();

        let first = service.verify_token(&service.generate_access_token(&user).unwrap()).unwrap();
        let second = service.verify_token(&service.generate_access_token(&user).unwrap()).unwrap();

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_invalid() {
        let other = TokenService::new("a-completely-different-secret-key-value", 24);
        let token = other.generate_access_token(&user()).unwrap();

        assert_eq!(
            service().verify_token(&token),
            Err(AppError::AuthenticationError("Invalid token".to_string()))
        );
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let expired = TokenService::new(SECRET, -2);
        let token = expired.generate_access_token(&user()).unwrap();

        assert_eq!(
            service().verify_token(&token),
            Err(AppError::AuthenticationError("Token has expired".to_string()))
        );
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        assert_eq!(
            service().verify_token("not.a.jwt"),
            Err(AppError::AuthenticationError("Invalid token".to_string()))
        );
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(service.extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(service.extract_bearer_token("Basic dXNlcjpwYXNz").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
    }
}

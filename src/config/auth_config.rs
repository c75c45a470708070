//! 인증 관련 설정 관리 모듈
//!
//! JWT 서명 키와 토큰 만료 시간을 환경 변수에서 읽어옵니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-256-bit-key-generated-securely"
//! export JWT_EXPIRATION_HOURS="24"
//! ```

use std::env;

/// 개발용 기본 서명 키
///
/// `JWT_SECRET`이 없을 때만 사용되며, 사용 시 경고 로그가 남습니다.
const DEVELOPMENT_SECRET: &str = "comic-book-api-development-secret-key-change-me";

/// JWT 토큰 설정을 관리하는 구조체
///
/// HS256(HMAC-SHA-256) 대칭키 서명을 사용합니다.
///
/// ## 권장 설정값
///
/// - **개발**: 기본값(24시간)
/// - **프로덕션**: 32바이트 이상의 랜덤 키, 환경별로 다른 키 사용
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .ok()
            .filter(|secret| !secret.trim().is_empty())
            .unwrap_or_else(|| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                DEVELOPMENT_SECRET.to_string()
            })
    }

    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다.
    ///
    /// 기본값은 24시간이며, 0 이하의 값은 무시됩니다.
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|hours| *hours > 0)
            .unwrap_or(24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_defaults_when_unset() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }

        if env::var("JWT_SECRET").is_err() {
            assert_eq!(JwtConfig::secret(), DEVELOPMENT_SECRET);
        }
    }

    #[test]
    fn test_development_secret_is_long_enough_for_hs256() {
        assert!(DEVELOPMENT_SECRET.len() >= 32);
    }
}

//! JWT 인증 토큰 클레임
//!
//! RFC 7519 등록 클레임(`sub`, `jti`, `iat`, `exp`)과
//! 카탈로그 프론트엔드가 사용하는 사용자 클레임을 담습니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `email`: 사용자 이메일
/// - `name`: 표시 이름 (`"이름 성"`)
/// - `isPremium`: 프리미엄 회원 여부
/// - `jti`: 토큰 고유 ID (UUID v4)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp, 발급 + 24시간 기본)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    pub name: String,
    #[serde(rename = "isPremium")]
    pub is_premium: bool,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}
